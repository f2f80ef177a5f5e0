//! Async holder for the one state a presentation layer treats as current.
//!
//! [`SharedIndicator`] wraps a [`PageIndicatorState`] in an Embassy
//! [`Mutex`] so that an input task (buttons, encoders, swipe handling) and
//! a render task can share it. Each transition is applied under the lock:
//! on success the held state is replaced, on failure it is left as it was.
//!
//! # Example
//!
//! ```ignore
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
//! use page_dots::{PageIndicatorState, SharedIndicator};
//!
//! static INDICATOR: SharedIndicator<CriticalSectionRawMutex> =
//!     SharedIndicator::new(PageIndicatorState::new(4));
//!
//! // Input task:
//! if INDICATOR.step_forward().await.is_err() {
//!     // Already on the last page.
//! }
//!
//! // Render task:
//! let state = INDICATOR.get().await;
//! ```

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;

use crate::indicator::{IndicatorError, PageIndicatorState};

/// A [`PageIndicatorState`] shared between tasks.
pub struct SharedIndicator<M: RawMutex> {
    state: Mutex<M, PageIndicatorState>,
}

impl<M: RawMutex> SharedIndicator<M> {
    pub const fn new(state: PageIndicatorState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// Copy of the held state.
    pub async fn get(&self) -> PageIndicatorState {
        *self.state.lock().await
    }

    /// Replace the held state unconditionally, returning the previous one.
    ///
    /// Use this when the page count itself changes.
    pub async fn replace(&self, state: PageIndicatorState) -> PageIndicatorState {
        let mut held = self.state.lock().await;
        core::mem::replace(&mut *held, state)
    }

    /// Apply [`PageIndicatorState::step_forward()`] to the held state.
    pub async fn step_forward(&self) -> Result<PageIndicatorState, IndicatorError> {
        self.apply(PageIndicatorState::step_forward).await
    }

    /// Apply [`PageIndicatorState::step_backward()`] to the held state.
    pub async fn step_backward(&self) -> Result<PageIndicatorState, IndicatorError> {
        self.apply(PageIndicatorState::step_backward).await
    }

    /// Apply [`PageIndicatorState::move_to()`] to the held state.
    pub async fn move_to(&self, index: usize) -> Result<PageIndicatorState, IndicatorError> {
        self.apply(|s| s.move_to(index)).await
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Run `transition` under the lock and store its result only on success.
    async fn apply<F>(&self, transition: F) -> Result<PageIndicatorState, IndicatorError>
    where
        F: FnOnce(&PageIndicatorState) -> Result<PageIndicatorState, IndicatorError>,
    {
        let mut held = self.state.lock().await;
        let next = transition(&*held)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("indicator moved {} -> {}", held.current(), next.current());

        *held = next;
        Ok(next)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::*;

    fn shared(total: usize, current: usize) -> SharedIndicator<NoopRawMutex> {
        SharedIndicator::new(PageIndicatorState::with_current(total, current).unwrap())
    }

    #[test]
    fn successful_step_replaces_held_state() {
        let indicator = shared(3, 0);
        let next = block_on(indicator.step_forward()).unwrap();
        assert_eq!(next.current(), 1);
        assert_eq!(block_on(indicator.get()), next);
    }

    #[test]
    fn failed_step_leaves_held_state() {
        let indicator = shared(3, 2);
        assert_eq!(
            block_on(indicator.step_forward()),
            Err(IndicatorError::OutOfBounds)
        );
        assert_eq!(block_on(indicator.get()).current(), 2);

        let indicator = shared(3, 0);
        assert_eq!(
            block_on(indicator.step_backward()),
            Err(IndicatorError::OutOfBounds)
        );
        assert_eq!(block_on(indicator.get()).current(), 0);
    }

    #[test]
    fn move_to_applies_or_rejects() {
        let indicator = shared(5, 2);
        assert_eq!(block_on(indicator.move_to(4)).unwrap().current(), 4);
        assert_eq!(
            block_on(indicator.move_to(5)),
            Err(IndicatorError::OutOfBounds)
        );
        assert_eq!(block_on(indicator.get()).current(), 4);
    }

    #[test]
    fn replace_returns_previous() {
        let indicator = shared(5, 3);
        let previous = block_on(indicator.replace(PageIndicatorState::new(2)));
        assert_eq!(previous, PageIndicatorState::with_current(5, 3).unwrap());
        assert_eq!(block_on(indicator.get()), PageIndicatorState::new(2));
    }
}
