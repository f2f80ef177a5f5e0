use super::error::IndicatorError;
use super::mark::{Mark, Marks};

/// Immutable "`total` pages, currently at page `current`" value.
///
/// Construction is validated and every transition returns a new state,
/// leaving the receiver untouched. Because the type is `Copy`, callers can
/// hold any number of snapshots without coordination.
///
/// # Invariant
///
/// `current < total` whenever `total > 0`. The empty state
/// (`total == 0`) always has `current == 0` and rejects every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PageIndicatorState {
    total: usize,
    current: usize,
}

impl PageIndicatorState {
    /// Create a state with `total` pages, positioned on the first page.
    ///
    /// `new(0)` yields the empty indicator.
    pub const fn new(total: usize) -> Self {
        Self { total, current: 0 }
    }

    /// The empty indicator: no pages, `current == 0`.
    pub const fn empty() -> Self {
        Self::new(0)
    }

    /// Create a state with `total` pages, positioned on page `current`.
    ///
    /// Returns [`IndicatorError::OutOfBounds`] if `current >= total`, except
    /// for the empty case `with_current(0, 0)`, which is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use page_dots::{IndicatorError, PageIndicatorState};
    ///
    /// let state = PageIndicatorState::with_current(5, 2).unwrap();
    /// assert_eq!((state.total(), state.current()), (5, 2));
    ///
    /// assert_eq!(
    ///     PageIndicatorState::with_current(5, 5),
    ///     Err(IndicatorError::OutOfBounds)
    /// );
    /// assert!(PageIndicatorState::with_current(0, 0).unwrap().is_empty());
    /// ```
    pub fn with_current(total: usize, current: usize) -> Result<Self, IndicatorError> {
        if total == 0 && current == 0 {
            return Ok(Self::empty());
        }
        Self::check_index(total, current)?;
        Ok(Self { total, current })
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Number of pages.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Zero-based index of the active page.
    pub const fn current(&self) -> usize {
        self.current
    }

    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns `true` if the active page is the first one.
    ///
    /// Always `false` for the empty indicator.
    pub const fn is_first(&self) -> bool {
        !self.is_empty() && self.current == 0
    }

    /// Returns `true` if the active page is the last one.
    ///
    /// Always `false` for the empty indicator.
    pub const fn is_last(&self) -> bool {
        !self.is_empty() && self.current + 1 == self.total
    }

    /// Returns `true` exactly when [`step_forward()`](Self::step_forward)
    /// would succeed. Useful for enabling a "next" control.
    pub const fn can_step_forward(&self) -> bool {
        self.current + 1 < self.total
    }

    /// Returns `true` exactly when [`step_backward()`](Self::step_backward)
    /// would succeed.
    pub const fn can_step_backward(&self) -> bool {
        self.current > 0
    }

    /// Returns `true` if mark `index` is the highlighted one.
    pub const fn is_current(&self, index: usize) -> bool {
        !self.is_empty() && index == self.current
    }

    /// The [`Mark`] for page `index`, or `None` if `index >= total`.
    pub fn mark(&self, index: usize) -> Option<Mark> {
        if index >= self.total {
            return None;
        }
        Some(Mark::for_index(index, self.current))
    }

    /// Iterate over one [`Mark`] per page, in page order.
    pub fn marks(&self) -> Marks {
        Marks::new(*self)
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Move one page forward.
    ///
    /// Returns [`IndicatorError::OutOfBounds`] if already on the last page
    /// (or if the indicator is empty). `self` is left unchanged either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use page_dots::{IndicatorError, PageIndicatorState};
    ///
    /// let last = PageIndicatorState::with_current(5, 4).unwrap();
    /// assert_eq!(last.step_forward(), Err(IndicatorError::OutOfBounds));
    /// assert_eq!(last.current(), 4);
    /// ```
    pub fn step_forward(&self) -> Result<Self, IndicatorError> {
        if !self.can_step_forward() {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "step_forward rejected: current={} total={}",
                self.current,
                self.total
            );
            return Err(IndicatorError::OutOfBounds);
        }
        Ok(self.at(self.current + 1))
    }

    /// Move one page backward.
    ///
    /// Returns [`IndicatorError::OutOfBounds`] if already on the first page
    /// (or if the indicator is empty).
    pub fn step_backward(&self) -> Result<Self, IndicatorError> {
        if !self.can_step_backward() {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "step_backward rejected: current={} total={}",
                self.current,
                self.total
            );
            return Err(IndicatorError::OutOfBounds);
        }
        Ok(self.at(self.current - 1))
    }

    /// Jump to page `index`, regardless of the current page.
    ///
    /// Returns [`IndicatorError::OutOfBounds`] if `index >= total`.
    pub fn move_to(&self, index: usize) -> Result<Self, IndicatorError> {
        Self::check_index(self.total, index)?;
        Ok(self.at(index))
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Copy of `self` positioned at `index`. Caller has validated `index`.
    const fn at(&self, index: usize) -> Self {
        Self {
            total: self.total,
            current: index,
        }
    }

    fn check_index(total: usize, index: usize) -> Result<(), IndicatorError> {
        if index >= total {
            #[cfg(feature = "defmt")]
            defmt::debug!("page index {} out of bounds (total={})", index, total);
            return Err(IndicatorError::OutOfBounds);
        }
        Ok(())
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
