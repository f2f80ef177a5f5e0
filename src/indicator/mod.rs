//! Page position state with bounds-checked transitions.
//!
//! # Model
//!
//! A [`PageIndicatorState`] is "`total` pages, currently at page
//! `current`", with `current` zero-based. The invariant
//! `current < total` holds for every non-empty state. A state with
//! `total == 0` is the explicit empty indicator and its `current` is
//! always `0`.
//!
//! ```text
//! total = 5, current = 2
//!
//!   index:   0    1    2    3    4
//!   mark:    o    o    ●    o    o
//!                      ^ Mark::Current
//! ```
//!
//! # Transitions
//!
//! [`step_forward()`](PageIndicatorState::step_forward),
//! [`step_backward()`](PageIndicatorState::step_backward) and
//! [`move_to()`](PageIndicatorState::move_to) each return a brand-new
//! state. The receiver is `Copy` and never changes, so a caller can keep
//! the previous state around for animation or undo. Moving past either
//! edge fails with [`IndicatorError::OutOfBounds`]; there is no clamping
//! and no wraparound.
//!
//! # Reconciling
//!
//! [`MarkChanges::detect()`] compares two states and reports which marks
//! need repainting, so a renderer can update the affected dots instead of
//! rebuilding the whole row.

mod error;
mod mark;
mod state;

pub use error::IndicatorError;
pub use mark::{Mark, MarkChanges, Marks, MAX_MARK_CHANGES};
pub use state::PageIndicatorState;
