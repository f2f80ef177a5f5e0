//! Immutable page-position state for a row of page indicator dots.
//!
//! A page indicator shows where the user is among `N` pages. This crate
//! models only that position: a [`PageIndicatorState`] records the page
//! count and the current page, and every navigation request produces a new
//! state (or an [`IndicatorError`]) instead of mutating the old one.
//! Drawing the dots is left to whatever presentation layer observes the
//! state.
//!
//! # Quick Start
//!
//! ```
//! use page_dots::{IndicatorError, PageIndicatorState};
//!
//! let state = PageIndicatorState::with_current(5, 2)?;
//! let next = state.step_forward()?;
//! assert_eq!(next.current(), 3);
//! assert_eq!(state.current(), 2);
//!
//! assert_eq!(next.move_to(5), Err(IndicatorError::OutOfBounds));
//! # Ok::<(), IndicatorError>(())
//! ```
//!
//! # Crate Features
//!
//! - **`shared`** *(default)*: [`SharedIndicator`], an async mutex holding
//!   the one state a presentation layer treats as current.
//! - **`defmt`**: structured logging and `Format` derives via [`defmt`].

#![cfg_attr(not(test), no_std)]

pub mod indicator;
#[cfg(feature = "shared")]
pub mod shared;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use indicator::{IndicatorError, Mark, MarkChanges, Marks, PageIndicatorState};
#[cfg(feature = "shared")]
pub use shared::SharedIndicator;
