//! Per-page marks and the diff between two states.
//!
//! The presentation layer draws one mark ("dot") per page. This module
//! tells it *what* each mark is and *which* marks changed, never *how* to
//! draw them.

use core::iter::FusedIterator;

use heapless::Vec;

use super::state::PageIndicatorState;

/// Maximum number of marks a same-size transition can touch: the mark that
/// loses the highlight and the one that gains it.
pub const MAX_MARK_CHANGES: usize = 2;

// ── Mark ─────────────────────────────────────────────────────────────────

/// Selection state of a single page mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mark {
    /// The mark of the active page.
    Current,
    /// Any other page.
    Inactive,
}

impl Mark {
    pub(crate) const fn for_index(index: usize, current: usize) -> Self {
        if index == current {
            Mark::Current
        } else {
            Mark::Inactive
        }
    }

    /// Returns `true` for [`Mark::Current`].
    pub const fn is_current(&self) -> bool {
        matches!(self, Mark::Current)
    }
}

// ── Marks ────────────────────────────────────────────────────────────────

/// Iterator over the [`Mark`] of every page, in page order.
///
/// Created by [`PageIndicatorState::marks()`].
#[derive(Debug, Clone)]
pub struct Marks {
    state: PageIndicatorState,
    next: usize,
}

impl Marks {
    pub(crate) const fn new(state: PageIndicatorState) -> Self {
        Self { state, next: 0 }
    }
}

impl Iterator for Marks {
    type Item = Mark;

    fn next(&mut self) -> Option<Mark> {
        let mark = self.state.mark(self.next)?;
        self.next += 1;
        Some(mark)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.state.total().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Marks {}

impl FusedIterator for Marks {}

// ── MarkChanges ──────────────────────────────────────────────────────────

/// Identifies which marks differ between two [`PageIndicatorState`]
/// snapshots.
///
/// When both states have the same `total`, at most
/// [`MAX_MARK_CHANGES`] marks change. When `total` differs the number of
/// marks itself changed and the whole row needs redrawing.
///
/// # Examples
///
/// ```
/// use page_dots::{MarkChanges, PageIndicatorState};
///
/// let old = PageIndicatorState::with_current(5, 2).unwrap();
/// let new = old.step_forward().unwrap();
///
/// let changes = MarkChanges::detect(&old, &new);
/// assert_eq!(changes.changed_marks(), &[2, 3]);
/// assert!(!changes.full_redraw());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MarkChanges {
    total_changed: bool,
    changed: Vec<usize, MAX_MARK_CHANGES>,
}

impl MarkChanges {
    /// Diff two states mark-by-mark.
    pub fn detect(old: &PageIndicatorState, new: &PageIndicatorState) -> Self {
        let mut changed = Vec::new();

        let total_changed = old.total() != new.total();
        if !total_changed && !new.is_empty() && old.current() != new.current() {
            // Capacity is exactly two.
            let _ = changed.push(old.current());
            let _ = changed.push(new.current());
        }

        Self {
            total_changed,
            changed,
        }
    }

    /// `true` if the page count differs and every mark must be redrawn.
    pub fn full_redraw(&self) -> bool {
        self.total_changed
    }

    /// Indices of marks whose [`Mark`] differs, old highlight first.
    ///
    /// Empty when [`full_redraw()`](Self::full_redraw) is `true`.
    pub fn changed_marks(&self) -> &[usize] {
        &self.changed
    }

    /// Returns `true` if mark `index` must be repainted.
    pub fn is_changed(&self, index: usize) -> bool {
        self.total_changed || self.changed.contains(&index)
    }

    /// Returns `true` if anything changed.
    pub fn any_changed(&self) -> bool {
        self.total_changed || !self.changed.is_empty()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn state(total: usize, current: usize) -> PageIndicatorState {
        PageIndicatorState::with_current(total, current).unwrap()
    }

    #[test]
    fn marks_highlight_only_current() {
        let marks: std::vec::Vec<Mark> = state(4, 2).marks().collect();
        assert_eq!(
            marks,
            [Mark::Inactive, Mark::Inactive, Mark::Current, Mark::Inactive]
        );
    }

    #[test]
    fn marks_size_hint_is_exact() {
        let mut marks = state(3, 0).marks();
        assert_eq!(marks.len(), 3);
        marks.next();
        assert_eq!(marks.len(), 2);
        marks.by_ref().for_each(drop);
        assert_eq!(marks.len(), 0);
        assert_eq!(marks.next(), None);
    }

    #[test]
    fn detect_step_reports_old_and_new() {
        let old = state(5, 3);
        let new = old.step_backward().unwrap();
        let changes = MarkChanges::detect(&old, &new);
        assert_eq!(changes.changed_marks(), &[3, 2]);
        assert!(changes.is_changed(3));
        assert!(changes.is_changed(2));
        assert!(!changes.is_changed(0));
        assert!(changes.any_changed());
        assert!(!changes.full_redraw());
    }

    #[test]
    fn detect_no_changes() {
        let s = state(5, 1);
        let changes = MarkChanges::detect(&s, &s);
        assert!(!changes.any_changed());
        assert!(changes.changed_marks().is_empty());
    }

    #[test]
    fn detect_total_change_requires_full_redraw() {
        let changes = MarkChanges::detect(&state(3, 0), &state(4, 0));
        assert!(changes.full_redraw());
        assert!(changes.any_changed());
        assert!(changes.changed_marks().is_empty());
        assert!(changes.is_changed(3));
    }

    #[test]
    fn detect_between_empty_states() {
        let e = PageIndicatorState::empty();
        assert!(!MarkChanges::detect(&e, &e).any_changed());
    }
}
