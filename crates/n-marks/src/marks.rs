//! Bookmark set — one buffer's line anchors.
//!
//! A [`MarkSet`] stores the bookmarked lines of a single buffer as a sorted,
//! duplicate-free list of **1-indexed** line numbers, and renumbers them when
//! the host reports that the buffer's line count changed. Line numbers here
//! match what the host shows the user and what sign placement expects —
//! hosts whose internal coordinates are 0-indexed convert at this boundary.
//!
//! # Reconciliation
//!
//! The set never sees the edit itself, only its aftermath: the new total
//! line count and the line the edit originated on. From the count delta it
//! renumbers every mark at or after the origin:
//!
//! - lines inserted above a mark push it down by `delta`
//! - lines deleted above a mark pull it up by `delta`
//! - a single-line deletion exactly at a mark removes the mark — its anchor
//!   line no longer exists
//!
//! The single-line case is the only one where exact deletion is detectable.
//! When several lines vanish at once, the delta alone cannot say *which*
//! lines they were, so every mark at or after the origin is assumed to have
//! shifted uniformly. A mark sitting inside a multi-line deletion therefore
//! survives, pointing at whatever line slid into its slot. This is a known
//! approximation, not a guarantee — see the crate docs.

use std::mem;

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

/// Outcome of [`MarkSet::toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "the host should place or remove the line's glyph accordingly"]
pub enum Toggle {
    /// The line was not bookmarked; a mark was added.
    Added,
    /// The line was bookmarked; the mark was removed.
    Removed,
}

// ---------------------------------------------------------------------------
// Reconcile
// ---------------------------------------------------------------------------

/// Outcome of [`MarkSet::reconcile`]: which marks moved and which were lost.
///
/// `moved` pairs are `(old_line, new_line)` so the host can re-anchor each
/// glyph; `dropped` lists old line numbers whose marks no longer exist.
/// Both are empty when the line count did not change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconcile {
    /// Marks that were renumbered, as `(old_line, new_line)`.
    pub moved: Vec<(usize, usize)>,
    /// Old line numbers of marks that were removed.
    pub dropped: Vec<usize>,
}

impl Reconcile {
    /// True when nothing moved and nothing was dropped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moved.is_empty() && self.dropped.is_empty()
    }
}

// ---------------------------------------------------------------------------
// MarkSet
// ---------------------------------------------------------------------------

/// The bookmarked lines of one buffer.
///
/// Lines are 1-indexed, stored sorted ascending with no duplicates — a line
/// has at most one mark. The set also remembers the buffer's line count as
/// of the last reconciliation, which is how the next reconciliation computes
/// its delta.
///
/// The set holds no visual state. Placing and removing glyphs is the host's
/// job, driven by the [`Toggle`] and [`Reconcile`] values these methods
/// return.
#[derive(Debug, Default)]
pub struct MarkSet {
    /// Bookmarked lines, sorted ascending, duplicate-free.
    positions: Vec<usize>,
    /// Buffer line count at the last reconciliation. `None` until the first
    /// `reconcile` call seeds it.
    last_line_count: Option<usize>,
}

impl MarkSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            last_line_count: None,
        }
    }

    /// Add a mark at `line`, or remove it if the line is already marked.
    pub fn toggle(&mut self, line: usize) -> Toggle {
        match self.positions.binary_search(&line) {
            Ok(idx) => {
                self.positions.remove(idx);
                Toggle::Removed
            }
            Err(idx) => {
                self.positions.insert(idx, line);
                Toggle::Added
            }
        }
    }

    /// Renumber marks after the buffer's line count changed.
    ///
    /// `current_line_count` is the buffer's total line count now;
    /// `edit_origin` is the 1-indexed line the edit started on (in practice:
    /// the cursor line when the change was noticed). Call this after every
    /// buffer-modifying event — a call where nothing changed is a free no-op.
    ///
    /// The first call only seeds the remembered line count and returns an
    /// empty result; there is no previous count to diff against.
    pub fn reconcile(&mut self, current_line_count: usize, edit_origin: usize) -> Reconcile {
        let Some(last) = self.last_line_count.replace(current_line_count) else {
            return Reconcile::default();
        };
        if current_line_count == last {
            return Reconcile::default();
        }
        let grew = current_line_count > last;
        let delta = current_line_count.abs_diff(last);

        let mut result = Reconcile::default();
        // (old, new) for every surviving mark, unshifted ones included.
        let mut kept: Vec<(usize, usize)> = Vec::with_capacity(self.positions.len());

        for &p in &self.positions {
            // A single-line deletion exactly at the mark: the anchor line is
            // gone. The only case where exact deletion is unambiguous.
            if !grew && delta == 1 && p == edit_origin {
                result.dropped.push(p);
                continue;
            }
            if p < edit_origin {
                kept.push((p, p));
                continue;
            }
            let shifted = if grew {
                Some(p + delta)
            } else {
                // Pulled above line 1 (checked_sub) or onto "line 0" — the
                // anchor was deleted out from under the mark.
                p.checked_sub(delta).filter(|&n| n >= 1)
            };
            match shifted.filter(|&n| n <= current_line_count) {
                Some(n) => kept.push((p, n)),
                None => result.dropped.push(p),
            }
        }

        // Shifting preserves relative order within the shifted and unshifted
        // groups, but a shrink can slide shifted marks onto unshifted ones.
        // Re-sort and merge collisions so the sorted/unique invariant holds.
        // Ties break toward the smaller old line: the mark that already
        // lived on the line wins over the one that slid onto it.
        kept.sort_unstable_by_key(|&(old, new)| (new, old));
        self.positions.clear();
        for (old, new) in kept {
            if self.positions.last() == Some(&new) {
                result.dropped.push(old);
                continue;
            }
            self.positions.push(new);
            if old != new {
                result.moved.push((old, new));
            }
        }
        result.dropped.sort_unstable();

        if !result.dropped.is_empty() {
            log::debug!(
                "reconcile (origin {edit_origin}, {last} -> {current_line_count} lines) dropped marks at {:?}",
                result.dropped
            );
        }
        result
    }

    /// True when the set has no marks.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of marks in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when `line` is bookmarked.
    #[must_use]
    pub fn contains(&self, line: usize) -> bool {
        self.positions.binary_search(&line).is_ok()
    }

    /// The bookmarked lines, sorted ascending. This is the slice the
    /// navigation queries in [`crate::nav`] operate on.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[usize] {
        &self.positions
    }

    /// Remove every mark, returning the lines that had one so the host can
    /// clear their glyphs.
    pub fn clear(&mut self) -> Vec<usize> {
        mem::take(&mut self.positions)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
