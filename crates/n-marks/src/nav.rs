//! Bookmark navigation — next/previous with wraparound.
//!
//! Stateless queries over a sorted slice of bookmarked lines, usually the
//! slice returned by [`MarkSet::lines`](crate::marks::MarkSet::lines). Both
//! directions use strict inequality: a mark exactly at the cursor line is
//! skipped, so repeated invocation always makes progress instead of
//! re-selecting the line the cursor is already on.
//!
//! Queries wrap: past the last mark, `next` continues at the first; before
//! the first mark, `previous` continues at the last. The returned
//! [`Target::wrapped`] flag tells the host to surface its "hit BOTTOM,
//! continuing at TOP" (or the reverse) message.

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Navigation direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

/// A navigation result: the line to move the cursor to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    /// The bookmarked line to jump to (1-indexed).
    pub line: usize,
    /// True when the query ran off the end of the set and continued from
    /// the other side. The wrap's direction is the query's direction.
    pub wrapped: bool,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// The first bookmarked line strictly after `cursor`.
///
/// `lines` must be sorted ascending. Wraps to the first mark when the
/// cursor is at or past the last one; `None` only when `lines` is empty.
#[must_use]
pub fn next(lines: &[usize], cursor: usize) -> Option<Target> {
    let &first = lines.first()?;
    let idx = lines.partition_point(|&line| line <= cursor);
    match lines.get(idx) {
        Some(&line) => Some(Target {
            line,
            wrapped: false,
        }),
        None => Some(Target {
            line: first,
            wrapped: true,
        }),
    }
}

/// The first bookmarked line strictly before `cursor`.
///
/// `lines` must be sorted ascending. Wraps to the last mark when the
/// cursor is at or before the first one; `None` only when `lines` is empty.
#[must_use]
pub fn previous(lines: &[usize], cursor: usize) -> Option<Target> {
    let &last = lines.last()?;
    let idx = lines.partition_point(|&line| line < cursor);
    if idx > 0 {
        Some(Target {
            line: lines[idx - 1],
            wrapped: false,
        })
    } else {
        Some(Target {
            line: last,
            wrapped: true,
        })
    }
}

/// The nearest bookmarked line in the given direction. Convenience
/// dispatcher over [`next`] and [`previous`].
#[must_use]
pub fn find(lines: &[usize], cursor: usize, direction: Direction) -> Option<Target> {
    match direction {
        Direction::Forward => next(lines, cursor),
        Direction::Backward => previous(lines, cursor),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
