//! Per-buffer bookmark registry — the host-facing surface.
//!
//! A [`MarkStore`] maps buffer ids to their [`MarkSet`]s. It is plain owned
//! state, meant to live on the host's editor struct next to its buffer
//! table — there is no global registry and no interior mutability. Each
//! buffer's set is independent; nothing is shared across buffers.
//!
//! Sets are created lazily: the first [`MarkStore::toggle`] in a buffer
//! allocates its set, while queries and reconciliation against a buffer
//! with no set are cheap no-ops. The host calls
//! [`MarkStore::remove_buffer`] when it closes a buffer.

use std::collections::HashMap;

use crate::marks::{MarkSet, Reconcile, Toggle};
use crate::nav::{self, Target};

/// Identifies a buffer. The host assigns these — typically the index the
/// buffer has in the host's own buffer table.
pub type BufferId = usize;

/// Bookmark sets for every buffer, keyed by [`BufferId`].
#[derive(Debug, Default)]
pub struct MarkStore {
    sets: HashMap<BufferId, MarkSet>,
}

impl MarkStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sets: HashMap::new(),
        }
    }

    /// Toggle a mark on `line` of `buffer`, creating the buffer's set on
    /// first use.
    pub fn toggle(&mut self, buffer: BufferId, line: usize) -> Toggle {
        self.sets.entry(buffer).or_default().toggle(line)
    }

    /// Renumber `buffer`'s marks after its line count changed. A buffer
    /// with no marks yet reconciles to an empty result.
    pub fn reconcile(
        &mut self,
        buffer: BufferId,
        current_line_count: usize,
        edit_origin: usize,
    ) -> Reconcile {
        match self.sets.get_mut(&buffer) {
            Some(set) => set.reconcile(current_line_count, edit_origin),
            None => Reconcile::default(),
        }
    }

    /// The first mark after `cursor` in `buffer`, wrapping to the first
    /// mark overall. `None` when the buffer has no marks.
    #[must_use]
    pub fn next(&self, buffer: BufferId, cursor: usize) -> Option<Target> {
        nav::next(self.sets.get(&buffer)?.lines(), cursor)
    }

    /// The first mark before `cursor` in `buffer`, wrapping to the last
    /// mark overall. `None` when the buffer has no marks.
    #[must_use]
    pub fn previous(&self, buffer: BufferId, cursor: usize) -> Option<Target> {
        nav::previous(self.sets.get(&buffer)?.lines(), cursor)
    }

    /// The buffer's mark set, if one has been created.
    #[must_use]
    pub fn get(&self, buffer: BufferId) -> Option<&MarkSet> {
        self.sets.get(&buffer)
    }

    /// True when `line` of `buffer` is bookmarked.
    #[must_use]
    pub fn contains(&self, buffer: BufferId, line: usize) -> bool {
        self.sets.get(&buffer).is_some_and(|set| set.contains(line))
    }

    /// Remove every mark in `buffer`, returning the lines that had one.
    pub fn clear(&mut self, buffer: BufferId) -> Vec<usize> {
        self.sets
            .get_mut(&buffer)
            .map_or_else(Vec::new, MarkSet::clear)
    }

    /// Forget `buffer` entirely. Call when the host closes the buffer.
    pub fn remove_buffer(&mut self, buffer: BufferId) {
        if self.sets.remove(&buffer).is_some() {
            log::trace!("dropped mark set for closed buffer {buffer}");
        }
    }

    /// True when no buffer has any marks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.values().all(MarkSet::is_empty)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
