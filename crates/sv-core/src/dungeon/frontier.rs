//! Frontier queue of unresolved doorways
//!
//! Each entry is a cell at the boundary of the grown graph together with
//! the entry-door direction a room placed there must expose. Entries are
//! drawn uniformly at random rather than FIFO/LIFO so growth branches
//! organically instead of marching in one direction. An entry is consumed
//! by the draw whether or not the placement attempt succeeds.

use serde::{Deserialize, Serialize};

use super::grid::{Direction, GridPos};
use crate::rng::GameRng;

/// A pending doorway awaiting a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontierEntry {
    /// Cell the new room would occupy
    pub pos: GridPos,
    /// Door the new room must expose to connect back
    pub entry: Direction,
}

/// Growable multiset of open doorway candidates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frontier {
    entries: Vec<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: FrontierEntry) {
        self.entries.push(entry);
    }

    /// Remove and return a uniformly random entry, or None if empty.
    ///
    /// Swap-remove keeps the pop O(1); the queue has no ordering to keep.
    pub fn pop_random(&mut self, rng: &mut GameRng) -> Option<FrontierEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = rng.rand_below(self.entries.len() as u32) as usize;
        Some(self.entries.swap_remove(idx))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
