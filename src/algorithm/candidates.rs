//! Priority-ordered index of the cells where the next tile may go
//!
//! After each placement only the handful of cells around the new tile change,
//! so deletions are deferred: a deleted cell keeps its slot in the key order as
//! a tombstone until a sort pushes it to the tail and the index decides the
//! tail is long enough to drop.

use crate::algorithm::placement::Placement;
use crate::geometry::Vector;
use crate::io::configuration::COMPACTION_RATIO;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Sparse candidate map with an explicit key order and lazy deletion
#[derive(Debug, Clone, Default)]
pub struct CandidateTiles {
    /// Every allocated key; `None` marks a tombstone
    entries: HashMap<Vector, Option<Placement>>,
    order: Vec<Vector>,
    tombstones: usize,
}

impl CandidateTiles {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live candidates
    pub fn len(&self) -> usize {
        self.order.len() - self.tombstones
    }

    /// Whether no live candidate remains
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of keys in the order, tombstones included
    pub fn allocated(&self) -> usize {
        self.order.len()
    }

    /// Number of deleted keys awaiting compaction
    pub const fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Live candidate at `position`
    pub fn get(&self, position: Vector) -> Option<&Placement> {
        self.entries.get(&position).and_then(Option::as_ref)
    }

    /// Whether a live candidate sits at `position`
    pub fn contains(&self, position: Vector) -> bool {
        self.get(position).is_some()
    }

    /// Insert or overwrite a candidate
    ///
    /// A candidate sharing no edge with the boundary is deleted instead.
    pub fn update(&mut self, candidate: Placement) {
        if candidate.is_forbidden() {
            self.delete(candidate.position);
            return;
        }

        match self.entries.get_mut(&candidate.position) {
            Some(slot) => {
                if slot.is_none() {
                    self.tombstones -= 1;
                }
                *slot = Some(candidate);
            }
            None => {
                self.order.push(candidate.position);
                self.entries.insert(candidate.position, Some(candidate));
            }
        }
    }

    /// Tombstone the candidate at `position`, if any
    pub fn delete(&mut self, position: Vector) {
        if let Some(slot) = self.entries.get_mut(&position)
            && slot.take().is_some()
        {
            self.tombstones += 1;
        }
    }

    /// Live candidates in key order
    pub fn iter(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.order
            .iter()
            .filter_map(|position| self.get(*position))
    }

    /// Stable sort of the key order by `key` of each live candidate
    ///
    /// Tombstones sort last in either direction. Afterwards the tombstoned
    /// tail is dropped once the order outgrows the live set by more than
    /// [`COMPACTION_RATIO`].
    pub fn sort_by_key<F>(&mut self, key: F, reverse: bool)
    where
        F: Fn(&Placement) -> i64,
    {
        let sentinel = if reverse { i64::MIN } else { i64::MAX };
        let entries = &self.entries;
        let rank = |position: &Vector| {
            entries
                .get(position)
                .and_then(Option::as_ref)
                .map_or(sentinel, &key)
        };

        if reverse {
            self.order.sort_by_key(|position| Reverse(rank(position)));
        } else {
            self.order.sort_by_key(rank);
        }

        let live = self.len();
        if live > 0 && self.allocated() as f64 / live as f64 > COMPACTION_RATIO {
            self.truncate_tombstones();
        }
    }

    /// Order by segment length descending, then by distance to the center
    pub fn sort_by_priority(&mut self) {
        self.sort_by_key(Placement::l1_distance, false);
        self.sort_by_key(|candidate| candidate.segment_length() as i64, true);
    }

    /// Drop every tombstone now, keeping the live order
    pub fn force_resize(&mut self) {
        let entries = &self.entries;
        self.order
            .sort_by_key(|position| !matches!(entries.get(position), Some(Some(_))));
        self.truncate_tombstones();
    }

    /// Drop the tail of the key order, which must hold exactly the tombstones
    fn truncate_tombstones(&mut self) {
        let live = self.len();
        for position in self.order.drain(live..) {
            self.entries.remove(&position);
        }
        self.tombstones = 0;
        debug_assert!(self.order.iter().all(|position| self.contains(*position)));
    }

    /// Log the key order, tombstones included
    pub fn log_contents(&self) {
        log::debug!(
            "Candidates: (used/total: {}/{})",
            self.len(),
            self.allocated()
        );
        for position in &self.order {
            match self.get(*position) {
                Some(candidate) => log::debug!(
                    "nb_contact_sides={}, pos={position}",
                    candidate.segment_length()
                ),
                None => log::debug!("to_be_deleted, pos={position}"),
            }
        }
    }
}
