// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tick record of tested entity pairs.

use core::fmt::Debug;
use std::collections::{BTreeMap, BTreeSet};

/// Symmetric "already tested" table, reset once per tick.
///
/// Each entity records the partners it tested while it was being advanced. A pair counts
/// as tested if either side recorded the other, so a pair is narrow-phased at most once per
/// tick no matter which entity reaches it first.
#[derive(Clone)]
pub struct PairLedger<K> {
    tested: BTreeMap<K, BTreeSet<K>>,
}

impl<K: Copy + Ord + Debug> PairLedger<K> {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            tested: BTreeMap::new(),
        }
    }

    /// Forget every pair. Called at the start of a tick.
    pub fn clear(&mut self) {
        self.tested.clear();
    }

    /// Start recording for `entity`, seeding its set with itself so it never tests itself.
    pub fn seed(&mut self, entity: K) {
        self.tested.entry(entity).or_default().insert(entity);
    }

    /// Whether the pair was tested this tick, in either direction.
    pub fn contains(&self, a: K, b: K) -> bool {
        self.tested.get(&a).is_some_and(|s| s.contains(&b))
            || self.tested.get(&b).is_some_and(|s| s.contains(&a))
    }

    /// Record that `entity` tested `other`.
    pub fn mark(&mut self, entity: K, other: K) {
        self.tested.entry(entity).or_default().insert(other);
    }

    /// Number of distinct pairs recorded (self-seeds excluded).
    pub fn pair_count(&self) -> usize {
        self.tested
            .iter()
            .map(|(k, s)| s.iter().filter(|o| *o != k).count())
            .sum()
    }
}

impl<K: Copy + Ord + Debug> Default for PairLedger<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug> Debug for PairLedger<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PairLedger")
            .field("entities", &self.tested.len())
            .finish_non_exhaustive()
    }
}
