// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the world: entity handles and flags.

/// Identifier for an entity in a [`World`](crate::World).
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On staging, a fresh slot is allocated with generation `1`.
/// - When the entity is retired, the slot is freed and every existing `EntityId` for it
///   becomes stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct id.
///
/// Stale ids never alias a different live entity because the generation must match; use
/// [`World::is_alive`](crate::World::is_alive) to check liveness.
///
/// Ids order by slot, then generation. The world advances root entities in this order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub(crate) u32, pub(crate) u32);

impl EntityId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Slot index of the handle.
    pub const fn slot(self) -> u32 {
        self.0
    }

    /// Generation of the handle.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Per-entity lifecycle and change flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EntityFlags: u8 {
        /// The position (or box) changed since the flag was last cleared.
        const POSITION_CHANGED = 0b0000_0001;
        /// Staged for entry; installed at the start of the next tick.
        const STAGED           = 0b0000_0010;
        /// Installed and taking part in ticks.
        const ACTIVE           = 0b0000_0100;
    }
}

bitflags::bitflags! {
    /// Collision category bitmask.
    ///
    /// Games assign their own meaning to each bit; [`CollisionCategories::bit`] builds a
    /// single-category mask.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionCategories: u64 {
        /// Every category.
        const ALL = u64::MAX;
    }
}

impl CollisionCategories {
    /// No category.
    pub const NONE: Self = Self::empty();

    /// Mask holding only category `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 64 or more.
    pub const fn bit(index: u32) -> Self {
        assert!(index < 64, "collision category index out of range");
        Self::from_bits_retain(1 << index)
    }
}

impl Default for CollisionCategories {
    fn default() -> Self {
        Self::ALL
    }
}
