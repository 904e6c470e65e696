// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node identity types.

use core::fmt;

/// Sentinel value indicating "no node" in index fields.
pub const INVALID: u32 = u32::MAX;

/// A handle to a node in a [`TreeStore`](super::TreeStore).
///
/// Contains both a slot index and the game counter of the tree it was issued
/// for, so handles that outlive a `new_game` are detected.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    /// Slot index into the store's arrays.
    pub(crate) idx: u32,
    /// Game counter — must match the store's current game.
    pub(crate) game: u32,
}

impl NodeId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the game counter this handle was issued for.
    #[inline]
    #[must_use]
    pub const fn game(self) -> u32 {
        self.game
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}@game{})", self.idx, self.game)
    }
}
