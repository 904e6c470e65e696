// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by tree mutations and queries.

use core::fmt;

use crate::position::PositionRef;

/// Errors from [`TreeStore`](crate::tree::TreeStore) operations.
///
/// All variants are host contract violations: positions must be introduced
/// through `new_game` or `add_child` before they are referenced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// A query or mutation was issued before the first `new_game`.
    NotStarted,
    /// The referenced position has no node in the current tree.
    NotFound(PositionRef),
    /// The child position is already placed under a different parent.
    AlreadyPlaced(PositionRef),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "no game has been started"),
            Self::NotFound(position) => write!(f, "position {position} is not in the tree"),
            Self::AlreadyPlaced(position) => {
                write!(f, "position {position} is already placed under another parent")
            }
        }
    }
}

impl core::error::Error for TreeError {}
