// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Game position identification.
//!
//! [`PositionRef`] is a lightweight handle identifying one state in the
//! host's game history. Hosts assign these; core treats them as opaque.

use core::fmt;

/// Identifies a game position owned by the host.
///
/// Two references are the same position exactly when their handles are equal.
/// The value is never interpreted, so hosts are free to use a move counter, an
/// interned pointer, or a hash of their own position type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PositionRef(pub u64);

impl fmt::Debug for PositionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PositionRef({})", self.0)
    }
}

impl fmt::Display for PositionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
