// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Tree mutations mark channels on an [`understory_dirty`] tracker keyed by
//! node slot index. Neither channel propagates: each mark names exactly the
//! node that changed.
//!
//! - [`TOPOLOGY`] is marked with the slot of every newly inserted node. A
//!   non-empty drain triggers a layout pass.
//! - [`ACTIVE`] is marked with the slot of the node that just became active.
//!   It requests a repaint but no layout.
//!
//! # Consumption
//!
//! Callers never query dirty state directly. Each
//! [`TreeStore::evaluate`](crate::tree::TreeStore::evaluate) call drains both
//! channels and surfaces the result as
//! [`TreeChanges`](crate::tree::TreeChanges), which presenters
//! [consume](crate::backend::Presenter::present).

use understory_dirty::Channel;

/// A node was inserted — requires a layout pass.
pub const TOPOLOGY: Channel = Channel::new(0);

/// The active node changed — requires a repaint only.
pub const ACTIVE: Channel = Channel::new(1);
