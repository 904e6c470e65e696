// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Variation tree data model.
//!
//! A *node* pairs a host [`PositionRef`](crate::position::PositionRef) with
//! computed geometry. Each node has:
//!
//! - An identity ([`NodeId`]) — a handle tagged with the game it belongs to,
//!   so handles from a discarded game are detected instead of silently
//!   aliasing nodes of the new one.
//! - Topology — parent, first-child, and sibling links forming an ordered
//!   tree. Children keep insertion order forever.
//! - A **mainline** flag fixed at insertion: the root is mainline, and a child
//!   is mainline iff its parent is mainline and it was the first child ever
//!   added to that parent.
//! - **Geometry** — `y` is fixed at insertion (`parent.y + space`), `x` is
//!   recomputed by the [layout pass](TreeStore::layout) whenever the tree
//!   grows.
//!
//! Nodes are stored in struct-of-arrays layout with index-based handles.
//! Nodes are never removed; a new game discards the whole tree.

mod hit;
mod id;
mod layout;
mod store;
mod traverse;

pub use id::{INVALID, NodeId};
pub use layout::TreeChanges;
pub use store::TreeStore;
pub use traverse::{Children, Mainline, Preorder};
