// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types, incremental layout, and hit testing for game variation trees.
//!
//! `vartree_core` maintains the geometry of a branching move tree (a
//! *variation tree*) as it grows one move at a time. The *mainline* (the chain
//! of first-played moves) is laid out as a straight vertical line and
//! alternative lines fan out diagonally to the right. It is `no_std`
//! compatible (with `alloc`) and stores nodes in struct-of-arrays form with
//! index handles.
//!
//! # Architecture
//!
//! ```text
//!   Host mutation (new_game / add_child / set_active)
//!       │
//!       ▼
//!   TreeStore ──► TreeStore::evaluate() ──► TreeChanges ──► Presenter::present()
//!                     │ (layout pass on                        │
//!                     │  topology change)                      ▼
//!                     ▼                                   surface resize + repaint
//!               required_size()
//!
//!   Pointer event ──► TreeStore::hit_test() ──► hover / click listeners
//! ```
//!
//! **[`tree`]** — Struct-of-arrays node storage with per-game generational
//! handles, the layout pass, and hit testing.
//!
//! **[`widget`]** — [`VariationTree`](widget::VariationTree), the host-facing
//! instance that wires mutations, presentation, hover, and click listeners.
//!
//! **[`dirty`]** — Change channels via `understory_dirty`. Node insertion marks
//! TOPOLOGY; active-node changes mark ACTIVE.
//!
//! **[`backend`]** — The [`Presenter`](backend::Presenter) trait that drawing
//! backends implement.
//!
//! **[`config`]** — Spacing constants for layout and hit testing.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types, with
//! the zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod dirty;
pub mod error;
pub mod position;
pub mod trace;
pub mod tree;
pub mod widget;
