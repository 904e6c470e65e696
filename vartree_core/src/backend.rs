// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presenter contract for drawing backends.
//!
//! Drawing is split out of `vartree_core`. A backend provides:
//!
//! - **Surface acquisition** — creating or adopting a drawing surface (e.g.
//!   an HTML canvas). This is platform-specific and not abstracted here.
//!
//! - **Device pixel ratio** — a query the host feeds to the presenter so the
//!   backing buffer is sized for sharp output.
//!
//! - **Presenter** — implements the [`Presenter`] trait to resize the surface
//!   and repaint the tree after each evaluated change.
//!
//! # Crate boundaries
//!
//! `vartree_core` owns the data model, layout, hit testing, and this contract
//! module. `vartree_render` turns a laid-out tree into paint operations and
//! manages surface size; backend crates replay those operations on a native
//! surface. Application code wires them together through
//! [`VariationTree`](crate::widget::VariationTree).

use crate::trace::Tracer;
use crate::tree::{TreeChanges, TreeStore};

/// Presents an evaluated tree on a drawing surface.
///
/// Canvas-backed presenters and test doubles implement this trait.
///
/// # Update pseudocode
///
/// A host mutation is wired through the pieces like this:
///
/// ```rust,ignore
/// fn on_move_played(parent: PositionRef, child: PositionRef) {
///     // Mutate: insert the node and make it active
///     store.add_child(parent, child)?;
///
///     // Evaluate: drain dirty channels, re-run layout if the tree grew
///     let changes = store.evaluate();
///
///     // Present: grow the surface if needed and repaint
///     if !changes.is_empty() {
///         presenter.present(&store, &changes, &mut tracer);
///     }
/// }
/// ```
pub trait Presenter {
    /// Presents the given [`TreeChanges`], reading the current geometry and
    /// active node from `store`.
    ///
    /// Only called with non-empty changes.
    fn present(&mut self, store: &TreeStore, changes: &TreeChanges, tracer: &mut Tracer<'_>);
}
