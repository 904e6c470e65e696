// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change evaluation and the layout pass.
//!
//! Evaluation drains both dirty channels:
//!
//! 1. **TOPOLOGY** — if any node was inserted since the last evaluation, run
//!    a full [layout pass](TreeStore::layout). Trees are bounded by game
//!    length, so a full pass per insertion is cheap.
//! 2. **ACTIVE** — record whether the active node changed (repaint only).
//!
//! # Layout rules
//!
//! The pass walks each subtree of the root depth-first, children in insertion
//! order, keeping `right_node[d]`: the most recently placed node at depth `d`.
//! A node at depth `d` starts in its parent's column and is pushed right so it
//! clears `right_node[d]` and `right_node[d + 1]` by one `space`. Looking one
//! row deeper keeps a new branch from crowding a wider branch laid out just
//! before it. Once a node's subtree is placed, a first child pulls its parent
//! into its own column, which keeps the mainline (and every first-child
//! chain) vertical.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Size;

use super::id::INVALID;
use super::store::{ROOT, TreeStore};
use crate::dirty;

/// The set of changes produced by a single [`TreeStore::evaluate`] call.
#[derive(Clone, Debug, Default)]
pub struct TreeChanges {
    /// Raw slot indices of nodes inserted since the last evaluation.
    pub added: Vec<u32>,
    /// Whether the tree topology changed (a layout pass ran).
    pub topology_changed: bool,
    /// Whether the active node changed.
    pub active_changed: bool,
    /// Whether a new game replaced the tree since the last evaluation.
    pub new_game: bool,
}

impl TreeChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.added.clear();
        self.topology_changed = false;
        self.active_changed = false;
        self.new_game = false;
    }

    /// Returns `true` if nothing needs to be presented.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.topology_changed && !self.active_changed && !self.new_game
    }
}

impl TreeStore {
    /// Evaluates pending mutations, re-running layout if the tree grew, and
    /// returns the set of changes.
    pub fn evaluate(&mut self) -> TreeChanges {
        let mut changes = TreeChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided buffer
    /// to avoid allocation.
    pub fn evaluate_into(&mut self, changes: &mut TreeChanges) {
        changes.clear();

        changes.added = self
            .dirty
            .drain(dirty::TOPOLOGY)
            .affected()
            .deterministic()
            .run()
            .collect();
        let active: Vec<u32> = self
            .dirty
            .drain(dirty::ACTIVE)
            .affected()
            .deterministic()
            .run()
            .collect();

        changes.new_game = core::mem::take(&mut self.pending_new_game);
        changes.active_changed = !active.is_empty();
        if !changes.added.is_empty() {
            self.layout();
            changes.topology_changed = true;
        }
    }

    /// Recomputes the column of every non-root node and the required size.
    ///
    /// Does nothing before the first game. A tree holding only its root keeps
    /// a required size of `pad × 2` in both dimensions.
    pub fn layout(&mut self) {
        if !self.is_started() {
            return;
        }
        let pad = self.config.pad;
        let space = self.config.space;

        let mut right_node = vec![ROOT];
        let mut required_width = pad + self.x[ROOT as usize];

        let mut child = self.first_child[ROOT as usize];
        while child != INVALID {
            self.layout_node(child, 1, &mut right_node, &mut required_width);
            child = self.next_sibling[child as usize];
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "depth is bounded by game length, far below u32::MAX"
        )]
        let levels = right_node.len() as u32;
        self.depth_levels = levels;
        self.required = Size::new(
            required_width,
            pad * 2.0 + f64::from(levels - 1) * space,
        );
    }

    fn layout_node(
        &mut self,
        idx: u32,
        depth: usize,
        right_node: &mut Vec<u32>,
        required_width: &mut f64,
    ) {
        let space = self.config.space;
        let i = idx as usize;
        let p = self.parent[i] as usize;

        let mut x = self.x[p];
        for &right in right_node.iter().skip(depth).take(2) {
            x = x.max(self.x[right as usize] + space);
        }
        self.x[i] = x;

        // The parent sits at `depth - 1`, so `depth <= right_node.len()`.
        if depth < right_node.len() {
            right_node[depth] = idx;
        } else {
            right_node.push(idx);
        }

        let mut child = self.first_child[i];
        while child != INVALID {
            self.layout_node(child, depth + 1, right_node, required_width);
            child = self.next_sibling[child as usize];
        }

        if self.first_child[p] == idx {
            self.x[p] = self.x[p].max(self.x[i]);
        }
        *required_width = required_width.max(self.config.pad + self.x[i]);
    }
}
