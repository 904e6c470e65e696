// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays node storage with game lifecycle, insertion, and lookup.

use alloc::vec::Vec;

use kurbo::{Point, Size};
use understory_dirty::{CycleHandling, DirtyTracker};

use super::id::{INVALID, NodeId};
use super::traverse::{Children, Mainline, Preorder};
use crate::config::LayoutConfig;
use crate::dirty;
use crate::error::TreeError;
use crate::position::PositionRef;

/// Slot of the root node whenever a game is in progress.
pub(crate) const ROOT: u32 = 0;

/// Struct-of-arrays storage for one variation tree.
///
/// Nodes are addressed by [`NodeId`] handles. Each node occupies a slot in
/// parallel arrays; slot 0 is always the root. Nodes are only ever appended,
/// and [`new_game`](Self::new_game) clears every array and bumps the game
/// counter so that handles from the previous tree fail validation.
#[derive(Debug)]
pub struct TreeStore {
    pub(crate) config: LayoutConfig,

    // -- Identity --
    pub(crate) position: Vec<PositionRef>,

    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) last_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) child_count: Vec<u32>,
    pub(crate) depth: Vec<u32>,
    pub(crate) mainline: Vec<bool>,

    // -- Geometry (x is rewritten by layout) --
    pub(crate) x: Vec<f64>,
    pub(crate) y: Vec<f64>,

    // -- Game state --
    pub(crate) game: u32,
    pub(crate) active: u32,
    pub(crate) required: Size,
    pub(crate) depth_levels: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,
    pub(crate) pending_new_game: bool,
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeStore {
    /// Creates an empty store with the [standard](LayoutConfig::standard)
    /// spacing. No game is in progress until [`new_game`](Self::new_game).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::standard())
    }

    /// Creates an empty store with custom spacing.
    #[must_use]
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            position: Vec::new(),
            parent: Vec::new(),
            first_child: Vec::new(),
            last_child: Vec::new(),
            next_sibling: Vec::new(),
            child_count: Vec::new(),
            depth: Vec::new(),
            mainline: Vec::new(),
            x: Vec::new(),
            y: Vec::new(),
            game: 0,
            active: INVALID,
            required: Size::new(config.min_extent(), config.min_extent()),
            depth_levels: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_new_game: false,
        }
    }

    /// Returns the spacing this store lays out with.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    // -- Lifecycle API --

    /// Discards the current tree and starts a new one rooted at `root`.
    ///
    /// The root is placed at `(pad, pad)` and becomes the active node. The
    /// required size resets to `pad × 2` in both dimensions. Handles issued
    /// for the previous tree become stale.
    pub fn new_game(&mut self, root: PositionRef) -> NodeId {
        self.position.clear();
        self.parent.clear();
        self.first_child.clear();
        self.last_child.clear();
        self.next_sibling.clear();
        self.child_count.clear();
        self.depth.clear();
        self.mainline.clear();
        self.x.clear();
        self.y.clear();

        self.game = self.game.wrapping_add(1);
        self.dirty = DirtyTracker::with_cycle_handling(CycleHandling::Error);
        self.pending_new_game = true;

        let pad = self.config.pad;
        let idx = self.push_node(root, INVALID, 0, true, Point::new(pad, pad));
        debug_assert_eq!(idx, ROOT, "root must occupy slot 0");

        self.active = ROOT;
        self.dirty.mark(ROOT, dirty::ACTIVE);
        self.required = Size::new(self.config.min_extent(), self.config.min_extent());
        self.depth_levels = 1;

        self.handle(ROOT)
    }

    /// Returns whether a game is in progress.
    #[must_use]
    pub fn is_started(&self) -> bool {
        !self.position.is_empty()
    }

    /// Returns the number of nodes in the current tree (0 before the first
    /// game).
    #[must_use]
    pub fn len(&self) -> usize {
        self.position.len()
    }

    /// Returns whether the store holds no tree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    // -- Mutation API --

    /// Adds `child` under `parent` and makes it the active node.
    ///
    /// If `parent` already has a child for `child`, that node is reused.
    /// Otherwise a node is appended after the existing children at the
    /// provisional column `parent.x + space × existing_children`, one row
    /// below the parent. The next [`evaluate`](Self::evaluate) corrects the
    /// column.
    ///
    /// Re-adding the node that is already active changes nothing, so the next
    /// `evaluate` reports no changes.
    ///
    /// # Errors
    ///
    /// - [`TreeError::NotFound`] if `parent` has no node, including when no
    ///   game has been started.
    /// - [`TreeError::AlreadyPlaced`] if `child` already has a node under a
    ///   different parent.
    pub fn add_child(
        &mut self,
        parent: PositionRef,
        child: PositionRef,
    ) -> Result<NodeId, TreeError> {
        let p = self.find(parent).ok_or(TreeError::NotFound(parent))?;

        let c = match self.child_with_position(p, child) {
            Some(existing) => existing,
            None => {
                if self.find(child).is_some() {
                    return Err(TreeError::AlreadyPlaced(child));
                }
                self.insert_child(p, child)
            }
        };

        if c != self.active {
            self.active = c;
            self.dirty.mark(c, dirty::ACTIVE);
        }

        Ok(self.handle(c))
    }

    /// Makes the node for `position` the active node.
    ///
    /// Setting the already active position is a no-op. Topology does not
    /// change, so the next [`evaluate`](Self::evaluate) requests a repaint
    /// without a layout pass.
    ///
    /// # Errors
    ///
    /// - [`TreeError::NotStarted`] before the first game.
    /// - [`TreeError::NotFound`] if `position` has no node.
    pub fn set_active(&mut self, position: PositionRef) -> Result<NodeId, TreeError> {
        if self.active != INVALID && self.position[self.active as usize] == position {
            return Ok(self.handle(self.active));
        }
        let id = self.lookup(position)?;
        self.active = id.idx;
        self.dirty.mark(id.idx, dirty::ACTIVE);
        Ok(id)
    }

    // -- Query API --

    /// Finds the node for `position` by depth-first search from the root.
    ///
    /// # Errors
    ///
    /// - [`TreeError::NotStarted`] before the first game.
    /// - [`TreeError::NotFound`] if `position` has no node.
    pub fn lookup(&self, position: PositionRef) -> Result<NodeId, TreeError> {
        if !self.is_started() {
            return Err(TreeError::NotStarted);
        }
        self.find(position)
            .map(|idx| self.handle(idx))
            .ok_or(TreeError::NotFound(position))
    }

    /// Returns the root node, if a game is in progress.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.is_started().then(|| self.handle(ROOT))
    }

    /// Returns the active node, if a game is in progress.
    #[must_use]
    pub fn active(&self) -> Option<NodeId> {
        (self.active != INVALID).then(|| self.handle(self.active))
    }

    /// Returns the position a node represents.
    #[must_use]
    pub fn position(&self, id: NodeId) -> PositionRef {
        self.validate(id);
        self.position[id.idx as usize]
    }

    /// Returns the parent of a node, or `None` for the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        (p != INVALID).then(|| self.handle(p))
    }

    /// Returns an iterator over the direct children of a node, in insertion
    /// order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.first_child[id.idx as usize])
    }

    /// Returns the number of children of a node.
    #[must_use]
    pub fn child_count(&self, id: NodeId) -> u32 {
        self.validate(id);
        self.child_count[id.idx as usize]
    }

    /// Returns the last-inserted child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.validate(id);
        let c = self.last_child[id.idx as usize];
        (c != INVALID).then(|| self.handle(c))
    }

    /// Returns whether a node was the first child inserted under its parent.
    ///
    /// Always `false` for the root.
    #[must_use]
    pub fn is_first_child(&self, id: NodeId) -> bool {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        p != INVALID && self.first_child[p as usize] == id.idx
    }

    /// Returns whether a node lies on the mainline.
    #[must_use]
    pub fn is_mainline(&self, id: NodeId) -> bool {
        self.validate(id);
        self.mainline[id.idx as usize]
    }

    /// Returns the depth of a node (0 for the root).
    #[must_use]
    pub fn depth(&self, id: NodeId) -> u32 {
        self.validate(id);
        self.depth[id.idx as usize]
    }

    /// Returns the laid-out position of a node in surface logical units.
    ///
    /// Only final after [`evaluate`](Self::evaluate) has run following the
    /// last insertion.
    #[must_use]
    pub fn point(&self, id: NodeId) -> Point {
        self.validate(id);
        Point::new(self.x[id.idx as usize], self.y[id.idx as usize])
    }

    /// Returns the logical size needed to draw the whole tree.
    ///
    /// Only valid after [`evaluate`](Self::evaluate) has been called.
    #[must_use]
    pub fn required_size(&self) -> Size {
        self.required
    }

    /// Returns the number of depth rows found by the last layout pass.
    #[must_use]
    pub fn depth_levels(&self) -> u32 {
        self.depth_levels
    }

    /// Returns a depth-first iterator over the whole tree, parents before
    /// children and children in insertion order.
    #[must_use]
    pub fn preorder(&self) -> Preorder<'_> {
        if self.is_started() {
            Preorder::new(self, ROOT)
        } else {
            Preorder::new(self, INVALID)
        }
    }

    /// Returns an iterator along the mainline path, starting at the root.
    #[must_use]
    pub fn mainline(&self) -> Mainline<'_> {
        if self.is_started() {
            Mainline::new(self, ROOT)
        } else {
            Mainline::new(self, INVALID)
        }
    }

    // -- Internal helpers --

    /// Panics if the handle was issued for another game or is out of range.
    pub(crate) fn validate(&self, id: NodeId) {
        assert!(
            id.game == self.game && (id.idx as usize) < self.position.len(),
            "stale NodeId: {id:?} (current game: {}, nodes: {})",
            self.game,
            self.position.len()
        );
    }

    /// Wraps a live slot index in a handle for the current game.
    pub(crate) fn handle(&self, idx: u32) -> NodeId {
        NodeId {
            idx,
            game: self.game,
        }
    }

    /// Depth-first search from the root by position identity.
    pub(crate) fn find(&self, position: PositionRef) -> Option<u32> {
        self.preorder()
            .map(|id| id.idx)
            .find(|&idx| self.position[idx as usize] == position)
    }

    /// Returns the slot after `idx` in a preorder walk of the subtree at
    /// `top`, or [`INVALID`] when the walk is complete.
    pub(crate) fn preorder_successor(&self, idx: u32, top: u32) -> u32 {
        let first = self.first_child[idx as usize];
        if first != INVALID {
            return first;
        }
        let mut n = idx;
        while n != top {
            let next = self.next_sibling[n as usize];
            if next != INVALID {
                return next;
            }
            n = self.parent[n as usize];
        }
        INVALID
    }

    fn child_with_position(&self, parent: u32, position: PositionRef) -> Option<u32> {
        let mut c = self.first_child[parent as usize];
        while c != INVALID {
            if self.position[c as usize] == position {
                return Some(c);
            }
            c = self.next_sibling[c as usize];
        }
        None
    }

    fn insert_child(&mut self, p: u32, position: PositionRef) -> u32 {
        let pi = p as usize;
        let siblings = self.child_count[pi];
        let mainline = self.mainline[pi] && siblings == 0;
        let provisional = Point::new(
            self.x[pi] + self.config.space * f64::from(siblings),
            self.y[pi] + self.config.space,
        );
        let depth = self.depth[pi] + 1;
        let c = self.push_node(position, p, depth, mainline, provisional);

        if self.first_child[pi] == INVALID {
            self.first_child[pi] = c;
        } else {
            let last = self.last_child[pi];
            self.next_sibling[last as usize] = c;
        }
        self.last_child[pi] = c;
        self.child_count[pi] = siblings + 1;

        self.dirty.mark(c, dirty::TOPOLOGY);
        c
    }

    fn push_node(
        &mut self,
        position: PositionRef,
        parent: u32,
        depth: u32,
        mainline: bool,
        at: Point,
    ) -> u32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "node count is bounded by game length, far below u32::MAX"
        )]
        let idx = self.position.len() as u32;
        self.position.push(position);
        self.parent.push(parent);
        self.first_child.push(INVALID);
        self.last_child.push(INVALID);
        self.next_sibling.push(INVALID);
        self.child_count.push(0);
        self.depth.push(depth);
        self.mainline.push(mainline);
        self.x.push(at.x);
        self.y.push(at.y);
        if parent == INVALID {
            self.dirty.mark(idx, dirty::TOPOLOGY);
        }
        idx
    }
}
