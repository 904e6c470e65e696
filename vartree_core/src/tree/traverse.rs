// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use super::id::{INVALID, NodeId};
use super::store::TreeStore;

/// An iterator over the direct children of a node, in insertion order.
///
/// Created by [`TreeStore::children`].
#[derive(Debug)]
pub struct Children<'a> {
    store: &'a TreeStore,
    current: u32,
}

impl<'a> Children<'a> {
    pub(crate) fn new(store: &'a TreeStore, first: u32) -> Self {
        Self {
            store,
            current: first,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.store.next_sibling[idx as usize];
        Some(self.store.handle(idx))
    }
}

/// A depth-first, children-in-order iterator over a subtree.
///
/// Parents are yielded before their children. Created by
/// [`TreeStore::preorder`].
#[derive(Debug)]
pub struct Preorder<'a> {
    store: &'a TreeStore,
    top: u32,
    current: u32,
}

impl<'a> Preorder<'a> {
    pub(crate) fn new(store: &'a TreeStore, top: u32) -> Self {
        Self {
            store,
            top,
            current: top,
        }
    }
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.store.preorder_successor(idx, self.top);
        Some(self.store.handle(idx))
    }
}

/// An iterator along the mainline, starting at the root.
///
/// Created by [`TreeStore::mainline`].
#[derive(Debug)]
pub struct Mainline<'a> {
    store: &'a TreeStore,
    current: u32,
}

impl<'a> Mainline<'a> {
    pub(crate) fn new(store: &'a TreeStore, root: u32) -> Self {
        Self {
            store,
            current: root,
        }
    }
}

impl Iterator for Mainline<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        let first = self.store.first_child[idx as usize];
        self.current = if first != INVALID && self.store.mainline[first as usize] {
            first
        } else {
            INVALID
        };
        Some(self.store.handle(idx))
    }
}
