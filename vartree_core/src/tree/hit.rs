// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point hit testing against laid-out nodes.

use kurbo::Point;

use super::id::NodeId;
use super::store::TreeStore;

impl TreeStore {
    /// Returns the node under `point`, in surface logical units.
    ///
    /// A node is hit when `point` lies strictly within
    /// [`hit_radius`](crate::config::LayoutConfig::hit_radius) of its center.
    /// Nodes are tested depth-first from the root and the first match wins,
    /// so if hit discs ever overlap the shallower or earlier node is
    /// returned. Returns `None` before the first game.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<NodeId> {
        let radius = self.config.hit_radius();
        self.preorder().find(|&id| {
            let idx = id.idx as usize;
            Point::new(self.x[idx], self.y[idx]).distance(point) < radius
        })
    }
}
