// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds a paint plan from the current tree.
//!
//! Drawing order is fixed, to keep style switches to a minimum:
//!
//! 1. Edges, one stroked path for mainline edges and one for the rest.
//! 2. The root marker (muted, unless the root is active) and the active
//!    marker.
//! 3. Remaining markers in two filled passes split by depth parity.
//!
//! Passes with nothing to draw emit no operations at all.

use kurbo::{Circle, Point};
use vartree_core::tree::{NodeId, TreeStore};

use crate::config::PaintConfig;
use crate::plan::{PaintOp, PaintPlan};

/// Rebuilds `plan` as a full repaint of `store`.
///
/// Before the first game the plan only clears the surface.
pub fn build_plan(store: &TreeStore, config: &PaintConfig, plan: &mut PaintPlan) {
    plan.clear();
    plan.push(PaintOp::Clear);
    let (Some(root), Some(active)) = (store.root(), store.active()) else {
        return;
    };
    plan.push(PaintOp::SetLineWidth(config.line_width));

    edge_pass(store, plan, config.mainline_edge, true);
    edge_pass(store, plan, config.branch_edge, false);

    let circle = |id: NodeId| Circle::new(store.point(id), config.marker_radius);
    if root != active {
        marker_pass(
            plan,
            config.root_fill,
            config.root_stroke,
            [circle(root)].into_iter(),
        );
    }
    marker_pass(
        plan,
        config.active_fill,
        config.active_stroke,
        [circle(active)].into_iter(),
    );

    let ordinary = || {
        store
            .preorder()
            .filter(move |&id| id != root && id != active)
    };
    marker_pass(
        plan,
        config.black_fill,
        config.stone_stroke,
        ordinary()
            .filter(|&id| store.depth(id) % 2 == 1)
            .map(circle),
    );
    marker_pass(
        plan,
        config.white_fill,
        config.stone_stroke,
        ordinary()
            .filter(|&id| store.depth(id) % 2 == 0)
            .map(circle),
    );
}

/// Strokes every edge whose child has the given mainline flag.
///
/// A first child hangs vertically below its parent. A later sibling is
/// reached by a diagonal starting one column to its left on the parent's
/// row. On the branch pass, a parent with several children also gets a
/// horizontal connector out to the top of its last diagonal.
fn edge_pass(store: &TreeStore, plan: &mut PaintPlan, style: &'static str, mainline: bool) {
    let space = store.config().space;
    let start = plan.ops.len();
    let edges = plan.edges;
    plan.push(PaintOp::SetStrokeStyle(style));
    plan.push(PaintOp::BeginPath);

    for id in store.preorder() {
        if let Some(parent) = store.parent(id)
            && store.is_mainline(id) == mainline
        {
            let p = store.point(parent);
            let c = store.point(id);
            let from = if store.is_first_child(id) {
                p
            } else {
                Point::new(c.x - space, p.y)
            };
            plan.segment(from, c);
        }
        if !mainline
            && store.child_count(id) > 1
            && let Some(last) = store.last_child(id)
        {
            let p = store.point(id);
            let corner = Point::new(store.point(last).x - space, p.y);
            if corner.x > p.x {
                plan.segment(p, corner);
            }
        }
    }

    if plan.edges == edges {
        plan.ops.truncate(start);
    } else {
        plan.push(PaintOp::Stroke);
    }
}

fn marker_pass(
    plan: &mut PaintPlan,
    fill: &'static str,
    stroke: &'static str,
    circles: impl Iterator<Item = Circle>,
) {
    let mut circles = circles.peekable();
    if circles.peek().is_none() {
        return;
    }
    plan.push(PaintOp::SetFillStyle(fill));
    plan.push(PaintOp::SetStrokeStyle(stroke));
    plan.push(PaintOp::BeginPath);
    for circle in circles {
        plan.marker(circle);
    }
    plan.push(PaintOp::Fill);
    plan.push(PaintOp::Stroke);
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use vartree_core::position::PositionRef;

    use super::*;

    const CONFIG: PaintConfig = PaintConfig::standard();

    fn p(n: u64) -> PositionRef {
        PositionRef(n)
    }

    fn laid_out(edges: &[(u64, u64)]) -> TreeStore {
        let mut store = TreeStore::new();
        store.new_game(p(0));
        for &(parent, child) in edges {
            store.add_child(p(parent), p(child)).unwrap();
        }
        let _ = store.evaluate();
        store
    }

    fn plan_for(store: &TreeStore) -> PaintPlan {
        let mut plan = PaintPlan::new();
        build_plan(store, &CONFIG, &mut plan);
        plan
    }

    fn circles(plan: &PaintPlan) -> Vec<Point> {
        plan.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Circle(c) => Some(c.center),
                _ => None,
            })
            .collect()
    }

    fn marker(x: f64, y: f64) -> PaintOp {
        PaintOp::Circle(Circle::new((x, y), CONFIG.marker_radius))
    }

    #[test]
    fn empty_store_only_clears() {
        let plan = plan_for(&TreeStore::new());
        assert_eq!(plan.ops, vec![PaintOp::Clear]);
    }

    #[test]
    fn root_only_draws_active_marker() {
        let plan = plan_for(&laid_out(&[]));
        assert_eq!(
            plan.ops,
            vec![
                PaintOp::Clear,
                PaintOp::SetLineWidth(1.0),
                PaintOp::SetFillStyle(CONFIG.active_fill),
                PaintOp::SetStrokeStyle(CONFIG.active_stroke),
                PaintOp::BeginPath,
                marker(11.0, 11.0),
                PaintOp::Fill,
                PaintOp::Stroke,
            ]
        );
        assert_eq!(plan.edges, 0);
        assert_eq!(plan.markers, 1);
    }

    #[test]
    fn two_children_full_plan() {
        let plan = plan_for(&laid_out(&[(0, 1), (0, 2)]));
        assert_eq!(
            plan.ops,
            vec![
                PaintOp::Clear,
                PaintOp::SetLineWidth(1.0),
                // Mainline: vertical from the root.
                PaintOp::SetStrokeStyle(CONFIG.mainline_edge),
                PaintOp::BeginPath,
                PaintOp::MoveTo(Point::new(11.0, 11.0)),
                PaintOp::LineTo(Point::new(11.0, 30.0)),
                PaintOp::Stroke,
                // Branch: diagonal into the second column.
                PaintOp::SetStrokeStyle(CONFIG.branch_edge),
                PaintOp::BeginPath,
                PaintOp::MoveTo(Point::new(11.0, 11.0)),
                PaintOp::LineTo(Point::new(30.0, 30.0)),
                PaintOp::Stroke,
                // Root, muted.
                PaintOp::SetFillStyle(CONFIG.root_fill),
                PaintOp::SetStrokeStyle(CONFIG.root_stroke),
                PaintOp::BeginPath,
                marker(11.0, 11.0),
                PaintOp::Fill,
                PaintOp::Stroke,
                // Active.
                PaintOp::SetFillStyle(CONFIG.active_fill),
                PaintOp::SetStrokeStyle(CONFIG.active_stroke),
                PaintOp::BeginPath,
                marker(30.0, 30.0),
                PaintOp::Fill,
                PaintOp::Stroke,
                // Odd depth; the white pass is empty.
                PaintOp::SetFillStyle(CONFIG.black_fill),
                PaintOp::SetStrokeStyle(CONFIG.stone_stroke),
                PaintOp::BeginPath,
                marker(11.0, 30.0),
                PaintOp::Fill,
                PaintOp::Stroke,
            ]
        );
        assert_eq!(plan.edges, 2);
        assert_eq!(plan.markers, 3);
    }

    #[test]
    fn connector_joins_later_diagonals() {
        // Root with three children at x = 11, 30, 49.
        let plan = plan_for(&laid_out(&[(0, 1), (0, 2), (0, 3)]));
        let connector = [
            PaintOp::MoveTo(Point::new(11.0, 11.0)),
            PaintOp::LineTo(Point::new(30.0, 11.0)),
        ];
        assert!(
            plan.ops.windows(2).any(|w| w == connector),
            "horizontal connector to the last diagonal"
        );
        // Two diagonals plus the connector, plus one mainline edge.
        assert_eq!(plan.edges, 4);
    }

    #[test]
    fn two_children_need_no_connector() {
        let plan = plan_for(&laid_out(&[(0, 1), (0, 2)]));
        let horizontal = plan.ops.windows(2).any(|w| {
            matches!(w, [PaintOp::MoveTo(a), PaintOp::LineTo(b)] if a.y == b.y)
        });
        assert!(!horizontal, "zero-length connector is skipped");
    }

    #[test]
    fn branch_first_child_is_vertical() {
        // 0 → 1, 0 → 2 → 3: node 3 hangs straight below node 2.
        let store = laid_out(&[(0, 1), (0, 2), (2, 3)]);
        let two = store.point(store.lookup(p(2)).unwrap());
        let three = store.point(store.lookup(p(3)).unwrap());
        assert_eq!(two.x, three.x, "first child shares its parent's column");
        let plan = plan_for(&store);
        let vertical = [PaintOp::MoveTo(two), PaintOp::LineTo(three)];
        assert!(plan.ops.windows(2).any(|w| w == vertical), "vertical branch edge");
    }

    #[test]
    fn root_active_is_drawn_once() {
        let mut store = laid_out(&[(0, 1)]);
        store.set_active(p(0)).unwrap();
        let _ = store.evaluate();
        let plan = plan_for(&store);
        assert!(
            !plan.ops.contains(&PaintOp::SetFillStyle(CONFIG.root_fill)),
            "no muted root when the root is active"
        );
        let centers = circles(&plan);
        assert_eq!(centers, vec![Point::new(11.0, 11.0), Point::new(11.0, 30.0)]);
    }

    #[test]
    fn markers_split_by_depth_parity() {
        // Mainline 0-1-2-3 plus active branch 1 → 4.
        let store = laid_out(&[(0, 1), (1, 2), (2, 3), (1, 4)]);
        let plan = plan_for(&store);
        let fills: Vec<_> = plan
            .ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::SetFillStyle(s) => Some(*s),
                _ => None,
            })
            .collect();
        assert_eq!(
            fills,
            vec![
                CONFIG.root_fill,
                CONFIG.active_fill,
                CONFIG.black_fill,
                CONFIG.white_fill
            ]
        );
        // Root, active, black (depths 1 and 3), white (depth 2).
        assert_eq!(plan.markers, 5);
        let pos = |n| store.point(store.lookup(p(n)).unwrap());
        assert_eq!(
            circles(&plan),
            vec![pos(0), pos(4), pos(1), pos(3), pos(2)]
        );
    }

    #[test]
    fn every_node_gets_exactly_one_marker() {
        let store = laid_out(&[(0, 1), (1, 2), (0, 3), (3, 4), (3, 5), (1, 6)]);
        let plan = plan_for(&store);
        let mut centers = circles(&plan);
        let mut expected: Vec<_> = store.preorder().map(|id| store.point(id)).collect();
        let key = |a: &Point, b: &Point| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y));
        centers.sort_by(key);
        expected.sort_by(key);
        assert_eq!(centers, expected);
        assert_eq!(plan.event().markers, 7);
    }
}
