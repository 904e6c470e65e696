// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint plan: an ordered sequence of canvas operations for one repaint.

use alloc::vec::Vec;

use kurbo::{Circle, Point};
use vartree_core::trace::PaintEvent;

/// A single 2D canvas operation.
///
/// Coordinates are in logical units; the surface transform maps them to
/// device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintOp {
    /// Clears the whole surface.
    Clear,
    /// Sets the stroke width.
    SetLineWidth(f64),
    /// Sets the stroke colour.
    SetStrokeStyle(&'static str),
    /// Sets the fill colour.
    SetFillStyle(&'static str),
    /// Starts a new path, discarding the current one.
    BeginPath,
    /// Starts a new subpath at the point.
    MoveTo(Point),
    /// Adds a straight segment to the point.
    LineTo(Point),
    /// Adds a full circle as its own subpath.
    Circle(Circle),
    /// Fills the current path.
    Fill,
    /// Strokes the current path.
    Stroke,
}

/// An ordered list of paint operations for a full repaint.
///
/// Operations are batched by style: each pass sets its styles once and
/// issues a single fill and/or stroke.
#[derive(Clone, Debug, Default)]
pub struct PaintPlan {
    /// Operations in execution order.
    pub ops: Vec<PaintOp>,
    /// Number of edge segments (including connectors) in the plan.
    pub edges: u32,
    /// Number of node markers in the plan.
    pub markers: u32,
}

impl PaintPlan {
    /// Creates an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the plan for reuse.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.edges = 0;
        self.markers = 0;
    }

    /// Returns `true` if the plan has no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Summarizes the plan as a trace event.
    #[must_use]
    pub fn event(&self) -> PaintEvent {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "op count is linear in node count"
        )]
        let ops = self.ops.len() as u32;
        PaintEvent {
            ops,
            edges: self.edges,
            markers: self.markers,
        }
    }

    pub(crate) fn push(&mut self, op: PaintOp) {
        self.ops.push(op);
    }

    pub(crate) fn segment(&mut self, from: Point, to: Point) {
        self.ops.push(PaintOp::MoveTo(from));
        self.ops.push(PaintOp::LineTo(to));
        self.edges += 1;
    }

    pub(crate) fn marker(&mut self, circle: Circle) {
        self.ops.push(PaintOp::Circle(circle));
        self.markers += 1;
    }
}
