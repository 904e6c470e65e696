// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint styling.

/// Visual styling for a repaint.
///
/// Colours are CSS colour strings, passed through to the surface untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintConfig {
    /// Radius of every node marker, in logical units.
    pub marker_radius: f64,
    /// Stroke width for edges and marker outlines.
    pub line_width: f64,
    /// Stroke colour of mainline edges.
    pub mainline_edge: &'static str,
    /// Stroke colour of branch edges and connectors.
    pub branch_edge: &'static str,
    /// Fill of the active node marker.
    pub active_fill: &'static str,
    /// Outline of the active node marker.
    pub active_stroke: &'static str,
    /// Fill of the root marker when it is not active.
    pub root_fill: &'static str,
    /// Outline of the root marker when it is not active.
    pub root_stroke: &'static str,
    /// Fill of odd-depth node markers.
    pub black_fill: &'static str,
    /// Fill of even-depth node markers.
    pub white_fill: &'static str,
    /// Outline of ordinary node markers.
    pub stone_stroke: &'static str,
}

impl PaintConfig {
    /// Default styling for the standard 19-unit grid.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            marker_radius: 5.5,
            line_width: 1.0,
            mainline_edge: "#000",
            branch_edge: "#888",
            active_fill: "#f44",
            active_stroke: "#900",
            root_fill: "#ccc",
            root_stroke: "#666",
            black_fill: "#000",
            white_fill: "#fff",
            stone_stroke: "#000",
        }
    }
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self::standard()
    }
}
