// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for tree mutation, layout, and presentation.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! store, the widget, and presenters call at each stage. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.

use kurbo::Size;

use crate::position::PositionRef;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when `add_child` resolves to a node.
#[derive(Clone, Copy, Debug)]
pub struct NodeAddedEvent {
    /// Position of the child node.
    pub position: PositionRef,
    /// Position of its parent.
    pub parent: PositionRef,
    /// Whether the node lies on the mainline.
    pub mainline: bool,
    /// Whether an existing node was reused instead of inserted.
    pub reused: bool,
}

/// Emitted when the active node changes.
#[derive(Clone, Copy, Debug)]
pub struct ActiveChangedEvent {
    /// Position of the new active node.
    pub position: PositionRef,
}

/// Emitted after a layout pass.
#[derive(Clone, Copy, Debug)]
pub struct LayoutEvent {
    /// Number of nodes laid out (including the root).
    pub nodes: u32,
    /// Number of depth rows (the root row counts as one).
    pub depth_levels: u32,
    /// Logical size needed to draw the whole tree.
    pub required: Size,
}

/// Emitted when the drawing surface changes size.
#[derive(Clone, Copy, Debug)]
pub struct ResizeEvent {
    /// New logical (CSS-visible) size.
    pub logical: Size,
    /// Device pixel ratio applied to the backing buffer.
    pub device_pixel_ratio: f64,
    /// Backing buffer width in device pixels.
    pub pixel_width: u32,
    /// Backing buffer height in device pixels.
    pub pixel_height: u32,
}

/// Emitted after a repaint.
#[derive(Clone, Copy, Debug)]
pub struct PaintEvent {
    /// Total number of paint operations issued.
    pub ops: u32,
    /// Number of edge segments drawn.
    pub edges: u32,
    /// Number of node markers drawn.
    pub markers: u32,
}

/// Emitted when the hovered node changes.
#[derive(Clone, Copy, Debug)]
pub struct HoverEvent {
    /// Position under the pointer, or `None` when the pointer left all nodes.
    pub position: Option<PositionRef>,
}

/// Emitted when a click is dispatched to listeners.
#[derive(Clone, Copy, Debug)]
pub struct ClickEvent {
    /// Position that was clicked.
    pub position: PositionRef,
    /// Number of listeners notified.
    pub listeners: u32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the tree, widget, and presenters.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a new game replaces the tree.
    fn on_new_game(&mut self, root: PositionRef) {
        _ = root;
    }

    /// Called when `add_child` resolves to a node.
    fn on_node_added(&mut self, e: &NodeAddedEvent) {
        _ = e;
    }

    /// Called when the active node changes.
    fn on_active_changed(&mut self, e: &ActiveChangedEvent) {
        _ = e;
    }

    /// Called after each layout pass.
    fn on_layout(&mut self, e: &LayoutEvent) {
        _ = e;
    }

    /// Called when the surface is resized.
    fn on_resize(&mut self, e: &ResizeEvent) {
        _ = e;
    }

    /// Called after each repaint.
    fn on_paint(&mut self, e: &PaintEvent) {
        _ = e;
    }

    /// Called when the hovered node changes.
    fn on_hover(&mut self, e: &HoverEvent) {
        _ = e;
    }

    /// Called when a click is dispatched.
    fn on_click(&mut self, e: &ClickEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a new-game notification.
    #[inline]
    pub fn new_game(&mut self, root: PositionRef) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_new_game(root);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = root;
        }
    }

    /// Emits a [`NodeAddedEvent`].
    #[inline]
    pub fn node_added(&mut self, e: &NodeAddedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_node_added(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ActiveChangedEvent`].
    #[inline]
    pub fn active_changed(&mut self, e: &ActiveChangedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_active_changed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayoutEvent`].
    #[inline]
    pub fn layout(&mut self, e: &LayoutEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ResizeEvent`].
    #[inline]
    pub fn resize(&mut self, e: &ResizeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_resize(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PaintEvent`].
    #[inline]
    pub fn paint(&mut self, e: &PaintEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_paint(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`HoverEvent`].
    #[inline]
    pub fn hover(&mut self, e: &HoverEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_hover(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ClickEvent`].
    #[inline]
    pub fn click(&mut self, e: &ClickEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_click(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
