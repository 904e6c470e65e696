// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use vartree_core::position::PositionRef;
use vartree_core::trace::{
    ActiveChangedEvent, ClickEvent, HoverEvent, LayoutEvent, NodeAddedEvent, PaintEvent,
    ResizeEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_new_game(&mut self, root: PositionRef) {
        let _ = writeln!(self.writer, "[game] root={root}");
    }

    fn on_node_added(&mut self, e: &NodeAddedEvent) {
        let line = if e.mainline { "mainline" } else { "branch" };
        let reused = if e.reused { " reused" } else { "" };
        let _ = writeln!(
            self.writer,
            "[add] {} under {} {line}{reused}",
            e.position, e.parent,
        );
    }

    fn on_active_changed(&mut self, e: &ActiveChangedEvent) {
        let _ = writeln!(self.writer, "[active] {}", e.position);
    }

    fn on_layout(&mut self, e: &LayoutEvent) {
        let _ = writeln!(
            self.writer,
            "[layout] nodes={} levels={} required={}x{}",
            e.nodes, e.depth_levels, e.required.width, e.required.height,
        );
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        let _ = writeln!(
            self.writer,
            "[resize] logical={}x{} dpr={} pixels={}x{}",
            e.logical.width, e.logical.height, e.device_pixel_ratio, e.pixel_width, e.pixel_height,
        );
    }

    fn on_paint(&mut self, e: &PaintEvent) {
        let _ = writeln!(
            self.writer,
            "[paint] ops={} edges={} markers={}",
            e.ops, e.edges, e.markers,
        );
    }

    fn on_hover(&mut self, e: &HoverEvent) {
        let _ = match e.position {
            Some(p) => writeln!(self.writer, "[hover] {p}"),
            None => writeln!(self.writer, "[hover] none"),
        };
    }

    fn on_click(&mut self, e: &ClickEvent) {
        let _ = writeln!(
            self.writer,
            "[click] {} listeners={}",
            e.position, e.listeners,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_node_added() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_node_added(&NodeAddedEvent {
            position: PositionRef(3),
            parent: PositionRef(1),
            mainline: false,
            reused: false,
        });
        let output = output(sink);
        assert_eq!(output, "[add] #3 under #1 branch\n");
    }

    #[test]
    fn pretty_print_layout_and_resize() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_layout(&LayoutEvent {
            nodes: 3,
            depth_levels: 2,
            required: Size::new(41.0, 41.0),
        });
        sink.on_resize(&ResizeEvent {
            logical: Size::new(41.0, 41.0),
            device_pixel_ratio: 2.0,
            pixel_width: 82,
            pixel_height: 82,
        });
        let output = output(sink);
        assert!(output.contains("[layout] nodes=3 levels=2 required=41x41"), "got: {output}");
        assert!(output.contains("pixels=82x82"), "got: {output}");
    }

    #[test]
    fn pretty_print_hover_none() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_hover(&HoverEvent { position: None });
        sink.on_hover(&HoverEvent {
            position: Some(PositionRef(9)),
        });
        assert_eq!(output(sink), "[hover] none\n[hover] #9\n");
    }
}
