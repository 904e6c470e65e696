// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless variation-tree session that exercises the tracing pipeline.
//!
//! Plays a short game with a few branches through a [`VariationTree`] backed
//! by an in-memory surface, printing every trace event with a
//! [`PrettyPrintSink`], then writes a JSON layout snapshot.

use std::cell::Cell;
use std::fs::File;
use std::io::BufWriter;
use std::rc::Rc;

use kurbo::{Affine, Point, Size};
use vartree_core::position::PositionRef;
use vartree_core::widget::VariationTree;
use vartree_debug::pretty::PrettyPrintSink;
use vartree_render::{CanvasPresenter, PaintPlan, Surface};

/// Surface that only remembers its size and how often it was drawn.
#[derive(Debug, Default)]
struct HeadlessSurface {
    pixels: (u32, u32),
    draws: u32,
}

impl Surface for HeadlessSurface {
    fn resize(&mut self, pixel_width: u32, pixel_height: u32, _logical: Size) {
        self.pixels = (pixel_width, pixel_height);
    }

    fn set_transform(&mut self, _transform: Affine) {}

    fn draw(&mut self, _plan: &PaintPlan) {
        self.draws += 1;
    }
}

const fn pos(n: u64) -> PositionRef {
    PositionRef(n)
}

fn main() {
    let presenter = CanvasPresenter::new(HeadlessSurface::default(), 2.0);
    let mut tree = VariationTree::new(presenter);
    tree.set_trace_sink(Box::new(PrettyPrintSink::new(Box::new(std::io::stdout()))));

    let clicked = Rc::new(Cell::new(None));
    let sink = Rc::clone(&clicked);
    tree.on_click(move |p| sink.set(Some(p)));

    // -- game --------------------------------------------------------------
    tree.new_game(pos(0));
    for n in 1..=6 {
        tree.add_child(pos(n - 1), pos(n)).expect("mainline move");
    }
    // Branch at move 2, then a sub-branch off that.
    tree.add_child(pos(2), pos(10)).expect("branch");
    tree.add_child(pos(10), pos(11)).expect("branch");
    tree.add_child(pos(10), pos(20)).expect("sub-branch");
    // Second alternative at the root.
    tree.add_child(pos(0), pos(30)).expect("root branch");
    // Replaying a known move is a no-op.
    tree.add_child(pos(0), pos(30)).expect("replay");

    // -- pointer -----------------------------------------------------------
    let root = tree.store().point(tree.store().root().expect("game started"));
    if let Some(hint) = tree.pointer_move(root) {
        println!("cursor: {hint:?}");
    }
    if let Some(hint) = tree.pointer_move(Point::new(-50.0, -50.0)) {
        println!("cursor: {hint:?}");
    }
    let target = tree.store().lookup(pos(4)).expect("known move");
    let outcome = tree.click(tree.store().point(target));
    if let Some(hint) = outcome.cursor {
        println!("cursor: {hint:?}");
    }
    if let Some(p) = clicked.take() {
        tree.set_active(p).expect("clicked node exists");
    }

    let surface = tree.presenter().surface();
    println!(
        "surface: {}x{} px after {} draws",
        surface.pixels.0, surface.pixels.1, surface.draws
    );

    // -- export snapshot ---------------------------------------------------
    let path = "vartree_snapshot.json";
    let file = File::create(path).expect("failed to create vartree_snapshot.json");
    let mut writer = BufWriter::new(file);
    vartree_debug::snapshot::export(tree.store(), &mut writer).expect("failed to write snapshot");

    println!("Wrote {path} ({} nodes)", tree.store().len());
}
