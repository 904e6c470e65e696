// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presenter that sizes and repaints a [`Surface`].

use vartree_core::backend::Presenter;
use vartree_core::trace::Tracer;
use vartree_core::tree::{TreeChanges, TreeStore};

use crate::config::PaintConfig;
use crate::paint::build_plan;
use crate::plan::PaintPlan;
use crate::surface::{Surface, SurfaceManager};

/// Presents a variation tree on any [`Surface`].
///
/// On a new game the surface is first shrunk to its minimum. Whenever the
/// tree grows, the surface is grown to fit the required size. Every
/// presentation repaints the whole tree from scratch.
#[derive(Debug)]
pub struct CanvasPresenter<S> {
    surface: S,
    manager: SurfaceManager,
    config: PaintConfig,
    plan: PaintPlan,
}

impl<S: Surface> CanvasPresenter<S> {
    /// Creates a presenter with standard styling.
    #[must_use]
    pub fn new(surface: S, device_pixel_ratio: f64) -> Self {
        Self::with_config(surface, device_pixel_ratio, PaintConfig::standard())
    }

    /// Creates a presenter with custom styling.
    #[must_use]
    pub fn with_config(surface: S, device_pixel_ratio: f64, config: PaintConfig) -> Self {
        Self {
            surface,
            manager: SurfaceManager::new(device_pixel_ratio),
            config,
            plan: PaintPlan::new(),
        }
    }

    /// Returns the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Returns the surface sizing state.
    #[must_use]
    pub fn manager(&self) -> &SurfaceManager {
        &self.manager
    }

    /// Returns the most recently presented plan.
    #[must_use]
    pub fn last_plan(&self) -> &PaintPlan {
        &self.plan
    }

    /// Changes the device pixel ratio, rescaling and repainting if needed.
    pub fn set_device_pixel_ratio(&mut self, device_pixel_ratio: f64, tracer: &mut Tracer<'_>) {
        if let Some(e) = self
            .manager
            .set_device_pixel_ratio(&mut self.surface, device_pixel_ratio)
        {
            tracer.resize(&e);
            // The resize cleared the buffer.
            self.surface.draw(&self.plan);
            tracer.paint(&self.plan.event());
        }
    }
}

impl<S: Surface> Presenter for CanvasPresenter<S> {
    fn present(&mut self, store: &TreeStore, changes: &TreeChanges, tracer: &mut Tracer<'_>) {
        if changes.new_game {
            let e = self.manager.reset(&mut self.surface);
            tracer.resize(&e);
        }
        if changes.topology_changed
            && let Some(e) = self
                .manager
                .ensure(&mut self.surface, store.required_size())
        {
            tracer.resize(&e);
        }

        build_plan(store, &self.config, &mut self.plan);
        self.surface.draw(&self.plan);
        tracer.paint(&self.plan.event());
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Affine, Size};
    use vartree_core::position::PositionRef;

    use super::*;
    use crate::plan::PaintOp;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        resizes: Vec<(u32, u32)>,
        transforms: u32,
        draws: Vec<PaintPlan>,
    }

    impl Surface for RecordingSurface {
        fn resize(&mut self, pixel_width: u32, pixel_height: u32, _logical: Size) {
            self.resizes.push((pixel_width, pixel_height));
        }

        fn set_transform(&mut self, _transform: Affine) {
            self.transforms += 1;
        }

        fn draw(&mut self, plan: &PaintPlan) {
            self.draws.push(plan.clone());
        }
    }

    fn present(presenter: &mut CanvasPresenter<RecordingSurface>, store: &mut TreeStore) {
        let changes = store.evaluate();
        assert!(!changes.is_empty(), "test step should change something");
        presenter.present(store, &changes, &mut Tracer::none());
    }

    #[test]
    fn new_game_resets_then_fits_root() {
        let mut presenter = CanvasPresenter::new(RecordingSurface::default(), 2.0);
        let mut store = TreeStore::new();
        store.new_game(PositionRef(1));
        present(&mut presenter, &mut store);
        assert_eq!(presenter.surface().resizes, [(2, 2), (44, 44)]);
        assert_eq!(presenter.surface().transforms, 2);
        assert_eq!(presenter.surface().draws.len(), 1);
    }

    #[test]
    fn growth_follows_required_size() {
        let mut presenter = CanvasPresenter::new(RecordingSurface::default(), 1.0);
        let mut store = TreeStore::new();
        store.new_game(PositionRef(1));
        present(&mut presenter, &mut store);
        store.add_child(PositionRef(1), PositionRef(2)).unwrap();
        present(&mut presenter, &mut store);
        store.add_child(PositionRef(1), PositionRef(3)).unwrap();
        present(&mut presenter, &mut store);
        assert_eq!(presenter.surface().resizes, [(1, 1), (22, 22), (22, 41), (41, 41)]);
        assert_eq!(presenter.manager().logical_size(), Size::new(41.0, 41.0));
    }

    #[test]
    fn active_change_repaints_without_resize() {
        let mut presenter = CanvasPresenter::new(RecordingSurface::default(), 1.0);
        let mut store = TreeStore::new();
        store.new_game(PositionRef(1));
        store.add_child(PositionRef(1), PositionRef(2)).unwrap();
        present(&mut presenter, &mut store);
        let resizes = presenter.surface().resizes.len();

        store.set_active(PositionRef(1)).unwrap();
        present(&mut presenter, &mut store);
        assert_eq!(presenter.surface().resizes.len(), resizes, "no resize");
        assert_eq!(presenter.surface().draws.len(), 2);
        let last = presenter.surface().draws.last().unwrap();
        assert_eq!(last.ops.first(), Some(&PaintOp::Clear));
    }

    #[test]
    fn second_game_starts_small_again() {
        let mut presenter = CanvasPresenter::new(RecordingSurface::default(), 1.0);
        let mut store = TreeStore::new();
        store.new_game(PositionRef(1));
        for n in 2..6 {
            store.add_child(PositionRef(n - 1), PositionRef(n)).unwrap();
        }
        present(&mut presenter, &mut store);
        assert_eq!(presenter.manager().logical_size(), Size::new(22.0, 98.0));

        store.new_game(PositionRef(10));
        present(&mut presenter, &mut store);
        assert_eq!(presenter.manager().logical_size(), Size::new(22.0, 22.0));
    }

    #[test]
    fn ratio_change_repaints() {
        let mut presenter = CanvasPresenter::new(RecordingSurface::default(), 1.0);
        let mut store = TreeStore::new();
        store.new_game(PositionRef(1));
        present(&mut presenter, &mut store);
        presenter.set_device_pixel_ratio(2.0, &mut Tracer::none());
        assert_eq!(presenter.surface().resizes.last(), Some(&(44, 44)));
        assert_eq!(presenter.surface().draws.len(), 2);
        assert_eq!(presenter.last_plan().markers, 1);
    }

    #[cfg(feature = "trace")]
    mod traced {
        use alloc::vec;
        use alloc::vec::Vec;

        use vartree_core::trace::{PaintEvent, ResizeEvent, TraceSink};

        use super::*;

        #[derive(Debug, Default)]
        struct CountingSink {
            resizes: Vec<(u32, u32)>,
            paints: Vec<u32>,
        }

        impl TraceSink for CountingSink {
            fn on_resize(&mut self, e: &ResizeEvent) {
                self.resizes.push((e.pixel_width, e.pixel_height));
            }

            fn on_paint(&mut self, e: &PaintEvent) {
                self.paints.push(e.markers);
            }
        }

        fn traced_present(
            presenter: &mut CanvasPresenter<RecordingSurface>,
            store: &mut TreeStore,
            sink: &mut CountingSink,
        ) {
            let changes = store.evaluate();
            presenter.present(store, &changes, &mut Tracer::new(sink));
        }

        #[test]
        fn resize_and_paint_events_follow_surface() {
            let mut sink = CountingSink::default();
            let mut presenter = CanvasPresenter::new(RecordingSurface::default(), 1.0);
            let mut store = TreeStore::new();

            store.new_game(PositionRef(1));
            traced_present(&mut presenter, &mut store, &mut sink);
            assert_eq!(sink.resizes, vec![(1, 1), (22, 22)], "reset, then fit root");
            assert_eq!(sink.paints, vec![1]);

            store.add_child(PositionRef(1), PositionRef(2)).unwrap();
            traced_present(&mut presenter, &mut store, &mut sink);
            assert_eq!(sink.resizes.last(), Some(&(22, 41)), "grown for B");
            assert_eq!(sink.paints, vec![1, 2]);

            store.set_active(PositionRef(1)).unwrap();
            traced_present(&mut presenter, &mut store, &mut sink);
            assert_eq!(sink.resizes.len(), 3, "active change does not resize");
            assert_eq!(sink.paints, vec![1, 2, 2]);

            presenter.set_device_pixel_ratio(2.0, &mut Tracer::new(&mut sink));
            assert_eq!(sink.resizes.last(), Some(&(44, 82)));
            assert_eq!(sink.paints.len(), 4, "ratio change repaints");

            presenter.set_device_pixel_ratio(2.0, &mut Tracer::new(&mut sink));
            assert_eq!(sink.resizes.len(), 4, "same ratio is a no-op");
        }
    }
}
