// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing surface contract and sizing.

use kurbo::{Affine, Size, Vec2};
use vartree_core::trace::ResizeEvent;

use crate::plan::PaintPlan;

/// A 2D drawing surface with a backing pixel buffer.
///
/// Implementations are expected to behave like an HTML canvas: resizing the
/// backing buffer clears it and resets the current transform.
pub trait Surface {
    /// Sets the backing buffer to `pixel_width × pixel_height` device pixels
    /// and the visible size to `logical`.
    fn resize(&mut self, pixel_width: u32, pixel_height: u32, logical: Size);

    /// Replaces the current transform from logical units to device pixels.
    fn set_transform(&mut self, transform: Affine);

    /// Executes a paint plan.
    fn draw(&mut self, plan: &PaintPlan);
}

/// Tracks the logical size of a [`Surface`] and keeps its pixel buffer and
/// transform consistent with the device pixel ratio.
///
/// Layout only ever grows the surface. Shrinking happens solely through
/// [`reset`](Self::reset) when a new game starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceManager {
    logical: Size,
    device_pixel_ratio: f64,
    pixels: (u32, u32),
}

impl SurfaceManager {
    /// Logical size of a freshly reset surface.
    pub const MIN: Size = Size::new(1.0, 1.0);

    /// Creates a manager for a surface that has not been sized yet.
    ///
    /// Non-positive or non-finite ratios fall back to 1.
    #[must_use]
    pub fn new(device_pixel_ratio: f64) -> Self {
        Self {
            logical: Size::ZERO,
            device_pixel_ratio: sanitize(device_pixel_ratio),
            pixels: (0, 0),
        }
    }

    /// Current logical (visible) size.
    #[must_use]
    pub fn logical_size(&self) -> Size {
        self.logical
    }

    /// Current backing buffer size in device pixels.
    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        self.pixels
    }

    /// Current device pixel ratio.
    #[must_use]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// Changes the device pixel ratio and rescales the backing buffer.
    ///
    /// Returns the resize that was applied, if any.
    pub fn set_device_pixel_ratio(
        &mut self,
        surface: &mut impl Surface,
        device_pixel_ratio: f64,
    ) -> Option<ResizeEvent> {
        let ratio = sanitize(device_pixel_ratio);
        if ratio == self.device_pixel_ratio {
            return None;
        }
        self.device_pixel_ratio = ratio;
        if self.logical == Size::ZERO {
            return None;
        }
        Some(self.apply(surface, self.logical))
    }

    /// Shrinks the surface back to [`MIN`](Self::MIN).
    pub fn reset(&mut self, surface: &mut impl Surface) -> ResizeEvent {
        self.apply(surface, Self::MIN)
    }

    /// Grows the surface so that `required` fits.
    ///
    /// Resizes only if `required`, scaled by the device pixel ratio, exceeds
    /// the backing buffer in either dimension. The surface never shrinks.
    pub fn ensure(&mut self, surface: &mut impl Surface, required: Size) -> Option<ResizeEvent> {
        let (w, h) = self.to_pixels(required);
        if w <= self.pixels.0 && h <= self.pixels.1 {
            return None;
        }
        let logical = Size::new(
            self.logical.width.max(required.width),
            self.logical.height.max(required.height),
        );
        Some(self.apply(surface, logical))
    }

    fn apply(&mut self, surface: &mut impl Surface, logical: Size) -> ResizeEvent {
        let (pixel_width, pixel_height) = self.to_pixels(logical);
        self.logical = logical;
        self.pixels = (pixel_width, pixel_height);
        surface.resize(pixel_width, pixel_height, logical);
        // Resizing resets the transform; set it again from scratch.
        surface.set_transform(self.transform());
        ResizeEvent {
            logical,
            device_pixel_ratio: self.device_pixel_ratio,
            pixel_width,
            pixel_height,
        }
    }

    /// Logical-to-pixel transform with a half-unit offset, so 1-unit strokes
    /// land on pixel centers.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::scale(self.device_pixel_ratio) * Affine::translate(Vec2::new(0.5, 0.5))
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "surface extents are far below u32::MAX"
    )]
    fn to_pixels(&self, logical: Size) -> (u32, u32) {
        let px = (logical * self.device_pixel_ratio).ceil();
        (px.width as u32, px.height as u32)
    }
}

fn sanitize(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        resizes: Vec<(u32, u32, Size)>,
        transforms: Vec<Affine>,
    }

    impl Surface for RecordingSurface {
        fn resize(&mut self, pixel_width: u32, pixel_height: u32, logical: Size) {
            self.resizes.push((pixel_width, pixel_height, logical));
        }

        fn set_transform(&mut self, transform: Affine) {
            self.transforms.push(transform);
        }

        fn draw(&mut self, _plan: &PaintPlan) {}
    }

    #[test]
    fn reset_sizes_to_minimum() {
        let mut surface = RecordingSurface::default();
        let mut manager = SurfaceManager::new(1.0);
        let event = manager.reset(&mut surface);
        assert_eq!(surface.resizes, vec![(1, 1, Size::new(1.0, 1.0))]);
        assert_eq!(event.pixel_width, 1);
        assert_eq!(manager.logical_size(), SurfaceManager::MIN);
    }

    #[test]
    fn ensure_grows_and_scales_by_ratio() {
        let mut surface = RecordingSurface::default();
        let mut manager = SurfaceManager::new(2.0);
        manager.reset(&mut surface);
        let event = manager.ensure(&mut surface, Size::new(22.0, 22.0)).unwrap();
        assert_eq!((event.pixel_width, event.pixel_height), (44, 44));
        assert_eq!(event.logical, Size::new(22.0, 22.0));
        assert_eq!(surface.resizes.last(), Some(&(44, 44, Size::new(22.0, 22.0))));
    }

    #[test]
    fn ensure_never_shrinks() {
        let mut surface = RecordingSurface::default();
        let mut manager = SurfaceManager::new(1.0);
        manager.reset(&mut surface);
        manager.ensure(&mut surface, Size::new(60.0, 22.0)).unwrap();
        assert!(
            manager.ensure(&mut surface, Size::new(41.0, 22.0)).is_none(),
            "already large enough"
        );
        let event = manager.ensure(&mut surface, Size::new(41.0, 41.0)).unwrap();
        assert_eq!(event.logical, Size::new(60.0, 41.0), "width is kept");
        assert_eq!(surface.resizes.len(), 3);
    }

    #[test]
    fn transform_is_reapplied_after_every_resize() {
        let mut surface = RecordingSurface::default();
        let mut manager = SurfaceManager::new(1.5);
        manager.reset(&mut surface);
        manager.ensure(&mut surface, Size::new(30.0, 30.0));
        manager.ensure(&mut surface, Size::new(49.0, 30.0));
        assert_eq!(surface.transforms.len(), surface.resizes.len());
        let expected = Affine::new([1.5, 0.0, 0.0, 1.5, 0.75, 0.75]);
        for t in &surface.transforms {
            assert_eq!(*t, expected, "same transform each time, not accumulated");
        }
    }

    #[test]
    fn fractional_sizes_round_up() {
        let mut surface = RecordingSurface::default();
        let mut manager = SurfaceManager::new(1.25);
        let event = manager.ensure(&mut surface, Size::new(22.0, 41.0)).unwrap();
        // 27.5 → 28, 51.25 → 52
        assert_eq!((event.pixel_width, event.pixel_height), (28, 52));
    }

    #[test]
    fn ratio_change_rescales_buffer() {
        let mut surface = RecordingSurface::default();
        let mut manager = SurfaceManager::new(1.0);
        manager.ensure(&mut surface, Size::new(22.0, 22.0));
        assert!(
            manager.set_device_pixel_ratio(&mut surface, 1.0).is_none(),
            "unchanged ratio"
        );
        let event = manager.set_device_pixel_ratio(&mut surface, 3.0).unwrap();
        assert_eq!((event.pixel_width, event.pixel_height), (66, 66));
        assert_eq!(manager.logical_size(), Size::new(22.0, 22.0));
    }

    #[test]
    fn bogus_ratio_falls_back_to_one() {
        assert_eq!(SurfaceManager::new(0.0).device_pixel_ratio(), 1.0);
        assert_eq!(SurfaceManager::new(f64::NAN).device_pixel_ratio(), 1.0);
        assert_eq!(SurfaceManager::new(-2.0).device_pixel_ratio(), 1.0);
    }
}
