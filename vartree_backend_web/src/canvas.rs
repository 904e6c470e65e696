// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas 2D surface.

use alloc::format;
use core::f64::consts::TAU;

use kurbo::{Affine, Size};
use vartree_core::widget::CursorHint;
use vartree_render::{PaintOp, PaintPlan, Surface};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

/// Draws paint plans on an `HtmlCanvasElement`.
///
/// The backing buffer is sized in device pixels; the element's CSS size is
/// the logical size.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl core::fmt::Debug for CanvasSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CanvasSurface")
            .field("canvas", &"HtmlCanvasElement")
            .field("width", &self.canvas.width())
            .field("height", &self.canvas.height())
            .finish_non_exhaustive()
    }
}

impl CanvasSurface {
    /// Wraps an existing canvas.
    ///
    /// # Errors
    ///
    /// Fails if the canvas cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .unchecked_into();
        Ok(Self { canvas, context })
    }

    /// Creates a canvas as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Fails if `parent` has no owner document or the canvas cannot provide a
    /// 2D context.
    pub fn mount(parent: &HtmlElement) -> Result<Self, JsValue> {
        let doc = parent
            .owner_document()
            .ok_or_else(|| JsValue::from_str("parent has no owner document"))?;
        let canvas: HtmlCanvasElement = doc.create_element("canvas")?.unchecked_into();
        let _ = canvas.style().set_property("display", "block");
        parent.append_child(&canvas)?;
        Self::new(canvas)
    }

    /// Returns the canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Applies a cursor affordance to the canvas.
    pub fn set_cursor(&self, hint: CursorHint) {
        let _ = self
            .canvas
            .style()
            .set_property("cursor", crate::cursor_value(hint));
    }

    fn clear(&self) {
        let ctx = &self.context;
        ctx.save();
        let _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        ctx.restore();
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, pixel_width: u32, pixel_height: u32, logical: Size) {
        self.canvas.set_width(pixel_width);
        self.canvas.set_height(pixel_height);
        let s = self.canvas.style();
        let _ = s.set_property("width", &format!("{}px", logical.width));
        let _ = s.set_property("height", &format!("{}px", logical.height));
    }

    fn set_transform(&mut self, transform: Affine) {
        let [a, b, c, d, e, f] = transform.as_coeffs();
        let _ = self.context.set_transform(a, b, c, d, e, f);
    }

    fn draw(&mut self, plan: &PaintPlan) {
        let ctx = &self.context;
        for op in &plan.ops {
            match *op {
                PaintOp::Clear => self.clear(),
                PaintOp::SetLineWidth(w) => ctx.set_line_width(w),
                PaintOp::SetStrokeStyle(s) => ctx.set_stroke_style_str(s),
                PaintOp::SetFillStyle(s) => ctx.set_fill_style_str(s),
                PaintOp::BeginPath => ctx.begin_path(),
                PaintOp::MoveTo(p) => ctx.move_to(p.x, p.y),
                PaintOp::LineTo(p) => ctx.line_to(p.x, p.y),
                PaintOp::Circle(c) => {
                    // Start a fresh subpath so circles are not joined.
                    ctx.move_to(c.center.x + c.radius, c.center.y);
                    let _ = ctx.arc(c.center.x, c.center.y, c.radius, 0.0, TAU);
                }
                PaintOp::Fill => ctx.fill(),
                PaintOp::Stroke => ctx.stroke(),
            }
        }
    }
}
