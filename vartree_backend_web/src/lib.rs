// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for vartree.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`CanvasSurface`]: a [`Surface`] over an `HtmlCanvasElement` and its 2D
//!   context
//! - [`device_pixel_ratio`]: the window's current pixel ratio
//! - [`mount`]: creates a ready-to-use [`WebVariationTree`] under a host
//!   element
//!
//! Pointer listeners stay with the host: forward pointer coordinates (in the
//! canvas's CSS pixel space) to
//! [`VariationTree::pointer_move`] and [`VariationTree::click`], and apply
//! the returned [`CursorHint`] with [`CanvasSurface::set_cursor`]. After a
//! mutation, apply [`VariationTree::take_cursor_hint`] the same way.

#![no_std]

extern crate alloc;

mod canvas;

pub use canvas::CanvasSurface;
pub use vartree_core::widget::{CursorHint, VariationTree};
pub use vartree_render::Surface;

use vartree_render::CanvasPresenter;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

/// A variation tree drawn on an HTML canvas.
pub type WebVariationTree = VariationTree<CanvasPresenter<CanvasSurface>>;

/// Returns `window.devicePixelRatio`, or 1 outside a window context.
#[must_use]
pub fn device_pixel_ratio() -> f64 {
    web_sys::window().map_or(1.0, |w| w.device_pixel_ratio())
}

/// Appends a new canvas to `parent` and returns a tree drawing on it.
///
/// # Errors
///
/// Fails if `parent` is detached from a document or the browser refuses a 2D
/// context.
pub fn mount(parent: &HtmlElement) -> Result<WebVariationTree, JsValue> {
    let surface = CanvasSurface::mount(parent)?;
    Ok(VariationTree::new(CanvasPresenter::new(
        surface,
        device_pixel_ratio(),
    )))
}

/// CSS `cursor` value for a hint.
#[must_use]
pub fn cursor_value(hint: CursorHint) -> &'static str {
    match hint {
        CursorHint::Default => "default",
        CursorHint::Pointer => "pointer",
    }
}
