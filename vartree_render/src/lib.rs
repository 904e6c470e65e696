// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint plans, surface sizing, and canvas presentation for vartree.
//!
//! This crate sits between [`vartree_core`]'s laid-out tree and a concrete
//! 2D drawing surface. It defines:
//!
//! - [`PaintOp`] / [`PaintPlan`] — a flat, backend-neutral list of canvas
//!   operations for one full repaint
//! - [`build_plan`] — the renderer: a pure function from tree state to plan
//! - [`Surface`] — the contract a drawing surface implements
//! - [`SurfaceManager`] — monotonic sizing and device-pixel-ratio handling
//! - [`CanvasPresenter`] — a [`Presenter`](vartree_core::backend::Presenter)
//!   combining all of the above

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod config;
mod paint;
mod plan;
mod presenter;
mod surface;

pub use config::PaintConfig;
pub use paint::build_plan;
pub use plan::{PaintOp, PaintPlan};
pub use presenter::CanvasPresenter;
pub use surface::{Surface, SurfaceManager};
