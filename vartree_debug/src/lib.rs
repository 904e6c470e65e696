// Copyright 2026 the Vartree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printed tracing and JSON layout snapshots for vartree diagnostics.
//!
//! - [`pretty::PrettyPrintSink`] — a [`TraceSink`](vartree_core::trace::TraceSink)
//!   writing one human-readable line per event.
//! - [`snapshot::export`] — dumps a laid-out tree as JSON.

pub mod pretty;
pub mod snapshot;
