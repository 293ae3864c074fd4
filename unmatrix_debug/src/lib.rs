// Copyright 2026 the Unmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for unmatrix diagnostics.
//!
//! This crate provides [`DecomposeSink`](unmatrix_core::trace::DecomposeSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: in-memory event log for later inspection.
//! - [`json::export_json`]: writes recorded events as a JSON array, using
//!   [`json::decomposed_to_json`] for the component breakdown.

pub mod json;
pub mod pretty;
pub mod recorder;
