// Copyright 2026 the Unmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`DecomposeSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use unmatrix_core::decompose::DecomposedTransform;
use unmatrix_core::trace::{DecomposeSink, DegenerateEvent, GimbalLockEvent, ReflectionEvent};
use unmatrix_core::vector::Vec3;

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    precision: usize,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("precision", &self.precision)
            .finish_non_exhaustive()
    }
}

/// Number of decimals printed when no precision is given.
pub const DEFAULT_PRECISION: usize = 4;

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            precision: DEFAULT_PRECISION,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Sets how many decimals are printed for each component.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn vec3(&self, v: Vec3) -> String {
        let p = self.precision;
        format!("({:.p$}, {:.p$}, {:.p$})", v.x, v.y, v.z)
    }
}

impl<W: Write> DecomposeSink for PrettyPrintSink<W> {
    fn on_degenerate(&mut self, e: &DegenerateEvent) {
        let p = self.precision;
        let _ = writeln!(
            self.writer,
            "[degenerate] reason=\"{}\" m44={:.p$}",
            e.reason, e.m44,
        );
    }

    fn on_reflection(&mut self, e: &ReflectionEvent) {
        let p = self.precision;
        let _ = writeln!(
            self.writer,
            "[reflection] handedness={:.p$} scale negated",
            e.handedness,
        );
    }

    fn on_gimbal_lock(&mut self, e: &GimbalLockEvent) {
        let p = self.precision;
        let _ = writeln!(
            self.writer,
            "[gimbal] pitch={:.p$} roll={:.p$} yaw pinned to 0",
            e.pitch, e.roll,
        );
    }

    fn on_decomposed(&mut self, t: &DecomposedTransform) {
        let p = self.precision;
        let q = t.quaternion;
        let v = t.perspective;
        let line = format!(
            "[decomposed] translate={} scale={} euler={} \
             quat=({:.p$}, {:.p$}, {:.p$}, {:.p$}) skew={} \
             perspective=({:.p$}, {:.p$}, {:.p$}, {:.p$})",
            self.vec3(t.translation),
            self.vec3(t.scale),
            self.vec3(t.rotation),
            q.x,
            q.y,
            q.z,
            q.w,
            self.vec3(t.skew),
            v.x,
            v.y,
            v.z,
            v.w,
        );
        let _ = writeln!(self.writer, "{line}");
    }
}
