// Copyright 2026 the Unmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`DecomposeSink`] and appends every event it
//! receives, in arrival order, as a [`RecordedEvent`]. Pass the recording to
//! [`export_json`](crate::json::export_json) to write it out.

use unmatrix_core::decompose::DecomposedTransform;
use unmatrix_core::trace::{DecomposeSink, DegenerateEvent, GimbalLockEvent, ReflectionEvent};

/// One recorded decomposition event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A [`DegenerateEvent`].
    Degenerate(DegenerateEvent),
    /// A [`ReflectionEvent`].
    Reflection(ReflectionEvent),
    /// A [`GimbalLockEvent`].
    GimbalLock(GimbalLockEvent),
    /// A successful decomposition.
    Decomposed(DecomposedTransform),
}

impl RecordedEvent {
    /// Short lowercase name of the event kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Degenerate(_) => "degenerate",
            Self::Reflection(_) => "reflection",
            Self::GimbalLock(_) => "gimbal_lock",
            Self::Decomposed(_) => "decomposed",
        }
    }
}

/// A [`DecomposeSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl DecomposeSink for RecorderSink {
    fn on_degenerate(&mut self, e: &DegenerateEvent) {
        self.events.push(RecordedEvent::Degenerate(*e));
    }

    fn on_reflection(&mut self, e: &ReflectionEvent) {
        self.events.push(RecordedEvent::Reflection(*e));
    }

    fn on_gimbal_lock(&mut self, e: &GimbalLockEvent) {
        self.events.push(RecordedEvent::GimbalLock(*e));
    }

    fn on_decomposed(&mut self, result: &DecomposedTransform) {
        self.events.push(RecordedEvent::Decomposed(*result));
    }
}
