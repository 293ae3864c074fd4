// Copyright 2026 the Unmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics hooks for decomposition.
//!
//! This module provides a [`DecomposeSink`] trait with one method per notable
//! event in [`decompose_traced`](crate::decompose::decompose_traced). All
//! method bodies default to no-ops, so implementing only the events you care
//! about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn DecomposeSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! Concrete sinks (pretty printer, recorder) live in `unmatrix_debug`.

use crate::decompose::DecomposedTransform;
use crate::error::DecomposeError;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a matrix cannot be decomposed and the degenerate result is
/// returned instead.
#[derive(Clone, Copy, Debug)]
pub struct DegenerateEvent {
    /// Which check rejected the matrix.
    pub reason: DecomposeError,
    /// The bottom-right element of the input, before normalisation.
    pub m44: f64,
}

/// Emitted when the orthonormalised basis was left-handed and the reflection
/// was folded into the scale signs.
#[derive(Clone, Copy, Debug)]
pub struct ReflectionEvent {
    /// Triple product of the basis before it was flipped (negative).
    pub handedness: f64,
}

/// Emitted when the Euler extraction hit gimbal lock and pinned the Z angle.
#[derive(Clone, Copy, Debug)]
pub struct GimbalLockEvent {
    /// The Y (pitch) angle, close to ±π/2.
    pub pitch: f64,
    /// The X angle that absorbed the combined roll and yaw.
    pub roll: f64,
}

// ---------------------------------------------------------------------------
// DecomposeSink trait
// ---------------------------------------------------------------------------

/// Receives decomposition events.
///
/// Every method has a no-op default.
pub trait DecomposeSink {
    /// The input was rejected; the degenerate result follows.
    fn on_degenerate(&mut self, e: &DegenerateEvent) {
        _ = e;
    }

    /// A reflection was absorbed into the scale.
    fn on_reflection(&mut self, e: &ReflectionEvent) {
        _ = e;
    }

    /// The gimbal-lock branch of the Euler extraction was taken.
    fn on_gimbal_lock(&mut self, e: &GimbalLockEvent) {
        _ = e;
    }

    /// Decomposition finished successfully.
    fn on_decomposed(&mut self, result: &DecomposedTransform) {
        _ = result;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A sink that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DecomposeSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Zero-cost wrapper around an optional [`DecomposeSink`].
///
/// Without the `trace` feature this holds nothing and every method is empty.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn DecomposeSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn DecomposeSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that forwards to `sink`.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn DecomposeSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that drops every event.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Forwards a [`DegenerateEvent`].
    #[inline]
    pub fn degenerate(&mut self, e: &DegenerateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_degenerate(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Forwards a [`ReflectionEvent`].
    #[inline]
    pub fn reflection(&mut self, e: &ReflectionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reflection(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Forwards a [`GimbalLockEvent`].
    #[inline]
    pub fn gimbal_lock(&mut self, e: &GimbalLockEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_gimbal_lock(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Forwards a finished decomposition.
    #[inline]
    pub fn decomposed(&mut self, result: &DecomposedTransform) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_decomposed(result);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = result;
        }
    }
}

impl Default for Tracer<'_> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        degenerate: u32,
        reflections: u32,
        locks: u32,
        done: u32,
    }

    impl DecomposeSink for Counting {
        fn on_degenerate(&mut self, _: &DegenerateEvent) {
            self.degenerate += 1;
        }
        fn on_reflection(&mut self, _: &ReflectionEvent) {
            self.reflections += 1;
        }
        fn on_gimbal_lock(&mut self, _: &GimbalLockEvent) {
            self.locks += 1;
        }
        fn on_decomposed(&mut self, _: &DecomposedTransform) {
            self.done += 1;
        }
    }

    fn fire_all(tracer: &mut Tracer<'_>) {
        tracer.degenerate(&DegenerateEvent {
            reason: DecomposeError::ZeroHomogeneous,
            m44: 0.0,
        });
        tracer.reflection(&ReflectionEvent { handedness: -1.0 });
        tracer.gimbal_lock(&GimbalLockEvent {
            pitch: 1.57,
            roll: 0.3,
        });
        tracer.decomposed(&DecomposedTransform::IDENTITY);
    }

    #[test]
    fn none_tracer_is_inert() {
        let mut tracer = Tracer::none();
        fire_all(&mut tracer);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_forwards_when_enabled() {
        let mut sink = Counting::default();
        fire_all(&mut Tracer::new(&mut sink));
        assert_eq!(
            (sink.degenerate, sink.reflections, sink.locks, sink.done),
            (1, 1, 1, 1),
            "every event should reach the sink"
        );
    }

    #[cfg(not(feature = "trace"))]
    #[test]
    fn tracer_drops_when_disabled() {
        let mut sink = Counting::default();
        fire_all(&mut Tracer::new(&mut sink));
        assert_eq!(
            (sink.degenerate, sink.reflections, sink.locks, sink.done),
            (0, 0, 0, 0),
            "events must not dispatch without `trace`"
        );
    }
}
