// Copyright 2026 the Unmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matrix recomposition.
//!
//! [`recompose`] is the inverse of [`decompose`](crate::decompose::decompose):
//! starting from the identity it applies perspective, translation, rotation,
//! skew and scale, each as a right-multiplication onto the accumulator (the
//! perspective is a direct assignment of row 3). Only the quaternion is
//! consulted for the rotation.

use crate::decompose::DecomposedTransform;
use crate::transform::Transform3d;

/// Builds the matrix described by `t`.
#[must_use]
pub fn recompose(t: &DecomposedTransform) -> Transform3d {
    Transform3d::IDENTITY
        .with_perspective(t.perspective)
        .translated(t.translation)
        .rotated(t.quaternion)
        .skewed(t.skew)
        .scaled(t.scale)
}

impl DecomposedTransform {
    /// Builds the matrix described by these components; see [`recompose`].
    #[inline]
    #[must_use]
    pub fn recompose(&self) -> Transform3d {
        recompose(self)
    }
}

impl From<DecomposedTransform> for Transform3d {
    #[inline]
    fn from(t: DecomposedTransform) -> Self {
        recompose(&t)
    }
}
