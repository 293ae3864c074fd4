// Copyright 2026 the Unmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matrix decomposition.
//!
//! [`decompose`] splits a [`Transform3d`] into the independent components of
//! a [`DecomposedTransform`], assuming the canonical composition order
//!
//! ```text
//!   M = Perspective · Translate · Rotate · Skew · Scale
//! ```
//!
//! Components are peeled off in that order: the matrix is normalised by its
//! bottom-right element, the perspective row is solved for and removed, the
//! translation column is read off, and the remaining 3×3 block is
//! orthogonalised (Gram–Schmidt, axis 0 then 1 then 2) into scale, skew and a
//! rotation basis. Only matrices built in this order are guaranteed to
//! round-trip through [`recompose`](crate::recompose::recompose).
//!
//! A matrix whose bottom-right element is zero, or whose perspective-free
//! block is singular, has no meaningful decomposition. [`decompose`] returns
//! [`DEFAULT_DECOMPOSED`] for it; [`try_decompose`] reports the reason.

use crate::error::DecomposeError;
use crate::quat::{Quaternion, euler_from_basis};
use crate::trace::{DegenerateEvent, GimbalLockEvent, ReflectionEvent, Tracer};
use crate::transform::Transform3d;
use crate::vector::{SkewComponents, Vec3, Vec4};

/// The independent, animatable components of a 4×4 transform.
///
/// `quaternion` is authoritative for the rotation; `rotation` holds the same
/// rotation as Euler angles for consumers that want them. Writing one field
/// does not update the other; use [`with_quaternion`](Self::with_quaternion)
/// or [`with_euler`](Self::with_euler) to keep them in step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecomposedTransform {
    /// Translation, in the matrix's spatial units.
    pub translation: Vec3,
    /// Per-axis scale. Negative values carry a reflection.
    pub scale: Vec3,
    /// Euler angles in radians, applied X, then Y, then Z.
    pub rotation: Vec3,
    /// Rotation as a (near-)unit quaternion.
    pub quaternion: Quaternion,
    /// Shear factors `(xy, xz, yz)`; see [`SkewComponents`].
    pub skew: Vec3,
    /// Perspective row `(m31, m32, m33, m34)`; see
    /// [`PerspectiveComponents`](crate::vector::PerspectiveComponents).
    pub perspective: Vec4,
}

/// The result of decomposing a matrix that has no meaningful decomposition.
///
/// Every field is zero, including the quaternion.
pub const DEFAULT_DECOMPOSED: DecomposedTransform = DecomposedTransform::DEGENERATE;

impl DecomposedTransform {
    /// Components of the identity matrix.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        scale: Vec3::ONE,
        rotation: Vec3::ZERO,
        quaternion: Quaternion::IDENTITY,
        skew: Vec3::ZERO,
        perspective: Vec4::new(0.0, 0.0, 0.0, 1.0),
    };

    /// All-zero components, returned for undecomposable input.
    pub const DEGENERATE: Self = Self {
        translation: Vec3::ZERO,
        scale: Vec3::ZERO,
        rotation: Vec3::ZERO,
        quaternion: Quaternion::ZERO,
        skew: Vec3::ZERO,
        perspective: Vec4::ZERO,
    };

    /// Returns `true` if this is the degenerate (all-zero) result.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        *self == Self::DEGENERATE
    }

    /// Replaces the rotation with `q`, re-deriving the Euler angles.
    #[must_use]
    pub fn with_quaternion(mut self, q: Quaternion) -> Self {
        self.quaternion = q;
        self.rotation = q.to_euler();
        self
    }

    /// Replaces the rotation with Euler angles `angles`, re-deriving the
    /// quaternion.
    #[must_use]
    pub fn with_euler(mut self, angles: Vec3) -> Self {
        self.rotation = angles;
        self.quaternion = Quaternion::from_euler(angles);
        self
    }

    /// Returns `true` if every component is within `epsilon` of `other`'s.
    ///
    /// Quaternions compare as rotations, so `q` and `-q` are equal. Euler
    /// angles are not compared; they are derived from the quaternion.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.translation.approx_eq(other.translation, epsilon)
            && self.scale.approx_eq(other.scale, epsilon)
            && self.skew.approx_eq(other.skew, epsilon)
            && self.perspective.approx_eq(other.perspective, epsilon)
            && self.quaternion.is_same_rotation(other.quaternion, epsilon)
    }
}

/// Decomposes `matrix`, returning [`DEFAULT_DECOMPOSED`] if it cannot be
/// decomposed.
#[must_use]
pub fn decompose(matrix: Transform3d) -> DecomposedTransform {
    try_decompose(matrix).unwrap_or(DEFAULT_DECOMPOSED)
}

/// Decomposes `matrix`, reporting why it cannot be decomposed.
///
/// # Errors
///
/// - [`DecomposeError::ZeroHomogeneous`] if `matrix.cols[3][3] == 0`.
/// - [`DecomposeError::SingularPerspective`] if the matrix with its
///   perspective row replaced by `(0, 0, 0, 1)` has a zero determinant.
pub fn try_decompose(matrix: Transform3d) -> Result<DecomposedTransform, DecomposeError> {
    decompose_with(matrix, &mut Tracer::none())
}

/// Like [`decompose`], reporting degenerate input, absorbed reflections and
/// gimbal lock to `tracer`.
#[must_use]
pub fn decompose_traced(matrix: Transform3d, tracer: &mut Tracer<'_>) -> DecomposedTransform {
    match decompose_with(matrix, tracer) {
        Ok(result) => result,
        Err(reason) => {
            tracer.degenerate(&DegenerateEvent {
                reason,
                m44: matrix.cols[3][3],
            });
            DEFAULT_DECOMPOSED
        }
    }
}

fn decompose_with(
    matrix: Transform3d,
    tracer: &mut Tracer<'_>,
) -> Result<DecomposedTransform, DecomposeError> {
    let m44 = matrix.cols[3][3];
    if m44 == 0.0 {
        return Err(DecomposeError::ZeroHomogeneous);
    }

    let mut m = matrix;
    for entry in m.cols.iter_mut().flatten() {
        *entry /= m44;
    }

    // The matrix with its perspective row removed.
    let block = m.with_perspective(Vec4::new(0.0, 0.0, 0.0, 1.0));
    if block.determinant() == 0.0 {
        return Err(DecomposeError::SingularPerspective);
    }

    let perspective = if m.cols[0][3] != 0.0 || m.cols[1][3] != 0.0 || m.cols[2][3] != 0.0 {
        // The perspective row is `p^T · block`; solve for `p`.
        let rhs = Vec4::from(m.row(3));
        let Some(solve) = block.transpose().inverse() else {
            return Err(DecomposeError::SingularPerspective);
        };
        m = block;
        solve.transform_vec4(rhs)
    } else {
        Vec4::new(0.0, 0.0, 0.0, 1.0)
    };

    let translation = Vec3::from_xyz_of(m.cols[3]);

    // Gram-Schmidt over the upper-left 3x3 columns.
    let mut scale = Vec3::ZERO;
    let mut skew = Vec3::ZERO;
    let mut c0 = Vec3::from_xyz_of(m.cols[0]);
    let mut c1 = Vec3::from_xyz_of(m.cols[1]);
    let mut c2 = Vec3::from_xyz_of(m.cols[2]);

    scale.x = c0.length();
    c0 = c0.normalize();

    skew.set_xy(c0.dot(c1));
    c1 = c1 - c0 * skew.xy();
    scale.y = c1.length();
    c1 = c1.normalize();
    skew.set_xy(skew.xy() / scale.y);

    skew.set_xz(c0.dot(c2));
    c2 = c2 - c0 * skew.xz();
    skew.set_yz(c1.dot(c2));
    c2 = c2 - c1 * skew.yz();
    scale.z = c2.length();
    c2 = c2.normalize();
    skew.set_xz(skew.xz() / scale.z);
    skew.set_yz(skew.yz() / scale.z);

    let handedness = c0.dot(c1.cross(c2));
    if handedness < 0.0 {
        scale = -scale;
        c0 = -c0;
        c1 = -c1;
        c2 = -c2;
        tracer.reflection(&ReflectionEvent { handedness });
    }

    let basis = [c0, c1, c2];
    let (rotation, gimbal_locked) = euler_from_basis(&basis);
    if gimbal_locked {
        tracer.gimbal_lock(&GimbalLockEvent {
            pitch: rotation.y,
            roll: rotation.x,
        });
    }

    let result = DecomposedTransform {
        translation,
        scale,
        rotation,
        quaternion: Quaternion::from_basis(&basis),
        skew,
        perspective,
    };
    tracer.decomposed(&result);
    Ok(result)
}

impl Transform3d {
    /// Decomposes this matrix; see [`decompose`].
    #[inline]
    #[must_use]
    pub fn decompose(self) -> DecomposedTransform {
        decompose(self)
    }
}

impl From<Transform3d> for DecomposedTransform {
    #[inline]
    fn from(matrix: Transform3d) -> Self {
        decompose(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::PerspectiveComponents;
    use core::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    #[test]
    fn identity_decomposes_to_identity_components() {
        let d = decompose(Transform3d::IDENTITY);
        assert_eq!(d.translation, Vec3::ZERO);
        assert_eq!(d.scale, Vec3::ONE);
        assert_eq!(d.skew, Vec3::ZERO);
        assert_eq!(d.perspective, Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(d.quaternion, Quaternion::IDENTITY);
        assert_eq!(d.rotation, Vec3::ZERO);
        assert_eq!(d, DecomposedTransform::IDENTITY);
    }

    #[test]
    fn scale_is_exact() {
        let d = Transform3d::IDENTITY.scaled(Vec3::new(2.0, 3.0, 4.0)).decompose();
        assert_eq!(d.scale, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(d.quaternion, Quaternion::IDENTITY);
    }

    #[test]
    fn translation_is_read_from_last_column() {
        let d = decompose(Transform3d::from_translation(1.0, -2.0, 3.5));
        assert_eq!(d.translation, Vec3::new(1.0, -2.0, 3.5));
        assert_eq!(d.scale, Vec3::ONE);
    }

    #[test]
    fn matrix_is_normalised_by_m44() {
        let mut m = Transform3d::from_translation(2.0, 4.0, 6.0);
        for entry in m.cols.iter_mut().flatten() {
            *entry *= 2.0;
        }
        let d = decompose(m);
        assert_eq!(d.translation, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(d.scale, Vec3::ONE);
    }

    #[test]
    fn rotation_is_recovered() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), 0.75);
        let d = decompose(Transform3d::from_rotation(q));
        assert!(d.quaternion.is_same_rotation(q, EPS), "got {:?}", d.quaternion);
        assert!(
            d.rotation.approx_eq(Vec3::new(0.0, 0.0, 0.75), EPS),
            "got {:?}",
            d.rotation
        );
        assert!(d.scale.approx_eq(Vec3::ONE, EPS), "got {:?}", d.scale);
    }

    #[test]
    fn skew_is_recovered() {
        let m = Transform3d::IDENTITY.skewed(Vec3::new(0.5, -0.25, 0.125));
        let d = decompose(m);
        assert!(
            (d.skew.xy() - 0.5).abs() < EPS
                && (d.skew.xz() + 0.25).abs() < EPS
                && (d.skew.yz() - 0.125).abs() < EPS,
            "got {:?}",
            d.skew
        );
        assert!(d.scale.approx_eq(Vec3::ONE, EPS), "got {:?}", d.scale);
    }

    #[test]
    fn perspective_is_recovered() {
        let mut m = Transform3d::IDENTITY;
        m.cols[2][3] = -1.0 / 500.0;
        let d = decompose(m);
        assert!((d.perspective.m33() + 0.002).abs() < EPS, "got {:?}", d.perspective);
        assert_eq!(d.perspective.m31(), 0.0);
        assert_eq!(d.perspective.m34(), 1.0);
        assert_eq!(d.translation, Vec3::ZERO);
    }

    #[test]
    fn reflection_is_absorbed_into_scale() {
        let d = decompose(Transform3d::from_scale(-1.0, 1.0, 1.0));
        assert!(d.scale.x < 0.0, "scale.x should carry the reflection: {:?}", d.scale);

        // The rotation basis is proper (det = +1).
        let [c0, c1, c2] = d.quaternion.to_basis();
        let det = c0.dot(c1.cross(c2));
        assert!((det - 1.0).abs() < EPS, "basis determinant {det}");

        // R(x, 180°) · diag(-1, -1, -1) == diag(-1, 1, 1).
        let half_turn_x = Quaternion::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), PI);
        assert!(
            d.quaternion.is_same_rotation(half_turn_x, EPS),
            "got {:?}",
            d.quaternion
        );
        assert!(d.scale.approx_eq(Vec3::new(-1.0, -1.0, -1.0), EPS), "got {:?}", d.scale);
    }

    #[test]
    fn zero_m44_is_degenerate() {
        let mut m = Transform3d::IDENTITY;
        m.cols[3][3] = 0.0;
        assert_eq!(try_decompose(m), Err(DecomposeError::ZeroHomogeneous));
        let d = decompose(m);
        assert_eq!(d, DEFAULT_DECOMPOSED);
        assert!(d.is_degenerate());
    }

    #[test]
    fn singular_block_is_degenerate() {
        let m = Transform3d::from_scale(1.0, 0.0, 1.0);
        assert_eq!(try_decompose(m), Err(DecomposeError::SingularPerspective));
        assert!(decompose(m).is_degenerate());
    }

    #[test]
    fn gimbal_lock_still_yields_a_unit_quaternion() {
        let q = Quaternion::from_euler(Vec3::new(0.5, FRAC_PI_2, 0.2));
        let m = Transform3d::from_translation(1.0, 2.0, 3.0) * Transform3d::from_rotation(q);
        let d = decompose(m);

        assert_eq!(d.rotation.z, 0.0);
        assert!((d.rotation.y - FRAC_PI_2).abs() < 1e-7, "got {:?}", d.rotation);
        assert!((d.quaternion.length() - 1.0).abs() < EPS, "got {:?}", d.quaternion);
        assert!(d.quaternion.is_same_rotation(q, 1e-9), "got {:?}", d.quaternion);
    }

    #[test]
    fn euler_and_quaternion_agree() {
        let q = Quaternion::from_euler(Vec3::new(-0.4, 0.9, 2.2));
        let m = Transform3d::from_rotation(q).scaled(Vec3::new(1.5, 0.5, 2.0));
        let d = decompose(m);
        let from_euler = Quaternion::from_euler(d.rotation);
        assert!(
            from_euler.is_same_rotation(d.quaternion, 1e-9),
            "{from_euler:?} vs {:?}",
            d.quaternion
        );
    }

    #[test]
    fn with_helpers_keep_rotation_forms_in_step() {
        let angles = Vec3::new(0.1, 0.2, 0.3);
        let d = DecomposedTransform::IDENTITY.with_euler(angles);
        assert!(
            d.quaternion.is_same_rotation(Quaternion::from_euler(angles), EPS),
            "with_euler"
        );

        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 0.6);
        let d = DecomposedTransform::IDENTITY.with_quaternion(q);
        assert!(d.rotation.approx_eq(Vec3::new(0.0, 0.6, 0.0), EPS), "got {:?}", d.rotation);
    }

    #[test]
    fn from_impl_matches_free_function() {
        let m = Transform3d::from_translation(1.0, 2.0, 3.0).scaled(Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(DecomposedTransform::from(m), decompose(m));
    }
}
