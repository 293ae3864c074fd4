// Copyright 2026 the Unmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interpolation between decomposed transforms.
//!
//! Translation, scale, Euler rotation, skew and perspective blend linearly as
//! `from + (to - from) * fraction`. The quaternion blends on the unit sphere
//! (see [`RotationBlend`]) so the result stays a valid rotation. `fraction`
//! is never clamped: values outside `[0, 1]` extrapolate.

use crate::decompose::{DecomposedTransform, decompose};
use crate::recompose::recompose;
use crate::transform::Transform3d;

/// How the quaternion component is blended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RotationBlend {
    /// Spherical linear interpolation: constant angular velocity.
    #[default]
    Slerp,
    /// Normalised linear interpolation: cheaper, slightly uneven speed.
    Nlerp,
}

/// Interpolates every component of `from` towards `to` by `fraction`, using
/// [`RotationBlend::Slerp`] for the quaternion.
#[must_use]
pub fn lerp(from: &DecomposedTransform, to: &DecomposedTransform, fraction: f64) -> DecomposedTransform {
    lerp_with(from, to, fraction, RotationBlend::Slerp)
}

/// Like [`lerp`], with an explicit quaternion blend.
#[must_use]
pub fn lerp_with(
    from: &DecomposedTransform,
    to: &DecomposedTransform,
    fraction: f64,
    blend: RotationBlend,
) -> DecomposedTransform {
    let quaternion = match blend {
        RotationBlend::Slerp => from.quaternion.slerp(to.quaternion, fraction),
        RotationBlend::Nlerp => from.quaternion.nlerp(to.quaternion, fraction),
    };
    DecomposedTransform {
        translation: from.translation.lerp(to.translation, fraction),
        scale: from.scale.lerp(to.scale, fraction),
        rotation: from.rotation.lerp(to.rotation, fraction),
        quaternion,
        skew: from.skew.lerp(to.skew, fraction),
        perspective: from.perspective.lerp(to.perspective, fraction),
    }
}

/// Interpolates between two matrices by decomposing both, interpolating the
/// components, and recomposing.
///
/// An endpoint that cannot be decomposed contributes
/// [`DEFAULT_DECOMPOSED`](crate::decompose::DEFAULT_DECOMPOSED); callers that
/// need defined behaviour for such input should check it first with
/// [`try_decompose`](crate::decompose::try_decompose).
#[must_use]
pub fn lerp_matrix(from: Transform3d, to: Transform3d, fraction: f64) -> Transform3d {
    recompose(&lerp(&decompose(from), &decompose(to), fraction))
}

impl DecomposedTransform {
    /// Interpolates towards `to`; see [`lerp`].
    #[inline]
    #[must_use]
    pub fn lerp(&self, to: &Self, fraction: f64) -> Self {
        lerp(self, to, fraction)
    }
}

impl Transform3d {
    /// Interpolates towards `to` through decomposition; see [`lerp_matrix`].
    #[inline]
    #[must_use]
    pub fn lerp(self, to: Self, fraction: f64) -> Self {
        lerp_matrix(self, to, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::DEFAULT_DECOMPOSED;
    use crate::quat::Quaternion;
    use crate::vector::{Vec3, Vec4};
    use core::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-12;

    fn sample_a() -> DecomposedTransform {
        DecomposedTransform {
            translation: Vec3::new(1.0, 2.0, 3.0),
            scale: Vec3::new(1.0, 2.0, 0.5),
            rotation: Vec3::new(0.0, 0.0, 0.25),
            quaternion: Quaternion::from_euler(Vec3::new(0.0, 0.0, 0.25)),
            skew: Vec3::new(0.1, 0.0, 0.0),
            perspective: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    fn sample_b() -> DecomposedTransform {
        DecomposedTransform {
            translation: Vec3::new(-4.0, 0.0, 8.0),
            scale: Vec3::new(3.0, 1.0, 1.0),
            rotation: Vec3::new(0.5, -0.2, 1.0),
            quaternion: Quaternion::from_euler(Vec3::new(0.5, -0.2, 1.0)),
            skew: Vec3::new(0.0, 0.3, -0.2),
            perspective: Vec4::new(0.0, 0.0, -0.001, 1.0),
        }
    }

    #[test]
    fn endpoints_are_reproduced() {
        let (a, b) = (sample_a(), sample_b());
        let start = lerp(&a, &b, 0.0);
        let end = lerp(&a, &b, 1.0);
        assert!(start.approx_eq(&a, EPS), "t = 0 gave {start:?}");
        assert!(end.approx_eq(&b, EPS), "t = 1 gave {end:?}");
        assert!(start.rotation.approx_eq(a.rotation, EPS), "t = 0 euler");
        assert!(end.rotation.approx_eq(b.rotation, EPS), "t = 1 euler");
    }

    #[test]
    fn translation_midpoint() {
        let a = DecomposedTransform::IDENTITY;
        let mut b = DecomposedTransform::IDENTITY;
        b.translation = Vec3::new(10.0, 0.0, 0.0);
        assert_eq!(lerp(&a, &b, 0.5).translation, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn fraction_is_not_clamped() {
        let a = DecomposedTransform::IDENTITY;
        let mut b = DecomposedTransform::IDENTITY;
        b.scale = Vec3::new(2.0, 2.0, 2.0);
        assert_eq!(lerp(&a, &b, 2.0).scale, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(lerp(&a, &b, -1.0).scale, Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn quaternion_stays_unit() {
        let (a, b) = (sample_a(), sample_b());
        for blend in [RotationBlend::Slerp, RotationBlend::Nlerp] {
            for i in 0..=10 {
                let q = lerp_with(&a, &b, f64::from(i) / 10.0, blend).quaternion;
                assert!((q.length() - 1.0).abs() < EPS, "{blend:?} at {i}: {q:?}");
            }
        }
    }

    #[test]
    fn rotation_midpoint_is_half_angle() {
        let a = DecomposedTransform::IDENTITY;
        let b = DecomposedTransform::IDENTITY.with_quaternion(Quaternion::from_axis_angle(
            Vec3::new(0.0, 0.0, 1.0),
            FRAC_PI_2,
        ));
        let mid = lerp(&a, &b, 0.5).quaternion;
        let expected = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2 / 2.0);
        assert!(mid.is_same_rotation(expected, EPS), "got {mid:?}");
    }

    #[test]
    fn matrix_lerp_endpoints() {
        let from = Transform3d::from_translation(1.0, 0.0, 0.0) * Transform3d::from_rotation_z(0.3);
        let to = Transform3d::from_translation(0.0, 5.0, 0.0) * Transform3d::from_scale(2.0, 2.0, 1.0);
        assert!(lerp_matrix(from, to, 0.0).approx_eq(&from, 1e-9), "t = 0");
        assert!(from.lerp(to, 1.0).approx_eq(&to, 1e-9), "t = 1");
    }

    #[test]
    fn matrix_lerp_midpoint_translation() {
        let from = Transform3d::IDENTITY;
        let to = Transform3d::from_translation(10.0, 0.0, 0.0);
        let mid = lerp_matrix(from, to, 0.5);
        assert!(
            mid.approx_eq(&Transform3d::from_translation(5.0, 0.0, 0.0), EPS),
            "got {mid:?}"
        );
    }

    #[test]
    fn degenerate_endpoint_flows_through() {
        let mut singular = Transform3d::IDENTITY;
        singular.cols[3][3] = 0.0;
        let out = lerp_matrix(Transform3d::IDENTITY, singular, 1.0);
        assert!(out.approx_eq(&recompose(&DEFAULT_DECOMPOSED), EPS), "got {out:?}");
        assert!(!lerp_matrix(Transform3d::IDENTITY, singular, 0.5).is_nan());
    }
}
