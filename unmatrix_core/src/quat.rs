// Copyright 2026 the Unmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation quaternions.
//!
//! [`Quaternion`] is the authoritative rotation of a decomposed transform:
//! recomposition and interpolation only ever read the quaternion, never the
//! Euler angles.
//!
//! Rotation bases are passed as three column vectors (`basis[c]` is the image
//! of axis `c`), so `basis[c].{x,y,z}` is row 0, 1, 2 of column `c`.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::vector::Vec3;

/// Below this value of `cos(pitch)` the Euler extraction treats the basis as
/// gimbal-locked and pins the Z angle to zero.
pub const GIMBAL_LOCK_EPSILON: f64 = 1e-10;

/// Dot product above which [`Quaternion::slerp`] falls back to normalised
/// linear blending.
const SLERP_LINEAR_THRESHOLD: f64 = 0.9995;

/// A rotation quaternion `x·i + y·j + z·k + w`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    /// `i` component.
    pub x: f64,
    /// `j` component.
    pub y: f64,
    /// `k` component.
    pub z: f64,
    /// Scalar part.
    pub w: f64,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// All components zero. Not a rotation; used by the degenerate
    /// decomposition result.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalised first; a zero axis yields the identity.
    #[must_use]
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Self {
        let axis = axis.normalize();
        if axis == Vec3::ZERO {
            return Self::IDENTITY;
        }
        let half = angle * 0.5;
        let s = half.sin();
        Self::new(axis.x * s, axis.y * s, axis.z * s, half.cos())
    }

    /// Rotation from Euler angles in radians, applied X first, then Y, then Z
    /// (`R = Rz · Ry · Rx`).
    #[must_use]
    pub fn from_euler(angles: Vec3) -> Self {
        let (sx, cx) = ((angles.x * 0.5).sin(), (angles.x * 0.5).cos());
        let (sy, cy) = ((angles.y * 0.5).sin(), (angles.y * 0.5).cos());
        let (sz, cz) = ((angles.z * 0.5).sin(), (angles.z * 0.5).cos());
        Self::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    /// Extracts the rotation of an orthonormal, right-handed basis.
    ///
    /// Uses Shepperd's method: the branch is picked on the largest of the
    /// trace and the diagonal terms, so the divisor never approaches zero.
    #[must_use]
    pub fn from_basis(basis: &[Vec3; 3]) -> Self {
        let [c0, c1, c2] = *basis;
        let (m00, m10, m20) = (c0.x, c0.y, c0.z);
        let (m01, m11, m21) = (c1.x, c1.y, c1.z);
        let (m02, m12, m22) = (c2.x, c2.y, c2.z);
        let trace = m00 + m11 + m22;

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0; // 4w
            Self::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s)
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0; // 4x
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0; // 4y
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0; // 4z
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        }
    }

    /// The 3×3 rotation matrix of this quaternion, as three columns.
    ///
    /// The zero quaternion maps to the identity basis.
    #[must_use]
    pub fn to_basis(self) -> [Vec3; 3] {
        let Self { x, y, z, w } = self;
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, xy, xz) = (x * x2, x * y2, x * z2);
        let (yy, yz, zz) = (y * y2, y * z2, z * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);
        [
            Vec3::new(1.0 - (yy + zz), xy + wz, xz - wy),
            Vec3::new(xy - wz, 1.0 - (xx + zz), yz + wx),
            Vec3::new(xz + wy, yz - wx, 1.0 - (xx + yy)),
        ]
    }

    /// Euler angles (X, then Y, then Z) of this rotation.
    ///
    /// See [`euler_from_basis`] for the gimbal-lock convention.
    #[must_use]
    pub fn to_euler(self) -> Vec3 {
        euler_from_basis(&self.to_basis()).0
    }

    /// Four-component dot product.
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Quaternion norm.
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Scales to unit length. The zero quaternion is returned unchanged.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return self;
        }
        let inv = 1.0 / len;
        Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
    }

    /// Negates every component. Describes the same rotation.
    #[inline]
    #[must_use]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }

    /// Returns `true` if `self` and `other` describe the same rotation within
    /// `epsilon` per component, treating `q` and `-q` as equal.
    #[must_use]
    pub fn is_same_rotation(self, other: Self, epsilon: f64) -> bool {
        let close = |a: Self, b: Self| {
            (a.x - b.x).abs() <= epsilon
                && (a.y - b.y).abs() <= epsilon
                && (a.z - b.z).abs() <= epsilon
                && (a.w - b.w).abs() <= epsilon
        };
        close(self, other) || close(self, other.negate())
    }

    /// Normalised linear interpolation along the shorter arc.
    #[must_use]
    pub fn nlerp(self, to: Self, fraction: f64) -> Self {
        let to = if self.dot(to) < 0.0 { to.negate() } else { to };
        self.blend(to, 1.0 - fraction, fraction).normalize()
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// `fraction` is not clamped; values outside `[0, 1]` extrapolate along
    /// the same great circle. Nearly parallel endpoints fall back to
    /// [`nlerp`](Self::nlerp).
    #[must_use]
    pub fn slerp(self, to: Self, fraction: f64) -> Self {
        let mut cos_theta = self.dot(to);
        let to = if cos_theta < 0.0 {
            cos_theta = -cos_theta;
            to.negate()
        } else {
            to
        };

        if cos_theta > SLERP_LINEAR_THRESHOLD {
            return self.blend(to, 1.0 - fraction, fraction).normalize();
        }

        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
        let theta = sin_theta.atan2(cos_theta);
        let s0 = ((1.0 - fraction) * theta).sin() / theta.sin();
        let s1 = (fraction * theta).sin() / theta.sin();
        self.blend(to, s0, s1)
    }

    #[inline]
    fn blend(self, other: Self, a: f64, b: f64) -> Self {
        Self::new(
            self.x * a + other.x * b,
            self.y * a + other.y * b,
            self.z * a + other.z * b,
            self.w * a + other.w * b,
        )
    }
}

impl Default for Quaternion {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Euler angles of an orthonormal basis, X then Y then Z (`R = Rz · Ry · Rx`).
///
/// Returns the angles and whether the gimbal-lock branch was taken. The pitch
/// is `asin(-basis[0].z)`, evaluated as `atan2` against `cos(pitch)` so it
/// stays in range for slightly non-orthonormal input. When `cos(pitch)` falls
/// below [`GIMBAL_LOCK_EPSILON`], roll and yaw are no longer separable; the
/// yaw (Z) is pinned to zero and the whole remaining rotation is reported as
/// roll (X), read from the second column.
#[must_use]
pub fn euler_from_basis(basis: &[Vec3; 3]) -> (Vec3, bool) {
    let [c0, c1, c2] = *basis;
    let cos_y = (c0.x * c0.x + c0.y * c0.y).sqrt();
    let y = (-c0.z).atan2(cos_y);

    if cos_y > GIMBAL_LOCK_EPSILON {
        let x = c1.z.atan2(c2.z);
        let z = c0.y.atan2(c0.x);
        (Vec3::new(x, y, z), false)
    } else {
        let x = (-c2.y).atan2(c1.y);
        (Vec3::new(x, y, 0.0), true)
    }
}
