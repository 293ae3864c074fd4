// Copyright 2026 the Unmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small fixed-size vectors and named-channel accessors.
//!
//! [`Vec3`] and [`Vec4`] are plain `Copy` values. The decomposed skew and
//! perspective channels are addressed by name through [`SkewComponents`] and
//! [`PerspectiveComponents`], which are implemented both for the vector types
//! and for the raw `[f64; 3]` / `[f64; 4]` arrays used at interop boundaries.

use core::ops::{Add, Mul, Neg, Sub};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A 3-component `f64` vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a vector from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Takes the first three entries of a 4-component array.
    #[inline]
    #[must_use]
    pub(crate) const fn from_xyz_of(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// Returns the components as an array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Cross product.
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// A zero vector is returned unchanged.
    #[inline]
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 { self } else { self * (1.0 / len) }
    }

    /// Linear blend `self + (to - self) * fraction`, unclamped.
    #[inline]
    #[must_use]
    pub fn lerp(self, to: Self, fraction: f64) -> Self {
        self + (to - self) * fraction
    }

    /// Returns `true` if every component is within `epsilon` of `other`.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// A 4-component `f64` vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
    /// W component.
    pub w: f64,
}

impl Vec4 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a vector from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the components as an array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Linear blend `self + (to - self) * fraction`, unclamped.
    #[inline]
    #[must_use]
    pub fn lerp(self, to: Self, fraction: f64) -> Self {
        self + (to - self) * fraction
    }

    /// Returns `true` if every component is within `epsilon` of `other`.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
            && (self.w - other.w).abs() <= epsilon
    }
}

impl From<[f64; 4]> for Vec4 {
    #[inline]
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Vec4> for [f64; 4] {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.to_array()
    }
}

impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Mul<f64> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

/// Named access to the three shear factors of a decomposed transform.
///
/// Slot 0 is the XY shear, slot 1 XZ, slot 2 YZ.
pub trait SkewComponents {
    /// Shear of Y against X.
    fn xy(&self) -> f64;
    /// Shear of Z against X.
    fn xz(&self) -> f64;
    /// Shear of Z against Y.
    fn yz(&self) -> f64;
    /// Sets the XY shear.
    fn set_xy(&mut self, value: f64);
    /// Sets the XZ shear.
    fn set_xz(&mut self, value: f64);
    /// Sets the YZ shear.
    fn set_yz(&mut self, value: f64);
}

impl SkewComponents for Vec3 {
    #[inline]
    fn xy(&self) -> f64 {
        self.x
    }
    #[inline]
    fn xz(&self) -> f64 {
        self.y
    }
    #[inline]
    fn yz(&self) -> f64 {
        self.z
    }
    #[inline]
    fn set_xy(&mut self, value: f64) {
        self.x = value;
    }
    #[inline]
    fn set_xz(&mut self, value: f64) {
        self.y = value;
    }
    #[inline]
    fn set_yz(&mut self, value: f64) {
        self.z = value;
    }
}

impl SkewComponents for [f64; 3] {
    #[inline]
    fn xy(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn xz(&self) -> f64 {
        self[1]
    }
    #[inline]
    fn yz(&self) -> f64 {
        self[2]
    }
    #[inline]
    fn set_xy(&mut self, value: f64) {
        self[0] = value;
    }
    #[inline]
    fn set_xz(&mut self, value: f64) {
        self[1] = value;
    }
    #[inline]
    fn set_yz(&mut self, value: f64) {
        self[2] = value;
    }
}

/// Named access to the perspective row of a decomposed transform.
///
/// The names follow the conventional `m31`..`m34` labelling of the
/// perspective coefficients (slots 0 through 3).
pub trait PerspectiveComponents {
    /// Perspective coefficient applied to X.
    fn m31(&self) -> f64;
    /// Perspective coefficient applied to Y.
    fn m32(&self) -> f64;
    /// Perspective coefficient applied to Z.
    fn m33(&self) -> f64;
    /// Homogeneous scale.
    fn m34(&self) -> f64;
    /// Sets `m31`.
    fn set_m31(&mut self, value: f64);
    /// Sets `m32`.
    fn set_m32(&mut self, value: f64);
    /// Sets `m33`.
    fn set_m33(&mut self, value: f64);
    /// Sets `m34`.
    fn set_m34(&mut self, value: f64);
}

impl PerspectiveComponents for Vec4 {
    #[inline]
    fn m31(&self) -> f64 {
        self.x
    }
    #[inline]
    fn m32(&self) -> f64 {
        self.y
    }
    #[inline]
    fn m33(&self) -> f64 {
        self.z
    }
    #[inline]
    fn m34(&self) -> f64 {
        self.w
    }
    #[inline]
    fn set_m31(&mut self, value: f64) {
        self.x = value;
    }
    #[inline]
    fn set_m32(&mut self, value: f64) {
        self.y = value;
    }
    #[inline]
    fn set_m33(&mut self, value: f64) {
        self.z = value;
    }
    #[inline]
    fn set_m34(&mut self, value: f64) {
        self.w = value;
    }
}

impl PerspectiveComponents for [f64; 4] {
    #[inline]
    fn m31(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn m32(&self) -> f64 {
        self[1]
    }
    #[inline]
    fn m33(&self) -> f64 {
        self[2]
    }
    #[inline]
    fn m34(&self) -> f64 {
        self[3]
    }
    #[inline]
    fn set_m31(&mut self, value: f64) {
        self[0] = value;
    }
    #[inline]
    fn set_m32(&mut self, value: f64) {
        self[1] = value;
    }
    #[inline]
    fn set_m33(&mut self, value: f64) {
        self[2] = value;
    }
    #[inline]
    fn set_m34(&mut self, value: f64) {
        self[3] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_basis_axes() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn normalize_zero_is_noop() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        let n = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-12, "got length {}", n.length());
    }

    #[test]
    fn lerp_extrapolates() {
        let a = Vec3::ZERO;
        let b = Vec3::new(10.0, 0.0, 0.0);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(a.lerp(b, 1.5), Vec3::new(15.0, 0.0, 0.0));
        assert_eq!(a.lerp(b, -1.0), Vec3::new(-10.0, 0.0, 0.0));
    }

    #[test]
    fn skew_names_map_to_slots() {
        let mut v = Vec3::ZERO;
        v.set_xy(1.0);
        v.set_xz(2.0);
        v.set_yz(3.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);

        let arr: [f64; 3] = v.into();
        assert_eq!((arr.xy(), arr.xz(), arr.yz()), (1.0, 2.0, 3.0));
    }

    #[test]
    fn perspective_names_map_to_slots() {
        let mut p = [0.0_f64; 4];
        p.set_m31(0.1);
        p.set_m32(0.2);
        p.set_m33(0.3);
        p.set_m34(1.0);
        let v = Vec4::from(p);
        assert_eq!((v.m31(), v.m32(), v.m33(), v.m34()), (0.1, 0.2, 0.3, 1.0));
    }
}
