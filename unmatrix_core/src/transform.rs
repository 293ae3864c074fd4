// Copyright 2026 the Unmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-major 4×4 homogeneous transform.
//!
//! [`Transform3d`] carries exactly the algebra the decomposer and recomposer
//! need (multiply, transpose, determinant, inverse) plus the five component
//! operators that recomposition chains together. Points are column vectors:
//! translation lives in column 3 and the perspective coefficients in row 3.

use core::ops::Mul;

use crate::quat::Quaternion;
use crate::vector::{Vec3, Vec4};

/// A column-major 4×4 transform stored as `[[f64; 4]; 4]`.
///
/// Each inner array is one *column* of the matrix, so `cols[c][r]` is the
/// entry at row `r`, column `c`. This matches the memory layout used by GPU
/// APIs and Core Animation's `CATransform3D`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
    /// Four columns, each a 4-element array `[x, y, z, w]`.
    pub cols: [[f64; 4]; 4],
}

/// The twelve 2×2 minors shared by [`Transform3d::determinant`] and
/// [`Transform3d::inverse`].
struct Minors {
    s: [f64; 6],
    c: [f64; 6],
}

impl Minors {
    fn of(a: &[[f64; 4]; 4]) -> Self {
        Self {
            s: [
                a[0][0] * a[1][1] - a[1][0] * a[0][1],
                a[0][0] * a[1][2] - a[1][0] * a[0][2],
                a[0][0] * a[1][3] - a[1][0] * a[0][3],
                a[0][1] * a[1][2] - a[1][1] * a[0][2],
                a[0][1] * a[1][3] - a[1][1] * a[0][3],
                a[0][2] * a[1][3] - a[1][2] * a[0][3],
            ],
            c: [
                a[2][0] * a[3][1] - a[3][0] * a[2][1],
                a[2][0] * a[3][2] - a[3][0] * a[2][2],
                a[2][0] * a[3][3] - a[3][0] * a[2][3],
                a[2][1] * a[3][2] - a[3][1] * a[2][2],
                a[2][1] * a[3][3] - a[3][1] * a[2][3],
                a[2][2] * a[3][3] - a[3][2] * a[2][3],
            ],
        }
    }

    fn determinant(&self) -> f64 {
        let Self { s, c } = self;
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}

impl Transform3d {
    /// The 4×4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a transform from four column arrays.
    #[inline]
    #[must_use]
    pub const fn from_cols(col0: [f64; 4], col1: [f64; 4], col2: [f64; 4], col3: [f64; 4]) -> Self {
        Self {
            cols: [col0, col1, col2, col3],
        }
    }

    /// Creates a transform from a column-major 2-D array.
    #[inline]
    #[must_use]
    pub const fn from_cols_array_2d(cols: [[f64; 4]; 4]) -> Self {
        Self { cols }
    }

    /// Creates a transform from a row-major 2-D array (`rows[r][c]`).
    #[inline]
    #[must_use]
    pub const fn from_rows_array_2d(rows: [[f64; 4]; 4]) -> Self {
        Self { cols: rows }.transpose()
    }

    /// Returns the columns as a 2-D array.
    #[inline]
    #[must_use]
    pub const fn to_cols_array_2d(self) -> [[f64; 4]; 4] {
        self.cols
    }

    /// Returns column `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub const fn col(self, i: usize) -> [f64; 4] {
        self.cols[i]
    }

    /// Returns row `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub const fn row(self, i: usize) -> [f64; 4] {
        [self.cols[0][i], self.cols[1][i], self.cols[2][i], self.cols[3][i]]
    }

    /// Creates a pure translation transform.
    #[inline]
    #[must_use]
    pub const fn from_translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [x, y, z, 1.0],
            ],
        }
    }

    /// Creates a non-uniform scale transform.
    #[inline]
    #[must_use]
    pub const fn from_scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            cols: [
                [sx, 0.0, 0.0, 0.0],
                [0.0, sy, 0.0, 0.0],
                [0.0, 0.0, sz, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a rotation around the Z axis (radians).
    #[inline]
    #[must_use]
    pub fn from_rotation_z(radians: f64) -> Self {
        Self::from_rotation(Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), radians))
    }

    /// Creates the rotation described by `q`.
    #[must_use]
    pub fn from_rotation(q: Quaternion) -> Self {
        let [c0, c1, c2] = q.to_basis();
        Self {
            cols: [
                [c0.x, c0.y, c0.z, 0.0],
                [c1.x, c1.y, c1.z, 0.0],
                [c2.x, c2.y, c2.z, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Returns the transpose.
    #[inline]
    #[must_use]
    pub const fn transpose(self) -> Self {
        let c = &self.cols;
        Self {
            cols: [
                [c[0][0], c[1][0], c[2][0], c[3][0]],
                [c[0][1], c[1][1], c[2][1], c[3][1]],
                [c[0][2], c[1][2], c[2][2], c[3][2]],
                [c[0][3], c[1][3], c[2][3], c[3][3]],
            ],
        }
    }

    /// Returns the determinant.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        Minors::of(&self.cols).determinant()
    }

    /// Returns the inverse, or `None` if the determinant is exactly zero.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let a = &self.cols;
        let m = Minors::of(a);
        let det = m.determinant();
        if det == 0.0 {
            return None;
        }
        let d = 1.0 / det;
        let Minors { s, c } = m;

        // Applying the cofactor expansion to the column arrays as if they
        // were rows yields the inverse of the transpose, which is the
        // transpose of the inverse: exactly the column-major inverse.
        Some(Self {
            cols: [
                [
                    (a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3]) * d,
                    (-a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3]) * d,
                    (a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3]) * d,
                    (-a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3]) * d,
                ],
                [
                    (-a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1]) * d,
                    (a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1]) * d,
                    (-a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1]) * d,
                    (a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1]) * d,
                ],
                [
                    (a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0]) * d,
                    (-a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0]) * d,
                    (a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0]) * d,
                    (-a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0]) * d,
                ],
                [
                    (-a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0]) * d,
                    (a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0]) * d,
                    (-a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0]) * d,
                    (a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0]) * d,
                ],
            ],
        })
    }

    /// Multiplies a column vector: `self · v`.
    #[must_use]
    pub fn transform_vec4(&self, v: Vec4) -> Vec4 {
        let c = &self.cols;
        let [x, y, z, w] = v.to_array();
        let mut out = [0.0_f64; 4];
        for (r, slot) in out.iter_mut().enumerate() {
            *slot = c[0][r] * x + c[1][r] * y + c[2][r] * z + c[3][r] * w;
        }
        Vec4::from(out)
    }

    // --- component operators -------------------------------------------

    /// Right-multiplies by a translation of `v`.
    #[must_use]
    pub fn translated(self, v: Vec3) -> Self {
        self * Self::from_translation(v.x, v.y, v.z)
    }

    /// Scales columns 0, 1, 2 by `v.x`, `v.y`, `v.z` (right-multiplication by
    /// a diagonal scale).
    #[must_use]
    pub fn scaled(mut self, v: Vec3) -> Self {
        for (col, factor) in self.cols.iter_mut().zip(v.to_array()) {
            for entry in col.iter_mut() {
                *entry *= factor;
            }
        }
        self
    }

    /// Right-multiplies by the rotation of `q`.
    #[must_use]
    pub fn rotated(self, q: Quaternion) -> Self {
        self * Self::from_rotation(q)
    }

    /// Right-multiplies by one single-shear matrix per non-zero component of
    /// `skew`, in the order YZ, XZ, XY.
    ///
    /// `skew` is `(xy, xz, yz)`. Zero components are skipped rather than
    /// multiplied in as identities, so values produced by the decomposer
    /// recompose bit-for-bit along the same path.
    #[must_use]
    pub fn skewed(self, skew: Vec3) -> Self {
        let mut out = self;
        // (value, column, row) of the off-diagonal entry.
        let shears = [(skew.z, 2, 1), (skew.y, 2, 0), (skew.x, 1, 0)];
        for (value, c, r) in shears {
            if value != 0.0 {
                let mut shear = Self::IDENTITY;
                shear.cols[c][r] = value;
                out = out * shear;
            }
        }
        out
    }

    /// Overwrites row 3 with the perspective coefficients `v`.
    ///
    /// This is a direct assignment, not a multiplication.
    #[must_use]
    pub const fn with_perspective(mut self, v: Vec4) -> Self {
        self.cols[0][3] = v.x;
        self.cols[1][3] = v.y;
        self.cols[2][3] = v.z;
        self.cols[3][3] = v.w;
        self
    }

    // --- kurbo interop ---------------------------------------------------

    /// Returns the 2-D affine part if this transform only acts in the XY
    /// plane (no Z coupling, no perspective), else `None`.
    #[must_use]
    pub fn to_affine(&self) -> Option<kurbo::Affine> {
        let c = &self.cols;
        let planar = c[0][2] == 0.0
            && c[0][3] == 0.0
            && c[1][2] == 0.0
            && c[1][3] == 0.0
            && c[2] == [0.0, 0.0, 1.0, 0.0]
            && c[3][2] == 0.0
            && c[3][3] == 1.0;
        planar.then(|| kurbo::Affine::new([c[0][0], c[0][1], c[1][0], c[1][1], c[3][0], c[3][1]]))
    }

    // --- predicates ------------------------------------------------------

    /// Returns `true` if every entry is within `epsilon` of `other`'s.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.cols
            .iter()
            .flatten()
            .zip(other.cols.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Is this transform [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        let mut i = 0;
        while i < 16 {
            if !self.cols[i / 4][i % 4].is_finite() {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Is this transform [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        let mut i = 0;
        while i < 16 {
            if self.cols[i / 4][i % 4].is_nan() {
                return true;
            }
            i += 1;
        }
        false
    }
}

impl Default for Transform3d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform3d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 4]; 4];
        let mut j = 0;
        while j < 4 {
            let mut i = 0;
            while i < 4 {
                out[j][i] =
                    a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
                i += 1;
            }
            j += 1;
        }
        Self { cols: out }
    }
}

impl From<kurbo::Affine> for Transform3d {
    fn from(affine: kurbo::Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self::from_cols(
            [a, b, 0.0, 0.0],
            [c, d, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [e, f, 0.0, 1.0],
        )
    }
}
