// Copyright 2026 the Unmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decomposition, recomposition and interpolation of 4×4 transform matrices.
//!
//! `unmatrix_core` splits a homogeneous 3D transform into translation, scale,
//! rotation (as a quaternion and as Euler angles), skew and perspective, and
//! builds the matrix back from those parts. Blending two transforms component
//! by component gives interpolation that keeps rotations rigid, which a
//! straight element-wise matrix lerp does not. The crate is `no_std` and does
//! not allocate.
//!
//! # Architecture
//!
//! ```text
//!   Transform3d ──► decompose() ──► DecomposedTransform
//!        ▲                               │
//!        │                               ▼
//!   recompose() ◄──────────────── lerp(from, to, t)
//! ```
//!
//! **[`transform`]**: Column-major [`Transform3d`](transform::Transform3d)
//! with the matrix algebra the pipeline needs (determinant, inverse,
//! component-wise post-multiplication) and `kurbo::Affine` interop.
//!
//! **[`vector`]**: [`Vec3`](vector::Vec3) and [`Vec4`](vector::Vec4), plus
//! named accessors for skew (`xy`, `xz`, `yz`) and perspective
//! (`m31`..`m34`) components.
//!
//! **[`quat`]**: Unit [`Quaternion`](quat::Quaternion) with basis and Euler
//! conversions, `slerp` and `nlerp`.
//!
//! **[`decompose`]**: [`DecomposedTransform`](decompose::DecomposedTransform)
//! and the decomposition itself, in plain, fallible and traced forms.
//!
//! **[`recompose`]**: The inverse of decomposition.
//!
//! **[`interpolate`]**: Component-wise blending of decompositions, and
//! matrix-to-matrix interpolation through them.
//!
//! **[`error`]**: [`DecomposeError`](error::DecomposeError).
//!
//! **[`trace`]**: [`DecomposeSink`](trace::DecomposeSink) trait and event
//! types for decomposition diagnostics, with a zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Example
//!
//! ```
//! use unmatrix_core::decompose::decompose;
//! use unmatrix_core::interpolate::lerp;
//! use unmatrix_core::transform::Transform3d;
//! use unmatrix_core::vector::Vec3;
//!
//! let from = decompose(Transform3d::IDENTITY);
//! let to = decompose(Transform3d::from_translation(10.0, 0.0, 0.0));
//! let mid = lerp(&from, &to, 0.5);
//! assert_eq!(mid.translation, Vec3::new(5.0, 0.0, 0.0));
//! assert_eq!(mid.recompose(), Transform3d::from_translation(5.0, 0.0, 0.0));
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod decompose;
pub mod error;
pub mod interpolate;
pub mod quat;
pub mod recompose;
pub mod trace;
pub mod transform;
pub mod vector;
