// Copyright 2026 the Unmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single failure mode of decomposition.

use core::fmt;

/// Why a matrix could not be decomposed.
///
/// Only [`try_decompose`](crate::decompose::try_decompose) returns this;
/// [`decompose`](crate::decompose::decompose) maps both cases to
/// [`DEFAULT_DECOMPOSED`](crate::decompose::DEFAULT_DECOMPOSED).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecomposeError {
    /// The bottom-right element is zero, so the matrix cannot be normalised.
    ZeroHomogeneous,
    /// The matrix with its perspective row removed has a zero determinant.
    SingularPerspective,
}

impl fmt::Display for DecomposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroHomogeneous => f.write_str("matrix has a zero homogeneous scale (m44 == 0)"),
            Self::SingularPerspective => f.write_str("perspective block is singular"),
        }
    }
}

impl core::error::Error for DecomposeError {}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_cause() {
        assert!(
            DecomposeError::ZeroHomogeneous.to_string().contains("m44"),
            "zero homogeneous message"
        );
        assert!(
            DecomposeError::SingularPerspective.to_string().contains("singular"),
            "singular perspective message"
        );
    }
}
