// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::fmt::{Debug, Display};

use num_traits::Float;

/// Floating-point coordinate type used by every geometric routine in the crate.
pub trait Scalar: Float + Debug + Display + Default + Send + Sync + 'static {
    /// Relative tolerance used when a triangulation is not given one explicitly.
    fn default_tolerance() -> Self;

    /// Bit pattern fed to hashers. `-0.0` and `0.0` produce the same bits.
    fn hash_bits(self) -> u64;

    #[inline]
    fn half() -> Self {
        Self::one() / (Self::one() + Self::one())
    }
}

impl Scalar for f64 {
    #[inline]
    fn default_tolerance() -> Self {
        1e-10
    }

    #[inline]
    fn hash_bits(self) -> u64 {
        if self == 0.0 { 0 } else { self.to_bits() }
    }
}

impl Scalar for f32 {
    #[inline]
    fn default_tolerance() -> Self {
        1e-5
    }

    #[inline]
    fn hash_bits(self) -> u64 {
        if self == 0.0 { 0 } else { self.to_bits() as u64 }
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn signed_zero_hashes_identically() {
        assert_eq!((-0.0f64).hash_bits(), 0.0f64.hash_bits());
        assert_eq!((-0.0f32).hash_bits(), 0.0f32.hash_bits());
    }

    #[test]
    fn half_is_exact() {
        assert_eq!(f64::half(), 0.5);
        assert_eq!(f32::half(), 0.5);
    }
}
