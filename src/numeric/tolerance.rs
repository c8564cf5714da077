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

use crate::numeric::scalar::Scalar;

/// Relative epsilon policy shared by every near-zero and near-equal test.
///
/// Comparisons scale with the magnitude of the operands, so the same policy
/// works for unit-sized inputs and for coordinates in the thousands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T: Scalar> {
    relative: T,
}

impl<T: Scalar> Tolerance<T> {
    pub fn new(relative: T) -> Self {
        Self {
            relative: relative.abs(),
        }
    }

    #[inline]
    pub fn relative(&self) -> T {
        self.relative
    }

    /// `|a - b| <= rel * max(|a|, |b|)`
    #[inline]
    pub fn approx_eq(&self, a: T, b: T) -> bool {
        (a - b).abs() <= self.relative * a.abs().max(b.abs())
    }

    /// `|x| <= rel * |scale|`
    #[inline]
    pub fn is_negligible(&self, x: T, scale: T) -> bool {
        x.abs() <= self.relative * scale.abs()
    }
}

impl<T: Scalar> Default for Tolerance<T> {
    fn default() -> Self {
        Self::new(T::default_tolerance())
    }
}
