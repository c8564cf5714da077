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

use crate::geometry::Point2;
use crate::kernel::orientation::orient2d;
use crate::numeric::{Scalar, Tolerance};

/// Unsigned area of triangle `(a, b, c)`.
#[inline]
pub fn triangle_area<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    orient2d(a, b, c).abs() * T::half()
}

/// Whether the quadrilateral `a, c, b, d` with diagonal `(a, b)` can be
/// re-split along `(c, d)`.
///
/// Both splits must cover the same area and none of the four sub-triangles
/// may be degenerate. Together this rejects reflex and collinear corners.
pub fn is_convex_quad<T: Scalar>(
    a: &Point2<T>,
    c: &Point2<T>,
    b: &Point2<T>,
    d: &Point2<T>,
    tol: &Tolerance<T>,
) -> bool {
    let abc = triangle_area(a, b, c);
    let abd = triangle_area(a, b, d);
    let cda = triangle_area(c, d, a);
    let cdb = triangle_area(c, d, b);

    let along_ab = abc + abd;
    let along_cd = cda + cdb;
    if !tol.approx_eq(along_ab, along_cd) {
        return false;
    }

    let scale = along_ab.max(along_cd);
    [abc, abd, cda, cdb]
        .into_iter()
        .all(|area| !tol.is_negligible(area, scale))
}
