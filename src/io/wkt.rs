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

//! Well-known-text rendering of triangulations.

use std::fmt;
use std::io::{self, Write};

use crate::numeric::Scalar;
use crate::operations::triangulation::Triangulation;

/// `Display` adapter writing a triangulation as a WKT `MULTIPOLYGON`.
///
/// Triangles appear in canonical order, each as a closed four-vertex ring.
pub struct Wkt<'a, T: Scalar>(pub &'a Triangulation<T>);

impl<T: Scalar> fmt::Display for Wkt<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let triangles = self.0.triangles();
        if triangles.is_empty() {
            return f.write_str("MULTIPOLYGON EMPTY");
        }
        let pts = self.0.points();
        f.write_str("MULTIPOLYGON(")?;
        for (i, tri) in triangles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let [a, b, c] = tri.points();
            write!(f, "(({}, {}, {}, {}))", pts[a], pts[b], pts[c], pts[a])?;
        }
        f.write_str(")")
    }
}

pub fn to_wkt<T: Scalar>(triangulation: &Triangulation<T>) -> String {
    Wkt(triangulation).to_string()
}

/// Writes one WKT line for `triangulation`.
pub fn write_wkt<T: Scalar, W: Write>(out: &mut W, triangulation: &Triangulation<T>) -> io::Result<()> {
    writeln!(out, "{}", Wkt(triangulation))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::geometry::PointSet;

    #[test]
    fn single_triangle() {
        let pts = PointSet::from_xy([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        let t = Triangulation::build(Arc::new(pts)).unwrap();
        assert_eq!(to_wkt(&t), "MULTIPOLYGON(((0 0, 0 1, 1 0, 0 0)))");
    }

    #[test]
    fn empty_triangulation() {
        let pts = PointSet::from_xy([(0.0, 0.0), (1.0, 0.5)]).unwrap();
        let t = Triangulation::build(Arc::new(pts)).unwrap();
        assert_eq!(to_wkt(&t), "MULTIPOLYGON EMPTY");
    }

    #[test]
    fn write_appends_newline() {
        let pts = PointSet::from_xy([(0.0, 0.0), (2.5, 0.0), (0.0, 1.0)]).unwrap();
        let t = Triangulation::build(Arc::new(pts)).unwrap();
        let mut buf = Vec::new();
        write_wkt(&mut buf, &t).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "MULTIPOLYGON(((0 0, 0 1, 2.5 0, 0 0)))\n"
        );
    }
}
