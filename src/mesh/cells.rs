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

use std::fmt;

/// Sentinel index meaning "no point".
pub const NO_POINT: usize = usize::MAX;

/// Unordered pair of point indices, stored with the smaller index first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        if i < j { Edge { a: i, b: j } } else { Edge { a: j, b: i } }
    }

    #[inline]
    pub fn a(&self) -> usize {
        self.a
    }

    #[inline]
    pub fn b(&self) -> usize {
        self.b
    }

    #[inline]
    pub fn points(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.a == NO_POINT || self.b == NO_POINT
    }

    #[inline]
    pub fn contains_point(&self, p: usize) -> bool {
        p != NO_POINT && (self.a == p || self.b == p)
    }
}

impl Default for Edge {
    fn default() -> Self {
        Edge {
            a: NO_POINT,
            b: NO_POINT,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.a, self.b) {
            (NO_POINT, _) => write!(f, "(_,_)"),
            (a, NO_POINT) => write!(f, "({a},_)"),
            (a, b) => write!(f, "({a},{b})"),
        }
    }
}

/// Unordered triple of point indices, stored ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triangle {
    a: usize,
    b: usize,
    c: usize,
}

impl Triangle {
    #[inline]
    pub fn new(i: usize, j: usize, k: usize) -> Self {
        let mut v = [i, j, k];
        v.sort_unstable();
        Triangle {
            a: v[0],
            b: v[1],
            c: v[2],
        }
    }

    #[inline]
    pub fn points(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.a, self.c),
            Edge::new(self.b, self.c),
        ]
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.c == NO_POINT
    }

    #[inline]
    pub fn contains_point(&self, p: usize) -> bool {
        p != NO_POINT && (self.a == p || self.b == p || self.c == p)
    }

    #[inline]
    pub fn contains(&self, edge: Edge) -> bool {
        self.opposite_point(edge).is_some()
    }

    /// The vertex not on `edge`, or `None` if `edge` is not a side of this triangle.
    #[inline]
    pub fn opposite_point(&self, edge: Edge) -> Option<usize> {
        if edge.is_undefined() {
            return None;
        }
        if self.a == edge.a {
            if self.b == edge.b {
                return Some(self.c);
            }
            if self.c == edge.b {
                return Some(self.b);
            }
        } else if self.b == edge.a && self.c == edge.b {
            return Some(self.a);
        }
        None
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Triangle {
            a: NO_POINT,
            b: NO_POINT,
            c: NO_POINT,
        }
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_is_canonical() {
        assert_eq!(Edge::new(5, 2), Edge::new(2, 5));
        assert_eq!(Edge::new(5, 2).points(), (2, 5));
    }

    #[test]
    fn triangle_opposite_point() {
        let t = Triangle::new(7, 1, 4);
        assert_eq!(t.points(), [1, 4, 7]);
        assert_eq!(t.opposite_point(Edge::new(1, 4)), Some(7));
        assert_eq!(t.opposite_point(Edge::new(7, 1)), Some(4));
        assert_eq!(t.opposite_point(Edge::new(4, 7)), Some(1));
        assert_eq!(t.opposite_point(Edge::new(1, 2)), None);
        assert_eq!(t.opposite_point(Edge::default()), None);
    }

    #[test]
    fn default_cells_are_undefined() {
        assert!(Edge::default().is_undefined());
        assert!(Triangle::default().is_undefined());
        assert_eq!(Edge::default().to_string(), "(_,_)");
        assert!(Edge::new(3, NO_POINT).is_undefined());
        assert_eq!(Edge::new(3, NO_POINT).to_string(), "(3,_)");
    }
}
