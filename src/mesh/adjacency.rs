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

use smallvec::SmallVec;

use crate::mesh::cells::{Edge, Triangle};

/// Triangles incident to one edge: one on the hull, two inside.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeAdjacency {
    triangles: SmallVec<[Triangle; 2]>,
}

impl EdgeAdjacency {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.triangles.len() == 2
    }

    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.triangles.len() == 1
    }

    /// Attaches `t`; refuses duplicates and a third triangle.
    pub fn insert(&mut self, t: Triangle) -> bool {
        if self.triangles.len() >= 2 || self.triangles.contains(&t) {
            return false;
        }
        self.triangles.push(t);
        true
    }

    pub fn remove(&mut self, t: Triangle) -> bool {
        match self.triangles.iter().position(|&x| x == t) {
            Some(pos) => {
                self.triangles.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn replace(&mut self, old: Triangle, new: Triangle) -> bool {
        match self.triangles.iter_mut().find(|x| **x == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    /// Apexes of the two incident triangles across `edge`.
    pub fn opposite_points(&self, edge: Edge) -> Option<(usize, usize)> {
        match self.triangles.as_slice() {
            [t0, t1] => Some((t0.opposite_point(edge)?, t1.opposite_point(edge)?)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_at_most_two() {
        let mut adj = EdgeAdjacency::new();
        assert!(adj.insert(Triangle::new(0, 1, 2)));
        assert!(!adj.insert(Triangle::new(0, 1, 2)));
        assert!(adj.is_boundary());
        assert!(adj.insert(Triangle::new(0, 1, 3)));
        assert!(!adj.insert(Triangle::new(0, 1, 4)));
        assert!(adj.is_internal());
        assert_eq!(adj.opposite_points(Edge::new(0, 1)), Some((2, 3)));
    }

    #[test]
    fn replace_and_remove() {
        let mut adj = EdgeAdjacency::new();
        adj.insert(Triangle::new(0, 1, 2));
        assert!(adj.replace(Triangle::new(0, 1, 2), Triangle::new(0, 1, 5)));
        assert!(!adj.replace(Triangle::new(0, 1, 2), Triangle::new(0, 1, 6)));
        assert!(adj.remove(Triangle::new(0, 1, 5)));
        assert!(adj.is_empty());
    }
}
