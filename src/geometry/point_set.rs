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

use std::ops::Index;

use crate::error::InputError;
use crate::geometry::point_2::Point2;
use crate::mesh::hashing;
use crate::numeric::scalar::Scalar;

/// Sorted, deduplicated, finite point set.
///
/// Triangulations refer to points by index into this set and share it through
/// an `Arc`; it is never mutated after construction.
#[derive(Debug, Clone)]
pub struct PointSet<T: Scalar> {
    points: Vec<Point2<T>>,
    hash: u64,
}

impl<T: Scalar> PointSet<T> {
    /// Collapses duplicate points and orders the rest lexicographically.
    pub fn new<I>(points: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = Point2<T>>,
    {
        let mut points: Vec<Point2<T>> = points.into_iter().collect();
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(InputError::NonFiniteCoordinate { index });
        }

        points.sort_unstable_by(|a, b| a.lex_cmp(b));
        points.dedup();

        let hash = points
            .iter()
            .fold(0u64, |seed, p| hashing::combine(seed, hashing::hash_one(p)));
        Ok(Self { points, hash })
    }

    pub fn from_xy<I>(coords: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        Self::new(coords.into_iter().map(Point2::from))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point2<T>] {
        &self.points
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Point2<T>> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2<T>> {
        self.points.iter()
    }

    /// Order-dependent hash over the sorted points.
    #[inline]
    pub fn hash_value(&self) -> u64 {
        self.hash
    }
}

impl<T: Scalar> Index<usize> for PointSet<T> {
    type Output = Point2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Point2<T> {
        &self.points[index]
    }
}

impl<T: Scalar> PartialEq for PointSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.points == other.points
    }
}

impl<T: Scalar> Eq for PointSet<T> {}

impl<'a, T: Scalar> IntoIterator for &'a PointSet<T> {
    type Item = &'a Point2<T>;
    type IntoIter = std::slice::Iter<'a, Point2<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
