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

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::kernel::orientation::orient2d;
use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, Copy, Default)]
pub struct Point2<T>
where
    T: Scalar,
{
    pub x: T,
    pub y: T,
}

impl<T> Point2<T>
where
    T: Scalar,
{
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn distance_squared_to(&self, other: &Self) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance_to(&self, other: &Self) -> T {
        self.distance_squared_to(other).sqrt()
    }

    /// Twice the signed area of `(p, q, r)`; positive when counter-clockwise.
    #[inline]
    pub fn cross(p: &Self, q: &Self, r: &Self) -> T {
        orient2d(p, q, r)
    }

    /// Center and radius of the circle through `p`, `q` and `r`.
    ///
    /// Collinear input has no circumcircle: the radius is NaN.
    pub fn circumcircle(p: &Self, q: &Self, r: &Self) -> (Self, T) {
        let (ux, uy) = (q.x - p.x, q.y - p.y);
        let (vx, vy) = (r.x - p.x, r.y - p.y);
        let den = (ux * vy - uy * vx) * (T::one() + T::one());
        if den == T::zero() {
            return (Self::new(T::nan(), T::nan()), T::nan());
        }

        let u2 = ux * ux + uy * uy;
        let v2 = vx * vx + vy * vy;
        let cx = (vy * u2 - uy * v2) / den;
        let cy = (ux * v2 - vx * u2) / den;
        let radius = (cx * cx + cy * cy).sqrt();
        if !radius.is_finite() {
            return (Self::new(T::nan(), T::nan()), T::nan());
        }
        (Self::new(p.x + cx, p.y + cy), radius)
    }

    /// Lexicographic order on `(x, y)`; incomparable coordinates compare equal.
    #[inline]
    pub fn lex_cmp(&self, other: &Self) -> Ordering {
        self.x
            .partial_cmp(&other.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal))
    }
}

impl<T> Hash for Point2<T>
where
    T: Scalar,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash_bits().hash(state);
        self.y.hash_bits().hash(state);
    }
}

impl<T> PartialEq for Point2<T>
where
    T: Scalar,
{
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<T> Eq for Point2<T> where T: Scalar {}

impl<T> PartialOrd for Point2<T>
where
    T: Scalar,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => self.y.partial_cmp(&other.y),
            ord => Some(ord),
        }
    }
}

impl<T> From<(T, T)> for Point2<T>
where
    T: Scalar,
{
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> fmt::Display for Point2<T>
where
    T: Scalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
