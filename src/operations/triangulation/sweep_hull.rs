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

//! Incremental sweep-hull construction.
//!
//! 1. pick a seed triangle: a pivot, its nearest neighbour, and the point that
//!    minimises the circumradius with those two;
//! 2. sort every other point by distance to the seed circumcenter;
//! 3. absorb points in that order, fanning each one to the run of hull edges
//!    it can see and splicing it into the hull in place of that run.
//!
//! Radial order guarantees each new point lies outside the current hull, so
//! the visible edges always form one contiguous run.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, trace};

use super::Triangulation;
use super::hull::HullRing;
use crate::error::TriangulationError;
use crate::geometry::{Point2, PointSet};
use crate::mesh::Triangle;
use crate::numeric::{Scalar, Tolerance};

impl<T: Scalar> Triangulation<T> {
    /// Builds a triangulation of `points` with the default tolerance.
    pub fn build(points: Arc<PointSet<T>>) -> Result<Self, TriangulationError> {
        let mut tri = Self::new(points);
        tri.triangulate()?;
        Ok(tri)
    }

    /// Discards any current topology and triangulates the point set from scratch.
    ///
    /// Fewer than three points give an empty (but built) triangulation. A
    /// point set with no non-degenerate triple is an error.
    pub fn triangulate(&mut self) -> Result<(), TriangulationError> {
        self.clear();

        let points = Arc::clone(&self.points);
        let n = points.len();
        if n < 3 {
            debug!(points = n, "fewer than three distinct points, nothing to triangulate");
            self.built = true;
            return Ok(());
        }

        let order = sweep_order(&points, 2 * n / 5, &self.tolerance)?;
        let (s0, s1, s2) = (order[0], order[1], order[2]);
        let mut hull = HullRing::new(n, [s0, s1, s2]);
        self.insert_triangle(Triangle::new(s0, s1, s2));

        for &p in &order[3..] {
            self.absorb(&mut hull, p, &points)?;
        }

        self.refresh_flippable();
        self.built = true;

        debug!(
            points = n,
            hull = hull.len(),
            edges = self.edge_count(),
            triangles = self.triangle_count(),
            flippable = self.flippable.len(),
            "sweep-hull triangulation built"
        );
        Ok(())
    }

    fn absorb(
        &mut self,
        hull: &mut HullRing,
        p: usize,
        points: &PointSet<T>,
    ) -> Result<(), TriangulationError> {
        let pp = &points[p];
        let run = hull.visible_run(|u, v| Point2::cross(pp, &points[u], &points[v]) > T::zero());
        let Some((first, last)) = run else {
            return Err(TriangulationError::PointNotVisible { index: p });
        };

        let mut u = first;
        while u != last {
            let v = hull.next(u);
            self.insert_triangle(Triangle::new(p, u, v));
            u = v;
        }
        hull.splice(first, last, p);
        trace!(point = p, first, last, hull = hull.len(), "absorbed point");
        Ok(())
    }
}

/// Seed triangle followed by the remaining points in sweep order.
///
/// The seed is oriented so that a point `p` outside the hull sees edge
/// `(u, v)` exactly when `cross(p, u, v) > 0`.
fn sweep_order<T: Scalar>(
    points: &PointSet<T>,
    pivot: usize,
    tol: &Tolerance<T>,
) -> Result<Vec<usize>, TriangulationError> {
    let n = points.len();
    for attempt in 0..n {
        let i0 = (pivot + attempt) % n;
        let p0 = &points[i0];

        let Some(i1) = argmin((0..n).filter(|&k| k != i0), |k| {
            p0.distance_squared_to(&points[k])
        }) else {
            continue;
        };
        let p1 = &points[i1];

        let Some(i2) = argmin((0..n).filter(|&k| k != i0 && k != i1), |k| {
            Point2::circumcircle(p0, p1, &points[k]).1
        }) else {
            trace!(pivot = i0, "no finite circumcircle through pivot pair");
            continue;
        };
        let p2 = &points[i2];

        let cross = Point2::cross(p0, p1, p2);
        if tol.is_negligible(cross, p0.distance_to(p1) * p0.distance_to(p2)) {
            trace!(pivot = i0, "degenerate seed triangle");
            continue;
        }
        let (i1, i2) = if cross > T::zero() { (i2, i1) } else { (i1, i2) };

        let (center, radius) = Point2::circumcircle(&points[i0], &points[i1], &points[i2]);
        if radius.is_nan() {
            continue;
        }

        let mut rest: Vec<(T, usize)> = (0..n)
            .filter(|&k| k != i0 && k != i1 && k != i2)
            .map(|k| (center.distance_squared_to(&points[k]), k))
            .collect();
        rest.sort_unstable_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });

        let mut order = Vec::with_capacity(n);
        order.extend([i0, i1, i2]);
        order.extend(rest.into_iter().map(|(_, k)| k));
        debug!(seed = ?[i0, i1, i2], attempts = attempt + 1, "seed triangle selected");
        return Ok(order);
    }

    Err(TriangulationError::SeedSelectionExhausted { attempts: n })
}

/// Candidate with the smallest key, skipping NaN keys.
fn argmin<T, I, F>(candidates: I, key: F) -> Option<usize>
where
    T: Scalar,
    I: Iterator<Item = usize>,
    F: Fn(usize) -> T,
{
    let mut best: Option<(usize, T)> = None;
    for k in candidates {
        let v = key(k);
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if b <= v => {}
            _ => best = Some((k, v)),
        }
    }
    best.map(|(k, _)| k)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn set(coords: &[(f64, f64)]) -> Arc<PointSet<f64>> {
        Arc::new(PointSet::from_xy(coords.iter().copied()).unwrap())
    }

    #[test]
    fn argmin_skips_nan() {
        let keys = [f64::NAN, 3.0, 1.0, f64::NAN, 2.0];
        assert_eq!(argmin(0..keys.len(), |k| keys[k]), Some(2));
        assert_eq!(argmin(0..2, |_| f64::NAN), None);
    }

    #[test]
    fn seed_is_clockwise() {
        let pts = set(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (3.0, 3.0)]);
        let order = sweep_order(&pts, 0, &Tolerance::default()).unwrap();
        let c = Point2::cross(&pts[order[0]], &pts[order[1]], &pts[order[2]]);
        assert!(c < 0.0);
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn collinear_points_exhaust_seed_selection() {
        let pts = set(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let err = sweep_order(&pts, 1, &Tolerance::default()).unwrap_err();
        assert_eq!(err, TriangulationError::SeedSelectionExhausted { attempts: 4 });
    }

    #[test]
    fn retriangulating_is_idempotent() {
        let mut tri = Triangulation::new(set(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]));
        tri.triangulate().unwrap();
        let first = tri.edges();
        tri.triangulate().unwrap();
        assert_eq!(tri.edges(), first);
        assert_eq!(tri.triangle_count(), 2);
    }
}
