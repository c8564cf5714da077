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

use rand::Rng;

use crate::geometry::point_2::Point2;

/// `n` points drawn uniformly from the square `[lo, hi) x [lo, hi)`.
///
/// Panics if `lo >= hi`.
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, n: usize, lo: f64, hi: f64) -> Vec<Point2<f64>> {
    (0..n)
        .map(|_| Point2::new(rng.random_range(lo..hi), rng.random_range(lo..hi)))
        .collect()
}

/// Right isosceles triangle with legs of length `a` along the axes.
pub fn simplex(a: f64) -> Vec<Point2<f64>> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(a, 0.0),
        Point2::new(0.0, a),
    ]
}

/// Vertices of a regular `n`-gon of radius `r` centred at the origin.
pub fn regular_polygon(n: usize, r: f64) -> Vec<Point2<f64>> {
    let step = std::f64::consts::TAU / n as f64;
    (0..n)
        .map(|i| {
            let a = step * i as f64;
            Point2::new(r * a.cos(), r * a.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn random_points_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let pts = random_points(&mut rng, 200, -2.0, 3.0);
        assert_eq!(pts.len(), 200);
        assert!(pts.iter().all(|p| (-2.0..3.0).contains(&p.x) && (-2.0..3.0).contains(&p.y)));
    }

    #[test]
    fn narrow_range_excludes_upper_bound() {
        let mut rng = StdRng::seed_from_u64(3);
        let (lo, hi) = (1.0, 1.0 + 4.0 * f64::EPSILON);
        for p in random_points(&mut rng, 500, lo, hi) {
            assert!(p.x >= lo && p.x < hi);
            assert!(p.y >= lo && p.y < hi);
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = random_points(&mut StdRng::seed_from_u64(42), 16, 0.0, 1.0);
        let b = random_points(&mut StdRng::seed_from_u64(42), 16, 0.0, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn regular_polygon_is_on_circle() {
        for p in regular_polygon(7, 2.0) {
            assert!((p.x.hypot(p.y) - 2.0).abs() < 1e-12);
        }
    }
}
