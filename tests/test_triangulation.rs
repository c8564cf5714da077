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

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use flipgraph::geometry::generation::{regular_polygon, simplex};
use flipgraph::{
    Edge, FlipOutcome, PointSet, Tolerance, Triangle, Triangulation, TriangulationError,
};

fn build(coords: &[(f64, f64)]) -> Triangulation<f64> {
    let pts = PointSet::from_xy(coords.iter().copied()).unwrap();
    Triangulation::build(Arc::new(pts)).unwrap()
}

fn unit_square() -> Triangulation<f64> {
    build(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)])
}

#[test]
fn simplex_at_any_scale() {
    for a in [1.0, 0.001, 1000.0] {
        let pts = PointSet::new(simplex(a)).unwrap();
        let t = Triangulation::build(Arc::new(pts)).unwrap();
        assert_eq!(t.edge_count(), 3, "scale {a}");
        assert_eq!(t.triangle_count(), 1, "scale {a}");
        assert!(t.flippable().is_empty(), "scale {a}");
        assert_eq!(t.hull_edges().len(), 3);
        t.validate().unwrap();
    }
}

#[test]
fn square_has_one_diagonal() {
    let t = unit_square();
    assert_eq!(t.edge_count(), 5);
    assert_eq!(t.triangle_count(), 2);
    assert_eq!(t.flippable_edges().len(), 1);
    assert_eq!(t.hull_edges().len(), 4);

    let diagonal = t.flippable_edges()[0];
    assert!(t.is_internal(diagonal));
    assert_eq!(diagonal, Edge::new(1, 2));
    assert_eq!(t.flippable()[&diagonal], Edge::new(0, 3));
    t.validate().unwrap();
}

#[test]
fn flip_round_trip_restores_original() {
    let original = unit_square();
    let mut t = original.clone();
    let diagonal = t.flippable_edges()[0];

    let FlipOutcome::Flipped(other) = t.flip(diagonal) else {
        panic!("square diagonal must flip");
    };
    assert_ne!(other, diagonal);
    assert!(t.contains_edge(other));
    assert!(!t.contains_edge(diagonal));
    assert_ne!(t, original);
    t.validate().unwrap();

    assert_eq!(t.flip(other), FlipOutcome::Flipped(diagonal));
    assert_eq!(t, original);
    assert_eq!(t.structural_hash(), original.structural_hash());
}

#[test]
fn flip_of_hull_or_unknown_edge_is_noop() {
    let mut t = unit_square();
    let before = t.clone();
    let hull = t.hull_edges()[0];
    assert_eq!(t.flip(hull), FlipOutcome::NotFlippable);
    assert_eq!(t.flip(Edge::new(0, 42)), FlipOutcome::UnknownEdge);
    assert_eq!(t, before);
    assert!(t.flipped(hull).is_none());
}

#[test]
fn collinear_points_fail_seed_selection() {
    let pts = PointSet::from_xy([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap();
    assert_eq!(
        Triangulation::build(Arc::new(pts)).unwrap_err(),
        TriangulationError::SeedSelectionExhausted { attempts: 3 }
    );
}

#[test]
fn fewer_than_three_points_is_empty() {
    for coords in [&[][..], &[(1.0, 1.0)][..], &[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)][..]] {
        let t = build(coords);
        assert!(t.is_built());
        assert_eq!(t.triangle_count(), 0);
        assert!(t.edges().is_empty());
        t.validate().unwrap();
    }
}

#[test]
fn unbuilt_triangulation_is_empty() {
    let pts = PointSet::new(simplex(1.0)).unwrap();
    let t = Triangulation::new(Arc::new(pts));
    assert!(!t.is_built());
    assert_eq!(t.triangle_count(), 0);
}

#[test]
fn interior_point_is_fanned() {
    let t = build(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.5, 0.5)]);
    assert_eq!(t.triangle_count(), 4);
    assert_eq!(t.edge_count(), 8);
    // every diagonal through the centre is straight, so nothing flips
    assert!(t.flippable().is_empty());
    t.validate().unwrap();
}

#[test]
fn convex_polygon_counts() {
    for n in 3..=10 {
        let pts = PointSet::new(regular_polygon(n, 1.0)).unwrap();
        let t = Triangulation::build(Arc::new(pts)).unwrap();
        assert_eq!(t.triangle_count(), n - 2, "{n}-gon");
        assert_eq!(t.edge_count(), 2 * n - 3, "{n}-gon");
        assert_eq!(t.flippable().len(), n - 3, "{n}-gon");
        t.validate().unwrap();
    }
}

#[test]
fn triangles_are_sorted_and_canonical() {
    let t = build(&[(0.0, 0.0), (3.0, 0.0), (0.0, 3.0), (3.0, 3.0), (1.0, 2.0)]);
    let tris = t.triangles();
    assert!(tris.windows(2).all(|w| w[0] < w[1]));
    for tri in &tris {
        assert_eq!(*tri, Triangle::new(tri.points()[2], tri.points()[0], tri.points()[1]));
    }
}

#[test]
fn hash_tracks_structure() {
    let a = unit_square();
    let b = unit_square();
    assert_eq!(a, b);

    let mut ha = DefaultHasher::new();
    let mut hb = DefaultHasher::new();
    a.hash(&mut ha);
    b.hash(&mut hb);
    assert_eq!(ha.finish(), hb.finish());

    let flipped = a.flipped(a.flippable_edges()[0]).unwrap();
    assert_ne!(flipped.structural_hash(), a.structural_hash());
}

#[test]
fn same_topology_on_other_points_differs() {
    let a = unit_square();
    let b = build(&[(0.0, 0.0), (2.0, 0.0), (0.0, 2.0), (2.0, 2.0)]);
    assert_eq!(a.edges(), b.edges());
    assert_ne!(a, b);
}

#[test]
fn retriangulate_after_flip_restores_build() {
    let mut t = build(&[(0.0, 0.0), (4.0, 0.0), (5.0, 3.0), (2.0, 5.0), (-1.0, 3.0)]);
    let fresh = t.clone();
    let edge = t.flippable_edges()[0];
    assert!(t.flip(edge).is_flipped());
    t.triangulate().unwrap();
    assert_eq!(t, fresh);
}

#[test]
fn retuning_tolerance_rechecks_flippable_edges() {
    // at 0.6 each half of the unit square counts as degenerate
    let loose = unit_square().with_tolerance(Tolerance::new(0.6));
    assert!(loose.flippable().is_empty());
    loose.validate().unwrap();

    let strict = loose.with_tolerance(Tolerance::default());
    assert_eq!(strict.flippable_edges(), vec![Edge::new(1, 2)]);
    assert_eq!(strict, unit_square());
}

#[test]
fn tight_tolerance_still_builds() {
    let pts = PointSet::new(regular_polygon(6, 1.0)).unwrap();
    let mut t = Triangulation::new(Arc::new(pts)).with_tolerance(Tolerance::new(1e-14));
    t.triangulate().unwrap();
    assert_eq!(t.triangle_count(), 4);
}
