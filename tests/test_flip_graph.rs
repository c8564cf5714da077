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

use std::sync::Arc;

use flipgraph::geometry::generation::regular_polygon;
use flipgraph::{FlipGraph, PointSet, Triangulation};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn polygon_graph(n: usize) -> FlipGraph<f64> {
    let pts = PointSet::new(regular_polygon(n, 1.0)).unwrap();
    FlipGraph::from_points(Arc::new(pts)).unwrap()
}

#[test]
fn convex_polygons_follow_catalan_numbers() {
    init_tracing();
    // (n, C(n-2), C(n-2) * (n-3) / 2)
    for (n, nodes, edges) in [(4, 2, 1), (5, 5, 5), (6, 14, 21), (7, 42, 84)] {
        let graph = polygon_graph(n);
        assert_eq!(graph.node_count(), nodes, "{n}-gon");
        assert_eq!(graph.edge_count(), edges, "{n}-gon");
        assert!(graph.is_complete());
    }
}

#[test]
fn convex_flip_graph_is_regular() {
    let graph = polygon_graph(6);
    for id in 0..graph.node_count() {
        assert_eq!(graph.neighbors(id).len(), 3, "node {id}");
    }
}

#[test]
fn nodes_are_distinct() {
    let graph = polygon_graph(7);
    for (i, a) in graph.nodes().iter().enumerate() {
        assert_eq!(graph.index_of(a), Some(i));
        for b in &graph.nodes()[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn edges_differ_by_exactly_one_flip() {
    let graph = polygon_graph(6);
    for pair in graph.sorted_edges() {
        let a = graph.node(pair.first()).unwrap();
        let b = graph.node(pair.second()).unwrap();
        let only_a: Vec<_> = a.edges().into_iter().filter(|e| !b.contains_edge(*e)).collect();
        let only_b: Vec<_> = b.edges().into_iter().filter(|e| !a.contains_edge(*e)).collect();
        assert_eq!(only_a.len(), 1);
        assert_eq!(only_b.len(), 1);
        assert_eq!(a.flippable()[&only_a[0]], only_b[0]);
    }
}

#[test]
fn interior_point_has_single_triangulation() {
    let pts = PointSet::from_xy([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.5, 0.5)]).unwrap();
    let graph = FlipGraph::from_points(Arc::new(pts)).unwrap();
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn empty_point_set_yields_single_node() {
    let pts = PointSet::<f64>::new([]).unwrap();
    let graph = FlipGraph::from_points(Arc::new(pts)).unwrap();
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_complete());
}

#[test]
fn initial_triangulation_is_node_zero() {
    let pts = PointSet::new(regular_polygon(6, 2.0)).unwrap();
    let initial = Triangulation::build(Arc::new(pts)).unwrap();
    let graph = FlipGraph::generate(initial.clone());
    assert_eq!(graph.index_of(&initial), Some(0));
    assert_eq!(graph.node(0), Some(&initial));
}

#[test]
fn bounded_run_is_partial() {
    init_tracing();
    let pts = PointSet::new(regular_polygon(7, 1.0)).unwrap();
    let initial = Triangulation::build(Arc::new(pts)).unwrap();

    let graph = FlipGraph::generate_bounded(initial.clone(), Some(3));
    assert!(!graph.is_complete());
    assert!(graph.node_count() < 42);
    assert!(graph.node_count() > 3);

    let roomy = FlipGraph::generate_bounded(initial, Some(42));
    assert!(roomy.is_complete());
    assert_eq!(roomy.node_count(), 42);
}

#[test]
fn every_node_validates() {
    let pts = PointSet::from_xy([
        (0.0, 0.0),
        (4.0, 0.1),
        (5.0, 3.0),
        (2.2, 5.0),
        (-1.0, 3.1),
        (2.0, 2.0),
    ])
    .unwrap();
    let graph = FlipGraph::from_points(Arc::new(pts)).unwrap();
    assert!(graph.node_count() > 1);
    for node in graph.nodes() {
        node.validate().unwrap();
    }
}
