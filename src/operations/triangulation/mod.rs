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

//! Triangulation of a shared point set with edge-keyed adjacency.
//!
//! Every edge maps to the (one or two) triangles incident to it; triangles are
//! plain canonical index triples, so a triangulation can be cloned and flipped
//! independently of the one it was copied from. Interior edges whose two
//! triangles form a strictly convex quadrilateral are kept in a separate map
//! together with the diagonal that would replace them.

use std::collections::hash_map::Entry;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use ahash::AHashMap;
use tracing::trace;

use crate::error::TopologyError;
use crate::geometry::PointSet;
use crate::kernel::is_convex_quad;
use crate::mesh::{Edge, EdgeAdjacency, Triangle, hashing};
use crate::numeric::{Scalar, Tolerance};

mod hull;
pub mod sweep_hull;

/// Result of [`Triangulation::flip`]. Only `Flipped` changes the triangulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The edge was replaced by the returned diagonal.
    Flipped(Edge),
    /// The edge is not part of the triangulation.
    UnknownEdge,
    /// The edge is on the hull or its quadrilateral is not strictly convex.
    NotFlippable,
}

impl FlipOutcome {
    #[inline]
    pub fn is_flipped(&self) -> bool {
        matches!(self, FlipOutcome::Flipped(_))
    }
}

#[derive(Clone, Debug)]
pub struct Triangulation<T: Scalar> {
    points: Arc<PointSet<T>>,
    tolerance: Tolerance<T>,
    adjacency: AHashMap<Edge, EdgeAdjacency>,
    flippable: AHashMap<Edge, Edge>,
    // wrapping sum of `hashing::unordered_term` over the adjacency keys
    topology_hash: u64,
    built: bool,
}

impl<T: Scalar> Triangulation<T> {
    /// Empty triangulation over `points`; call [`triangulate`](Self::triangulate) to build it.
    pub fn new(points: Arc<PointSet<T>>) -> Self {
        Self {
            points,
            tolerance: Tolerance::default(),
            adjacency: AHashMap::new(),
            flippable: AHashMap::new(),
            topology_hash: 0,
            built: false,
        }
    }

    /// Replaces the epsilon policy; a built triangulation re-tests every
    /// interior edge under the new tolerance.
    pub fn with_tolerance(mut self, tolerance: Tolerance<T>) -> Self {
        self.tolerance = tolerance;
        if self.built {
            self.refresh_flippable();
        }
        self
    }

    #[inline]
    pub fn points(&self) -> &PointSet<T> {
        &self.points
    }

    #[inline]
    pub fn point_set(&self) -> &Arc<PointSet<T>> {
        &self.points
    }

    #[inline]
    pub fn tolerance(&self) -> &Tolerance<T> {
        &self.tolerance
    }

    #[inline]
    pub fn is_built(&self) -> bool {
        self.built
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.adjacency.values().map(EdgeAdjacency::len).sum::<usize>() / 3
    }

    /// All edges in canonical order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut out: Vec<Edge> = self.adjacency.keys().copied().collect();
        out.sort_unstable();
        out
    }

    /// All triangles in canonical order.
    pub fn triangles(&self) -> Vec<Triangle> {
        let mut out: Vec<Triangle> = self
            .adjacency
            .values()
            .flat_map(|adj| adj.triangles().iter().copied())
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Edges with a single incident triangle, in canonical order.
    pub fn hull_edges(&self) -> Vec<Edge> {
        let mut out: Vec<Edge> = self
            .adjacency
            .iter()
            .filter(|(_, adj)| adj.is_boundary())
            .map(|(e, _)| *e)
            .collect();
        out.sort_unstable();
        out
    }

    /// Flippable edges mapped to the diagonal that replaces them.
    #[inline]
    pub fn flippable(&self) -> &AHashMap<Edge, Edge> {
        &self.flippable
    }

    /// Flippable edges in canonical order.
    pub fn flippable_edges(&self) -> Vec<Edge> {
        let mut out: Vec<Edge> = self.flippable.keys().copied().collect();
        out.sort_unstable();
        out
    }

    #[inline]
    pub fn is_flippable(&self, edge: Edge) -> bool {
        self.flippable.contains_key(&edge)
    }

    #[inline]
    pub fn contains_edge(&self, edge: Edge) -> bool {
        self.adjacency.contains_key(&edge)
    }

    #[inline]
    pub fn adjacency(&self, edge: Edge) -> Option<&EdgeAdjacency> {
        self.adjacency.get(&edge)
    }

    #[inline]
    pub fn is_internal(&self, edge: Edge) -> bool {
        self.adjacency.get(&edge).is_some_and(EdgeAdjacency::is_internal)
    }

    /// Hash of the point set combined with the (unordered) edge set.
    ///
    /// Equal triangulations hash equally; the converse is not guaranteed, so
    /// deduplication must confirm with `==`.
    #[inline]
    pub fn structural_hash(&self) -> u64 {
        hashing::combine(self.points.hash_value(), self.topology_hash)
    }

    /// Replaces the diagonal `edge` of a convex quadrilateral by the other diagonal.
    ///
    /// Unknown and non-flippable edges leave the triangulation untouched.
    /// Only the four sides of the quadrilateral are re-examined afterwards.
    pub fn flip(&mut self, edge: Edge) -> FlipOutcome {
        if !self.adjacency.contains_key(&edge) {
            return FlipOutcome::UnknownEdge;
        }
        let Some(opposite) = self.flippable.remove(&edge) else {
            return FlipOutcome::NotFlippable;
        };

        let (a, b) = edge.points();
        let (c, d) = opposite.points();
        let old_c = Triangle::new(a, b, c);
        let old_d = Triangle::new(a, b, d);
        let new_a = Triangle::new(c, d, a);
        let new_b = Triangle::new(c, d, b);

        self.detach_edge(edge);
        let sides = [
            (Edge::new(a, c), old_c, new_a),
            (Edge::new(b, c), old_c, new_b),
            (Edge::new(a, d), old_d, new_a),
            (Edge::new(b, d), old_d, new_b),
        ];
        for (side, old, new) in sides {
            if let Some(adj) = self.adjacency.get_mut(&side) {
                adj.replace(old, new);
            }
        }
        self.attach(opposite, new_a);
        self.attach(opposite, new_b);
        self.flippable.insert(opposite, edge);

        for (side, _, _) in sides {
            self.update_flippable(side);
        }

        trace!(%edge, %opposite, "flipped edge");
        FlipOutcome::Flipped(opposite)
    }

    /// Copy of `self` with `edge` flipped, or `None` if the flip is a no-op.
    pub fn flipped(&self, edge: Edge) -> Option<Self> {
        if !self.is_flippable(edge) {
            return None;
        }
        let mut copy = self.clone();
        copy.flip(edge).is_flipped().then_some(copy)
    }

    /// Cross-checks adjacency, flippable map and Euler's relations.
    pub fn validate(&self) -> Result<(), TopologyError> {
        for (&edge, adj) in &self.adjacency {
            if !(1..=2).contains(&adj.len()) {
                return Err(TopologyError::EdgeValence {
                    edge,
                    count: adj.len(),
                });
            }
            for &triangle in adj.triangles() {
                if !triangle.contains(edge) {
                    return Err(TopologyError::MisattachedTriangle { edge, triangle });
                }
                for side in triangle.edges() {
                    let registered = self
                        .adjacency
                        .get(&side)
                        .is_some_and(|s| s.triangles().contains(&triangle));
                    if !registered {
                        return Err(TopologyError::MissingEdge {
                            edge: side,
                            triangle,
                        });
                    }
                }
            }
        }

        for (&edge, &opposite) in &self.flippable {
            let expected = self
                .adjacency
                .get(&edge)
                .and_then(|adj| adj.opposite_points(edge))
                .map(|(c, d)| Edge::new(c, d));
            if expected != Some(opposite) {
                return Err(TopologyError::StaleFlippable { edge });
            }
        }

        let triangles = self.triangle_count();
        if triangles > 0 {
            let n = self.points.len();
            let h = self.hull_edges().len();
            let expected_edges = (3 * n).saturating_sub(3 + h);
            let expected_triangles = (2 * n).saturating_sub(2 + h);
            if self.edge_count() != expected_edges || triangles != expected_triangles {
                return Err(TopologyError::EulerMismatch {
                    edges: self.edge_count(),
                    expected_edges,
                    triangles,
                    expected_triangles,
                });
            }
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.adjacency.clear();
        self.flippable.clear();
        self.topology_hash = 0;
        self.built = false;
    }

    fn insert_triangle(&mut self, t: Triangle) {
        for edge in t.edges() {
            self.attach(edge, t);
        }
    }

    fn attach(&mut self, edge: Edge, t: Triangle) {
        match self.adjacency.entry(edge) {
            Entry::Occupied(mut slot) => {
                if !slot.get_mut().insert(t) {
                    tracing::warn!(%edge, triangle = %t, "edge already has two triangles");
                }
            }
            Entry::Vacant(slot) => {
                let mut adj = EdgeAdjacency::new();
                adj.insert(t);
                slot.insert(adj);
                self.topology_hash = self
                    .topology_hash
                    .wrapping_add(hashing::unordered_term(&edge));
            }
        }
    }

    fn detach_edge(&mut self, edge: Edge) {
        if self.adjacency.remove(&edge).is_some() {
            self.topology_hash = self
                .topology_hash
                .wrapping_sub(hashing::unordered_term(&edge));
        }
    }

    fn refresh_flippable(&mut self) {
        self.flippable.clear();
        let internal: Vec<Edge> = self
            .adjacency
            .iter()
            .filter(|(_, adj)| adj.is_internal())
            .map(|(e, _)| *e)
            .collect();
        for edge in internal {
            self.update_flippable(edge);
        }
    }

    fn update_flippable(&mut self, edge: Edge) {
        self.flippable.remove(&edge);
        let Some((c, d)) = self
            .adjacency
            .get(&edge)
            .and_then(|adj| adj.opposite_points(edge))
        else {
            return;
        };

        let pts = &self.points;
        let (a, b) = edge.points();
        if is_convex_quad(&pts[a], &pts[c], &pts[b], &pts[d], &self.tolerance) {
            self.flippable.insert(edge, Edge::new(c, d));
        }
    }
}

impl<T: Scalar> PartialEq for Triangulation<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_points = Arc::ptr_eq(&self.points, &other.points) || self.points == other.points;
        same_points
            && self.topology_hash == other.topology_hash
            && self.adjacency.len() == other.adjacency.len()
            && self.adjacency.keys().all(|e| other.adjacency.contains_key(e))
    }
}

impl<T: Scalar> Eq for Triangulation<T> {}

impl<T: Scalar> Hash for Triangulation<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}
