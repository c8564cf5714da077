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

//! Graph of triangulations connected by single edge flips.

use std::fmt;

use ahash::AHashSet;

use crate::numeric::Scalar;
use crate::operations::triangulation::Triangulation;

pub mod concurrent;
pub mod node_set;
pub mod sequential;

pub use concurrent::{ConcurrentFlipGraph, ExplorationConfig};
pub use node_set::{ConcurrentEdgeSet, ConcurrentNodeSet, Insertion, NodeIndex};

/// Unordered pair of node indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePair(usize, usize);

impl NodePair {
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        if i < j { NodePair(i, j) } else { NodePair(j, i) }
    }

    #[inline]
    pub fn first(&self) -> usize {
        self.0
    }

    #[inline]
    pub fn second(&self) -> usize {
        self.1
    }
}

impl fmt::Display for NodePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

/// Explored flip graph: one node per distinct triangulation.
#[derive(Debug, Clone)]
pub struct FlipGraph<T: Scalar> {
    nodes: Vec<Triangulation<T>>,
    edges: AHashSet<NodePair>,
    index: NodeIndex,
    complete: bool,
}

impl<T: Scalar> FlipGraph<T> {
    pub(crate) fn from_parts(
        nodes: Vec<Triangulation<T>>,
        edges: AHashSet<NodePair>,
        complete: bool,
    ) -> Self {
        let mut index = NodeIndex::default();
        for (id, node) in nodes.iter().enumerate() {
            index.insert(node.structural_hash(), id);
        }
        Self {
            nodes,
            edges,
            index,
            complete,
        }
    }

    #[inline]
    pub fn nodes(&self) -> &[Triangulation<T>] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, id: usize) -> Option<&Triangulation<T>> {
        self.nodes.get(id)
    }

    #[inline]
    pub fn edges(&self) -> &AHashSet<NodePair> {
        &self.edges
    }

    /// Edges in ascending order.
    pub fn sorted_edges(&self) -> Vec<NodePair> {
        let mut out: Vec<NodePair> = self.edges.iter().copied().collect();
        out.sort_unstable();
        out
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `false` when exploration stopped at the expansion cap.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn index_of(&self, triangulation: &Triangulation<T>) -> Option<usize> {
        self.index
            .find(triangulation.structural_hash(), |id| &self.nodes[id] == triangulation)
    }

    /// Node indices adjacent to `id`, ascending.
    pub fn neighbors(&self, id: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .edges
            .iter()
            .filter_map(|pair| match (pair.0 == id, pair.1 == id) {
                (true, _) => Some(pair.1),
                (_, true) => Some(pair.0),
                _ => None,
            })
            .collect();
        out.sort_unstable();
        out
    }
}
