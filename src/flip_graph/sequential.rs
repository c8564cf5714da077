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

use std::collections::VecDeque;
use std::sync::Arc;

use ahash::AHashSet;
use tracing::{debug, info, warn};

use super::{FlipGraph, NodeIndex, NodePair};
use crate::error::FlipGraphError;
use crate::geometry::PointSet;
use crate::numeric::Scalar;
use crate::operations::triangulation::Triangulation;

impl<T: Scalar> FlipGraph<T> {
    /// Triangulates `points` and explores every triangulation reachable by flips.
    pub fn from_points(points: Arc<PointSet<T>>) -> Result<Self, FlipGraphError> {
        Ok(Self::generate(Triangulation::build(points)?))
    }

    /// Breadth-first exploration from `initial`, which becomes node 0.
    pub fn generate(initial: Triangulation<T>) -> Self {
        Self::generate_bounded(initial, None)
    }

    /// Like [`generate`](Self::generate) but expands at most `max_expansions` nodes.
    pub fn generate_bounded(initial: Triangulation<T>, max_expansions: Option<usize>) -> Self {
        let mut index = NodeIndex::default();
        index.insert(initial.structural_hash(), 0);
        let mut nodes = vec![initial];
        let mut edges = AHashSet::new();
        let mut frontier = VecDeque::from([0usize]);
        let mut expansions = 0usize;
        let mut complete = true;

        while let Some(current) = frontier.pop_front() {
            if max_expansions.is_some_and(|cap| expansions >= cap) {
                complete = false;
                warn!(
                    expansions,
                    pending = frontier.len() + 1,
                    "expansion cap reached, flip graph is partial"
                );
                break;
            }
            expansions += 1;

            for edge in nodes[current].flippable_edges() {
                let Some(next) = nodes[current].flipped(edge) else {
                    continue;
                };
                let hash = next.structural_hash();
                let target = match index.find(hash, |id| nodes[id] == next) {
                    Some(id) => id,
                    None => {
                        let id = nodes.len();
                        index.insert(hash, id);
                        nodes.push(next);
                        frontier.push_back(id);
                        id
                    }
                };
                edges.insert(NodePair::new(current, target));
            }
        }

        debug!(expansions, "sequential exploration finished");
        info!(
            nodes = nodes.len(),
            edges = edges.len(),
            complete,
            "flip graph explored"
        );
        FlipGraph::from_parts(nodes, edges, complete)
    }
}
