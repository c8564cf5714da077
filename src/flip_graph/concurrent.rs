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

//! Multi-threaded flip graph exploration on a `rayon` pool.
//!
//! Every newly discovered triangulation becomes a task in one `rayon` scope.
//! Only the worker whose insertion into the shared node set succeeded spawns
//! that task, so each node is expanded once; the scope returns when no task
//! is left.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use rayon::{Scope, ThreadPoolBuilder};
use tracing::{debug, info, warn};

use super::{ConcurrentEdgeSet, ConcurrentNodeSet, FlipGraph, Insertion, NodePair};
use crate::error::FlipGraphError;
use crate::geometry::PointSet;
use crate::numeric::Scalar;
use crate::operations::triangulation::Triangulation;

/// Worker and budget settings for [`ConcurrentFlipGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorationConfig {
    pub workers: usize,
    /// Upper bound on expanded nodes; `None` explores everything.
    pub max_expansions: Option<usize>,
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            workers: rayon::current_num_threads().max(1),
            max_expansions: None,
        }
    }
}

impl ExplorationConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: Option<usize>) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    fn shard_count(&self) -> usize {
        (self.workers * 4).next_power_of_two().max(16)
    }
}

const NO_WORKER: usize = usize::MAX;

/// State shared by every task of one exploration.
struct Exploration<T: Scalar> {
    nodes: ConcurrentNodeSet<T>,
    edges: ConcurrentEdgeSet,
    limit: Option<usize>,
    expansions: AtomicUsize,
    truncated: AtomicBool,
    aborted: AtomicBool,
    panicked: AtomicUsize,
}

impl<T: Scalar> Exploration<T> {
    /// Takes one unit of the expansion budget.
    fn claim(&self) -> bool {
        let taken = self.expansions.fetch_add(1, Ordering::Relaxed);
        if self.limit.is_some_and(|cap| taken >= cap) {
            self.truncated.store(true, Ordering::Relaxed);
            return false;
        }
        true
    }
}

/// Stops the remaining tasks when an expansion unwinds.
struct PanicGuard<'a, T: Scalar> {
    exploration: &'a Exploration<T>,
}

impl<T: Scalar> Drop for PanicGuard<'_, T> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.exploration.aborted.store(true, Ordering::Release);
            let worker = rayon::current_thread_index().unwrap_or(0);
            let _ = self.exploration.panicked.compare_exchange(
                NO_WORKER,
                worker,
                Ordering::AcqRel,
                Ordering::Acquire,
            );
        }
    }
}

fn expand<'s, T: Scalar>(
    scope: &Scope<'s>,
    exploration: &'s Exploration<T>,
    id: usize,
    node: Arc<Triangulation<T>>,
) {
    if exploration.aborted.load(Ordering::Acquire) || !exploration.claim() {
        return;
    }
    let _guard = PanicGuard { exploration };

    for edge in node.flippable_edges() {
        let Some(next) = node.flipped(edge) else {
            continue;
        };
        let insertion = exploration.nodes.insert(next);
        exploration.edges.insert(NodePair::new(id, insertion.id()));
        if let Insertion::Inserted(next_id, next) = insertion {
            scope.spawn(move |scope| expand(scope, exploration, next_id, next));
        }
    }
}

/// Flip graph explorer running on a dedicated `rayon` thread pool.
///
/// Node ids depend on scheduling; the node and edge sets do not.
#[derive(Debug, Clone, Default)]
pub struct ConcurrentFlipGraph {
    config: ExplorationConfig,
}

impl ConcurrentFlipGraph {
    pub fn new(config: ExplorationConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &ExplorationConfig {
        &self.config
    }

    pub fn from_points<T: Scalar>(
        &self,
        points: Arc<PointSet<T>>,
    ) -> Result<FlipGraph<T>, FlipGraphError> {
        self.generate(Triangulation::build(points)?)
    }

    /// Explores every triangulation reachable from `initial`, which becomes node 0.
    pub fn generate<T: Scalar>(
        &self,
        initial: Triangulation<T>,
    ) -> Result<FlipGraph<T>, FlipGraphError> {
        let workers = self.config.workers;
        if workers == 0 {
            return Err(FlipGraphError::NoWorkers);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("flipgraph-worker-{i}"))
            .build()
            .map_err(FlipGraphError::ThreadPool)?;

        let shards = self.config.shard_count();
        let (nodes, root) = ConcurrentNodeSet::seeded(shards, initial);
        let exploration = Exploration {
            nodes,
            edges: ConcurrentEdgeSet::new(shards),
            limit: self.config.max_expansions,
            expansions: AtomicUsize::new(0),
            truncated: AtomicBool::new(false),
            aborted: AtomicBool::new(false),
            panicked: AtomicUsize::new(NO_WORKER),
        };

        info!(workers, max_expansions = ?self.config.max_expansions, "exploring flip graph");

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pool.scope(|scope| expand(scope, &exploration, 0, root));
        }));
        if outcome.is_err() {
            let worker = match exploration.panicked.load(Ordering::Acquire) {
                NO_WORKER => 0,
                worker => worker,
            };
            return Err(FlipGraphError::WorkerPanicked { worker });
        }

        let expansions = exploration
            .expansions
            .load(Ordering::Relaxed)
            .min(self.config.max_expansions.unwrap_or(usize::MAX));
        debug!(expansions, "concurrent exploration finished");

        let complete = !exploration.truncated.load(Ordering::Relaxed);
        if !complete {
            warn!("expansion cap reached, flip graph is partial");
        }
        let graph = FlipGraph::from_parts(
            exploration.nodes.into_nodes(),
            exploration.edges.into_set(),
            complete,
        );
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            complete,
            "flip graph explored"
        );
        Ok(graph)
    }
}
