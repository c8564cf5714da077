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

use thiserror::Error;

use crate::mesh::{Edge, Triangle};

/// Malformed point input, reported before any triangulation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InputError {
    /// Coordinates must come in `x y` pairs.
    #[error("expected an even number of coordinates, got {count}")]
    OddCoordinateCount {
        /// Number of coordinates read.
        count: usize,
    },
    /// A token could not be parsed as a floating-point number.
    #[error("invalid coordinate {token:?}")]
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the point in the input sequence.
        index: usize,
    },
}

/// Failure while building a triangulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TriangulationError {
    /// No pivot produced a non-degenerate seed triangle (e.g. all points collinear).
    #[error("no non-degenerate seed triangle found after {attempts} pivot attempts")]
    SeedSelectionExhausted {
        /// Number of pivots tried.
        attempts: usize,
    },
    /// A point in sweep order saw no hull edge, so the radial ordering was violated.
    #[error("point {index} does not see any edge of the current hull")]
    PointNotVisible {
        /// Index of the point in the point set.
        index: usize,
    },
}

/// Inconsistency between the adjacency map, the flippable map and the Euler relations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TopologyError {
    #[error("edge {edge} has {count} incident triangles")]
    EdgeValence { edge: Edge, count: usize },
    #[error("triangle {triangle} is attached to edge {edge} it does not contain")]
    MisattachedTriangle { edge: Edge, triangle: Triangle },
    #[error("edge {edge} of triangle {triangle} is not registered with it")]
    MissingEdge { edge: Edge, triangle: Triangle },
    #[error("flippable entry for edge {edge} is stale")]
    StaleFlippable { edge: Edge },
    #[error(
        "Euler relation violated: {edges} edges (expected {expected_edges}), \
         {triangles} triangles (expected {expected_triangles})"
    )]
    EulerMismatch {
        edges: usize,
        expected_edges: usize,
        triangles: usize,
        expected_triangles: usize,
    },
}

/// Failure while exploring a flip graph.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlipGraphError {
    /// The seed triangulation could not be built.
    #[error(transparent)]
    Triangulation(#[from] TriangulationError),
    /// Concurrent exploration was configured with zero workers.
    #[error("concurrent exploration needs at least one worker")]
    NoWorkers,
    /// The worker pool could not be started.
    #[error("failed to build worker pool")]
    ThreadPool(#[source] rayon::ThreadPoolBuildError),
    /// A worker thread panicked; the partial graph is discarded.
    #[error("worker {worker} panicked during exploration")]
    WorkerPanicked {
        /// Index of the worker.
        worker: usize,
    },
}
