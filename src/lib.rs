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

//! Sweep-hull triangulation of planar point sets and exploration of their
//! flip graphs.
//!
//! A [`Triangulation`] is built from a shared [`PointSet`] and supports
//! edge flips across convex quadrilaterals. [`FlipGraph`] enumerates every
//! triangulation reachable by flips, either on the calling thread or on a
//! worker pool through [`ConcurrentFlipGraph`].

pub mod error;
pub mod flip_graph;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod mesh;
pub mod numeric;
pub mod operations;

pub use error::{FlipGraphError, InputError, TopologyError, TriangulationError};
pub use flip_graph::{ConcurrentFlipGraph, ExplorationConfig, FlipGraph, NodePair};
pub use geometry::{Point2, PointSet};
pub use mesh::{Edge, Triangle};
pub use numeric::{Scalar, Tolerance};
pub use operations::{FlipOutcome, Triangulation};
