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

use crate::mesh::NO_POINT;

/// Circular hull frontier stored as an arena indexed by point index.
///
/// `next`/`prev` hold the neighbours of every point currently on the hull;
/// splicing out a run is a constant number of index writes, even when the
/// run wraps past `head`.
#[derive(Debug, Clone)]
pub(crate) struct HullRing {
    next: Vec<usize>,
    prev: Vec<usize>,
    head: usize,
    len: usize,
    scratch: Vec<(usize, bool)>,
}

impl HullRing {
    /// Ring `a -> b -> c -> a` over an arena of `capacity` points.
    pub(crate) fn new(capacity: usize, [a, b, c]: [usize; 3]) -> Self {
        let mut ring = HullRing {
            next: vec![NO_POINT; capacity],
            prev: vec![NO_POINT; capacity],
            head: a,
            len: 3,
            scratch: Vec::new(),
        };
        for (u, v) in [(a, b), (b, c), (c, a)] {
            ring.next[u] = v;
            ring.prev[v] = u;
        }
        ring
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn next(&self, u: usize) -> usize {
        self.next[u]
    }

    /// Hull vertices in ring order starting at `head`.
    #[cfg(test)]
    pub(crate) fn vertices(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.len);
        let mut u = self.head;
        loop {
            out.push(u);
            u = self.next[u];
            if u == self.head {
                break;
            }
        }
        out
    }

    /// First and last vertex of the contiguous run of edges `(u, next(u))`
    /// for which `visible` holds.
    ///
    /// Returns `None` when no edge, or every edge, is visible.
    pub(crate) fn visible_run<F>(&mut self, mut visible: F) -> Option<(usize, usize)>
    where
        F: FnMut(usize, usize) -> bool,
    {
        self.scratch.clear();
        let mut u = self.head;
        loop {
            let v = self.next[u];
            self.scratch.push((u, visible(u, v)));
            u = v;
            if u == self.head {
                break;
            }
        }

        let n = self.scratch.len();
        let start = (0..n).find(|&i| self.scratch[i].1 && !self.scratch[(i + n - 1) % n].1)?;
        let first = self.scratch[start].0;
        let mut k = start;
        while self.scratch[k % n].1 {
            k += 1;
        }
        Some((first, self.scratch[k % n].0))
    }

    /// Replaces the vertices strictly between `first` and `last` by `p`.
    pub(crate) fn splice(&mut self, first: usize, last: usize, p: usize) {
        let mut removed = 0;
        let mut u = self.next[first];
        while u != last {
            let v = self.next[u];
            self.next[u] = NO_POINT;
            self.prev[u] = NO_POINT;
            removed += 1;
            u = v;
        }

        self.next[first] = p;
        self.prev[p] = first;
        self.next[p] = last;
        self.prev[last] = p;
        self.head = p;
        self.len = self.len + 1 - removed;
    }
}
