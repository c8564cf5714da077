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

//! Hash-bucketed node lookup, plain and sharded for concurrent exploration.
//!
//! Structural hashes may collide, so every bucket holds all nodes sharing a
//! hash and membership is confirmed with `==`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ahash::{AHashMap, AHashSet};
use smallvec::SmallVec;

use super::NodePair;
use crate::numeric::Scalar;
use crate::operations::triangulation::Triangulation;

/// Structural hash to node ids.
#[derive(Debug, Clone, Default)]
pub struct NodeIndex {
    buckets: AHashMap<u64, SmallVec<[usize; 1]>>,
}

impl NodeIndex {
    pub fn insert(&mut self, hash: u64, id: usize) {
        self.buckets.entry(hash).or_default().push(id);
    }

    /// First id in the `hash` bucket accepted by `is_same`.
    pub fn find(&self, hash: u64, mut is_same: impl FnMut(usize) -> bool) -> Option<usize> {
        self.buckets
            .get(&hash)?
            .iter()
            .copied()
            .find(|&id| is_same(id))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.values().map(SmallVec::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Result of [`ConcurrentNodeSet::insert`].
#[derive(Debug)]
pub enum Insertion<T: Scalar> {
    /// First occurrence; the caller owns its expansion.
    Inserted(usize, Arc<Triangulation<T>>),
    Existing(usize),
}

impl<T: Scalar> Insertion<T> {
    #[inline]
    pub fn id(&self) -> usize {
        match self {
            Insertion::Inserted(id, _) | Insertion::Existing(id) => *id,
        }
    }
}

type Bucket<T> = SmallVec<[(usize, Arc<Triangulation<T>>); 1]>;

fn lock<S>(shard: &Mutex<S>) -> MutexGuard<'_, S> {
    shard.lock().unwrap_or_else(PoisonError::into_inner)
}

fn shard_of(hash: u64, shards: usize) -> usize {
    // ahash output is uniform in the high bits as well
    (hash >> 32) as usize % shards
}

/// Node set shared between exploration workers.
///
/// Ids are handed out in insertion order and are dense: after exploration
/// they index directly into the node vector.
#[derive(Debug)]
pub struct ConcurrentNodeSet<T: Scalar> {
    shards: Box<[Mutex<AHashMap<u64, Bucket<T>>>]>,
    next_id: AtomicUsize,
}

impl<T: Scalar> ConcurrentNodeSet<T> {
    pub fn new(shards: usize) -> Self {
        let shards = shards.max(1);
        Self {
            shards: (0..shards).map(|_| Mutex::new(AHashMap::new())).collect(),
            next_id: AtomicUsize::new(0),
        }
    }

    /// Set holding only `root`, with id 0.
    pub fn seeded(shards: usize, root: Triangulation<T>) -> (Self, Arc<Triangulation<T>>) {
        let set = Self::new(shards);
        let root = Arc::new(root);
        let hash = root.structural_hash();
        lock(&set.shards[shard_of(hash, set.shards.len())])
            .entry(hash)
            .or_default()
            .push((0, Arc::clone(&root)));
        set.next_id.store(1, Ordering::Release);
        (set, root)
    }

    /// Inserts `node` unless an equal triangulation is already present.
    ///
    /// Lookup and insertion happen under one shard lock, so exactly one
    /// caller receives [`Insertion::Inserted`] for each distinct node.
    pub fn insert(&self, node: Triangulation<T>) -> Insertion<T> {
        let hash = node.structural_hash();
        let mut shard = lock(&self.shards[shard_of(hash, self.shards.len())]);
        let bucket = shard.entry(hash).or_default();
        if let Some((id, _)) = bucket.iter().find(|(_, other)| **other == node) {
            return Insertion::Existing(*id);
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let node = Arc::new(node);
        bucket.push((id, Arc::clone(&node)));
        Insertion::Inserted(id, node)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.next_id.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nodes ordered by id.
    pub fn into_nodes(self) -> Vec<Triangulation<T>> {
        let mut all: Vec<(usize, Arc<Triangulation<T>>)> = Vec::new();
        for shard in self.shards.into_vec() {
            let map = shard.into_inner().unwrap_or_else(PoisonError::into_inner);
            all.extend(map.into_values().flatten());
        }
        all.sort_unstable_by_key(|(id, _)| *id);
        all.into_iter()
            .map(|(_, node)| Arc::try_unwrap(node).unwrap_or_else(|shared| (*shared).clone()))
            .collect()
    }
}

/// Edge set shared between exploration workers.
#[derive(Debug)]
pub struct ConcurrentEdgeSet {
    shards: Box<[Mutex<AHashSet<NodePair>>]>,
}

impl ConcurrentEdgeSet {
    pub fn new(shards: usize) -> Self {
        Self {
            shards: (0..shards.max(1)).map(|_| Mutex::new(AHashSet::new())).collect(),
        }
    }

    /// Returns `true` if the pair was not present yet.
    pub fn insert(&self, pair: NodePair) -> bool {
        let slot = (pair.first() ^ pair.second().rotate_left(17)) % self.shards.len();
        lock(&self.shards[slot]).insert(pair)
    }

    pub fn into_set(self) -> AHashSet<NodePair> {
        let mut out = AHashSet::new();
        for shard in self.shards.into_vec() {
            out.extend(shard.into_inner().unwrap_or_else(PoisonError::into_inner));
        }
        out
    }
}
