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

//! Process-stable hashing used for structural identity of triangulations.
//!
//! `std`'s default hasher is randomly keyed per map, so fixed-seed `ahash`
//! state is used instead: two triangulations built in different threads or
//! maps must agree on their hash.

use std::hash::Hash;
use std::sync::LazyLock;

use ahash::RandomState;

static STABLE_STATE: LazyLock<RandomState> = LazyLock::new(|| {
    RandomState::with_seeds(
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    )
});

const GOLDEN: u64 = 0x9e37_79b9;
const MIX: u64 = 0x0e98_46af_9b1a_615d;

#[inline]
pub fn hash_one<H: Hash + ?Sized>(value: &H) -> u64 {
    STABLE_STATE.hash_one(value)
}

/// Avalanche mixer applied before order-independent summation.
#[inline]
pub fn mix(mut x: u64) -> u64 {
    x ^= x >> 32;
    x = x.wrapping_mul(MIX);
    x ^= x >> 32;
    x = x.wrapping_mul(MIX);
    x ^= x >> 28;
    x
}

/// Order-dependent combination of `seed` with `hash`.
#[inline]
pub fn combine(seed: u64, hash: u64) -> u64 {
    seed ^ hash
        .wrapping_add(GOLDEN)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Contribution of one element to an order-independent (wrapping sum) hash.
///
/// Adding the terms of a set in any order, or removing one by wrapping
/// subtraction, yields the same accumulator.
#[inline]
pub fn unordered_term<H: Hash + ?Sized>(value: &H) -> u64 {
    mix(GOLDEN.wrapping_add(hash_one(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_sum_ignores_order() {
        let a = [(0usize, 1usize), (1, 2), (0, 2)];
        let forward = a
            .iter()
            .fold(0u64, |acc, e| acc.wrapping_add(unordered_term(e)));
        let backward = a
            .iter()
            .rev()
            .fold(0u64, |acc, e| acc.wrapping_add(unordered_term(e)));
        assert_eq!(forward, backward);
    }

    #[test]
    fn removal_undoes_insertion() {
        let base = unordered_term(&(3usize, 4usize));
        let acc = base.wrapping_add(unordered_term(&(5usize, 6usize)));
        assert_eq!(acc.wrapping_sub(unordered_term(&(5usize, 6usize))), base);
    }

    #[test]
    fn combine_is_order_dependent() {
        let (x, y) = (hash_one(&1u32), hash_one(&2u32));
        assert_ne!(combine(combine(0, x), y), combine(combine(0, y), x));
    }
}
