//! Aggregate statistics over the saved-set history
//!
//! Derived values only: stats are recomputed on demand from the record
//! collection and never persisted.

use serde::{Deserialize, Serialize};

use crate::{LOTTO_MAX, LOTTO_MIN};

/// The five fixed range buckets
pub const RANGE_BUCKETS: [(u8, u8); 5] = [(1, 10), (11, 20), (21, 30), (31, 40), (41, 45)];

/// Occurrence count for one range bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeBucket {
    pub label: String,
    pub min: u8,
    pub max: u8,
    pub count: u32,
}

/// Co-occurrence count for one unordered number pair (a < b)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCount {
    pub a: u8,
    pub b: u8,
    pub count: u32,
}

/// Everything the stats pass computes in one sweep over the history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LottoStats {
    /// How many sets went into the pass
    pub sets_counted: usize,
    /// Whether the pass was restricted to favorites
    pub favorites_only: bool,
    /// Occurrences per number; index 0 holds number 1, index 44 holds 45
    pub frequency: Vec<u32>,
    /// Non-zero unordered pairs, most frequent first (ties by number order)
    pub pairs: Vec<PairCount>,
    /// The five range buckets, in order
    pub ranges: Vec<RangeBucket>,
    pub odd: u32,
    pub even: u32,
    /// Per-set sums, history order
    pub sums: Vec<u32>,
    /// Mean of `sums`; 0.0 for an empty history (never an error)
    pub sum_mean: f64,
}

impl LottoStats {
    /// Occurrence count for a number in [1, 45]
    pub fn count_of(&self, n: u8) -> u32 {
        debug_assert!((LOTTO_MIN..=LOTTO_MAX).contains(&n));
        self.frequency[usize::from(n) - 1]
    }

    /// The `k` most frequent numbers, ties by numeric order
    pub fn hot_numbers(&self, k: usize) -> Vec<u8> {
        let mut order: Vec<u8> = (LOTTO_MIN..=LOTTO_MAX).collect();
        order.sort_by(|&x, &y| self.count_of(y).cmp(&self.count_of(x)).then(x.cmp(&y)));
        order.truncate(k);
        order
    }

    /// The `k` least frequent numbers, ties by numeric order
    pub fn cold_numbers(&self, k: usize) -> Vec<u8> {
        let mut order: Vec<u8> = (LOTTO_MIN..=LOTTO_MAX).collect();
        order.sort_by(|&x, &y| self.count_of(x).cmp(&self.count_of(y)).then(x.cmp(&y)));
        order.truncate(k);
        order
    }

    /// The `k` most frequent pairs
    pub fn top_pairs(&self, k: usize) -> &[PairCount] {
        &self.pairs[..self.pairs.len().min(k)]
    }
}
