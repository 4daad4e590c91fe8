//! History statistics and the cold-number recommendation
//!
//! One sweep over the saved records produces every figure at once. The
//! recommendation inverts the frequency data: it favors the numbers the
//! history has drawn least, one per range bucket first, then globally.

use std::collections::HashMap;

use crate::types::{LottoRecord, LottoStats, PairCount, RangeBucket, RANGE_BUCKETS};
use crate::{LOTTO_MAX, LOTTO_SET_SIZE, RECOMMEND_MIN_SETS};

/// Aggregate statistics over the record history, optionally restricted to
/// favorites
pub fn aggregate(records: &[LottoRecord], favorites_only: bool) -> LottoStats {
    let picked: Vec<&LottoRecord> =
        records.iter().filter(|r| !favorites_only || r.favorite).collect();

    let mut frequency = vec![0u32; usize::from(LOTTO_MAX)];
    let mut pair_counts: HashMap<(u8, u8), u32> = HashMap::new();
    let mut ranges: Vec<RangeBucket> = RANGE_BUCKETS
        .iter()
        .map(|&(min, max)| RangeBucket {
            label: format!("{}-{}", min, max),
            min,
            max,
            count: 0,
        })
        .collect();
    let mut odd = 0u32;
    let mut even = 0u32;
    let mut sums = Vec::with_capacity(picked.len());

    for record in &picked {
        let numbers = record.numbers.numbers();
        for &n in numbers {
            frequency[usize::from(n) - 1] += 1;
            if let Some(bucket) = ranges.iter_mut().find(|b| b.min <= n && n <= b.max) {
                bucket.count += 1;
            }
        }
        odd += record.numbers.odd_count();
        even += LOTTO_SET_SIZE as u32 - record.numbers.odd_count();
        sums.push(record.numbers.sum());

        // sets are ascending, so (numbers[i], numbers[j]) is already ordered
        for i in 0..numbers.len() {
            for j in (i + 1)..numbers.len() {
                *pair_counts.entry((numbers[i], numbers[j])).or_insert(0) += 1;
            }
        }
    }

    let mut pairs: Vec<PairCount> = pair_counts
        .into_iter()
        .map(|((a, b), count)| PairCount { a, b, count })
        .collect();
    pairs.sort_by(|x, y| y.count.cmp(&x.count).then(x.a.cmp(&y.a)).then(x.b.cmp(&y.b)));

    let sum_mean = if sums.is_empty() {
        0.0
    } else {
        f64::from(sums.iter().sum::<u32>()) / sums.len() as f64
    };

    LottoStats {
        sets_counted: picked.len(),
        favorites_only,
        frequency,
        pairs,
        ranges,
        odd,
        even,
        sums,
        sum_mean,
    }
}

/// Recommend a cold-number set from the aggregated history.
///
/// Empty until the history holds enough sets to mean anything. Picks the
/// least-drawn number from each range bucket (ties to the smaller
/// number), tops up from the global cold list, and returns at most six
/// numbers in ascending order.
pub fn recommend(stats: &LottoStats) -> Vec<u8> {
    if stats.sets_counted < RECOMMEND_MIN_SETS {
        return Vec::new();
    }

    let mut picks: Vec<u8> = Vec::with_capacity(LOTTO_SET_SIZE);
    for &(min, max) in RANGE_BUCKETS.iter() {
        let coldest = (min..=max).min_by_key(|&n| (stats.count_of(n), n));
        if let Some(n) = coldest {
            picks.push(n);
        }
    }

    for n in stats.cold_numbers(usize::from(LOTTO_MAX)) {
        if picks.len() >= LOTTO_SET_SIZE {
            break;
        }
        if !picks.contains(&n) {
            picks.push(n);
        }
    }

    picks.sort_unstable();
    picks
}

// =============================================================================
// TESTS
// =============================================================================
