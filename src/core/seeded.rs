//! Seeded stream: the reproducibility primitive
//!
//! A Park-Miller multiplicative LCG whose whole state is one integer.
//! Identical seeds replay identical sequences, which is what makes a daily
//! fortune stable across repeated loads on the same day. This is NOT a
//! security primitive and must never be used where unpredictability
//! matters; the lotto generator uses ambient randomness instead.

use chrono::{Datelike, NaiveDate};

use crate::types::{Element, Mbti};
use crate::{LCG_MODULUS, LCG_MULTIPLIER};

/// Deterministic pseudo-random stream over a single integer of state
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: i64,
}

impl SeededRandom {
    /// Create a stream. The seed is normalized into (0, modulus) before
    /// first use, so zero and negative inputs are fine.
    pub fn new(seed: i64) -> Self {
        let mut seed = seed % LCG_MODULUS;
        if seed <= 0 {
            seed += LCG_MODULUS - 1;
        }
        Self { seed }
    }

    /// Next value in [0, 1).
    ///
    /// The type deliberately does not implement `Iterator`; the stream is
    /// infinite and every call advances shared state, so the method-call
    /// form keeps that explicit at the call site.
    pub fn next(&mut self) -> f64 {
        self.seed = (self.seed * LCG_MULTIPLIER) % LCG_MODULUS;
        (self.seed - 1) as f64 / (LCG_MODULUS - 1) as f64
    }

    /// Next integer in [min, max] inclusive
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        (self.next() * (max - min + 1) as f64).floor() as i64 + min
    }

    /// Pick one element. Panics on an empty slice; callers draw from the
    /// fixed non-empty content tables.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = self.next_int(0, items.len() as i64 - 1) as usize;
        &items[idx]
    }

    /// Fisher-Yates permutation of a copy of `items`
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = self.next_int(0, i as i64) as usize;
            out.swap(i, j);
        }
        out
    }
}

/// Seed for one identity on one calendar day.
///
/// `year*10000 + month*100 + day + mbti_char_sum*1000 + element_char_code*100`
///
/// Only the calendar date enters the formula; hour, minute and second are
/// discarded upstream so the result is stable for the whole day.
pub fn daily_seed(mbti: Mbti, element: Element, date: NaiveDate) -> i64 {
    let year = i64::from(date.year());
    let month = i64::from(date.month());
    let day = i64::from(date.day());

    year * 10_000
        + month * 100
        + day
        + i64::from(mbti.char_sum()) * 1_000
        + i64::from(element.char_code()) * 100
}

/// Identity-free seed for one calendar day (the day-luck score key)
pub fn date_seed(date: NaiveDate) -> i64 {
    let year = i64::from(date.year());
    let month = i64::from(date.month());
    let day = i64::from(date.day());
    year * 10_000 + month * 100 + day
}

// =============================================================================
// TESTS
// =============================================================================
