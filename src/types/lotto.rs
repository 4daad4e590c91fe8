//! Lotto number sets and history records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{LOTTO_MAX, LOTTO_MIN, LOTTO_SET_SIZE};

/// Six distinct numbers in [1, 45], always stored ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LottoSet(pub [u8; LOTTO_SET_SIZE]);

impl LottoSet {
    /// Build a set from six distinct in-range numbers, sorting them.
    ///
    /// The generator upholds distinctness and range; this constructor
    /// only normalizes order and asserts the invariants in debug builds.
    pub fn from_unsorted(mut numbers: [u8; LOTTO_SET_SIZE]) -> Self {
        numbers.sort_unstable();
        debug_assert!(numbers.windows(2).all(|w| w[0] < w[1]), "duplicate number in set");
        debug_assert!(
            numbers.iter().all(|&n| (LOTTO_MIN..=LOTTO_MAX).contains(&n)),
            "number out of range"
        );
        LottoSet(numbers)
    }

    pub fn numbers(&self) -> &[u8; LOTTO_SET_SIZE] {
        &self.0
    }

    pub fn contains(&self, n: u8) -> bool {
        self.0.contains(&n)
    }

    /// Sum of the six numbers
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&n| u32::from(n)).sum()
    }

    /// Odd-number count (even count is 6 minus this)
    pub fn odd_count(&self) -> u32 {
        self.0.iter().filter(|&&n| n % 2 == 1).count() as u32
    }
}

impl std::fmt::Display for LottoSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|n| format!("{:2}", n)).collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Winning-check outcome for one set against a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinCheck {
    pub match_count: u8,
    pub has_bonus: bool,
    /// 1 (six hits) through 5 (three hits); None below three hits
    pub rank: Option<u8>,
}

/// One saved set. Only `memo` and `favorite` ever change after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LottoRecord {
    pub id: String,
    pub numbers: LottoSet,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    /// Shared by sets saved together in one batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Position within the batch, preserving generation order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_index: Option<u32>,
}

// =============================================================================
// TESTS
// =============================================================================
