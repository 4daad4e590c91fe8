//! Fortuna: deterministic fortune synthesis, compatibility scoring and
//! lotto number engine
//!
//! Everything date-keyed is reproducible: the same identity on the same
//! calendar day always produces the same result. Only the lotto generator
//! uses ambient randomness, on purpose.

pub mod core;
pub mod types;

// =============================================================================
// ELEMENT SCORING - fixed five-phase cycle scores
// =============================================================================

/// Score for two identical elements
pub const SCORE_SAME_ELEMENT: u32 = 70;

/// Score when the first element generates the second
pub const SCORE_GENERATES: u32 = 90;

/// Score when the second element generates the first
pub const SCORE_GENERATED_BY: u32 = 85;

/// Score when the first element overcomes the second
pub const SCORE_OVERCOMES: u32 = 40;

/// Score when the second element overcomes the first
pub const SCORE_OVERCOME_BY: u32 = 45;

/// Fallback score for pairs outside both cycles.
/// Unreachable with the fixed 5-cycles, but the scorer stays total.
pub const SCORE_NEUTRAL: u32 = 60;

// =============================================================================
// MBTI AFFINITY
// =============================================================================

/// Raw affinity scale ceiling (table values are 0-5)
pub const AFFINITY_MAX: u32 = 5;

/// Raw affinity assumed for pairs absent from the table (both directions)
pub const AFFINITY_DEFAULT: u32 = 2;

// =============================================================================
// TIER THRESHOLDS - greater-or-equal wins the higher tier
// =============================================================================

/// Combined score floor for the heaven-sent tier
pub const TIER_HEAVEN_SENT_MIN: u32 = 90;

/// Combined score floor for the kindred-spirits tier
pub const TIER_KINDRED_TOTAL_MIN: u32 = 70;

/// MBTI score that alone grants the kindred-spirits tier
pub const TIER_KINDRED_MBTI_MIN: u32 = 80;

/// Element score floor for the opposite-but-harmonious special tier
pub const TIER_OPPOSITE_ELEMENT_MIN: u32 = 80;

/// Grade ladder used by MBTI-only matches and the day luck score
pub const GRADE_TOP_MIN: u32 = 80;
pub const GRADE_GOOD_MIN: u32 = 60;
pub const GRADE_AVERAGE_MIN: u32 = 40;

// =============================================================================
// SEEDED STREAM - Park-Miller minimal standard generator
// =============================================================================

/// LCG modulus (2^31 - 1, prime)
pub const LCG_MODULUS: i64 = 2_147_483_647;

/// LCG multiplier (7^5)
pub const LCG_MULTIPLIER: i64 = 16_807;

// =============================================================================
// DOMAINS
// =============================================================================

/// Smallest lotto number
pub const LOTTO_MIN: u8 = 1;

/// Largest lotto number
pub const LOTTO_MAX: u8 = 45;

/// Numbers per lotto set
pub const LOTTO_SET_SIZE: usize = 6;

/// Daily lucky number range (inclusive)
pub const LUCKY_NUMBER_MAX: i64 = 99;

/// Best-match candidates examined per daily fortune
pub const MATCH_CANDIDATES: usize = 10;

/// Minimum saved sets before number recommendations mean anything
pub const RECOMMEND_MIN_SETS: usize = 3;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
