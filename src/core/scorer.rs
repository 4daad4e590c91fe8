//! Compatibility scoring rules
//!
//! Pure functions from identity pairs to scores and tiers. The element
//! side scores the generating/overcoming cycles asymmetrically (being fed
//! by a partner is worth slightly less than feeding them), the type side
//! comes from the affinity table, and the combined score weighs the two
//! halves equally.

use crate::types::{CompatTier, Element, Mbti};
use crate::{
    SCORE_GENERATED_BY, SCORE_GENERATES, SCORE_NEUTRAL, SCORE_OVERCOMES, SCORE_OVERCOME_BY,
    SCORE_SAME_ELEMENT, TIER_HEAVEN_SENT_MIN, TIER_KINDRED_MBTI_MIN, TIER_KINDRED_TOTAL_MIN,
    TIER_OPPOSITE_ELEMENT_MIN,
};

/// Element-cycle score for `a` looking at partner `b`.
///
/// Asymmetric on purpose: a-generates-b outranks b-generates-a, and
/// a-overcomes-b is the worst seat at the table.
pub fn element_score(a: Element, b: Element) -> u32 {
    if a == b {
        SCORE_SAME_ELEMENT
    } else if a.generates() == b {
        SCORE_GENERATES
    } else if b.generates() == a {
        SCORE_GENERATED_BY
    } else if a.overcomes() == b {
        SCORE_OVERCOMES
    } else if b.overcomes() == a {
        SCORE_OVERCOME_BY
    } else {
        SCORE_NEUTRAL
    }
}

/// Equal-weight combination of the two halves, rounded half-up
pub fn combine_scores(element: u32, mbti: u32) -> u32 {
    (element + mbti + 1) / 2
}

/// Tier for a scored pair.
///
/// The opposite-types rule is checked before the score ladder: a pair
/// whose four letters all differ but whose elements still feed each other
/// lands in its own tier no matter how high the total climbs.
pub fn compat_tier(a: Mbti, b: Mbti, element: u32, mbti: u32, total: u32) -> CompatTier {
    if a.is_opposite(b) && element >= TIER_OPPOSITE_ELEMENT_MIN {
        CompatTier::LoveHateSoulmates
    } else if total >= TIER_HEAVEN_SENT_MIN {
        CompatTier::HeavenSent
    } else if total >= TIER_KINDRED_TOTAL_MIN || mbti >= TIER_KINDRED_MBTI_MIN {
        CompatTier::KindredSpirits
    } else {
        CompatTier::BusinessPartners
    }
}

// =============================================================================
// TESTS
// =============================================================================
