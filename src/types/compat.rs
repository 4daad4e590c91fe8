//! Compatibility result records and tier/grade ladders

use serde::{Deserialize, Serialize};

use crate::types::{Element, Mbti};
use crate::{GRADE_AVERAGE_MIN, GRADE_GOOD_MIN, GRADE_TOP_MIN};

/// Qualitative tier of a full couple report.
///
/// `LoveHateSoulmates` is the special case: all four MBTI letters differ
/// but the elements harmonize. It is checked before the score ladder and
/// short-circuits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatTier {
    HeavenSent,
    LoveHateSoulmates,
    KindredSpirits,
    BusinessPartners,
}

impl CompatTier {
    /// Human label for display
    pub fn label(&self) -> &'static str {
        match self {
            CompatTier::HeavenSent => "Heaven-Sent Match",
            CompatTier::LoveHateSoulmates => "Love-Hate Soulmates",
            CompatTier::KindredSpirits => "Kindred Spirits",
            CompatTier::BusinessPartners => "Business Partners",
        }
    }

    /// Get emoji for tier
    pub fn emoji(&self) -> &'static str {
        match self {
            CompatTier::HeavenSent => "💞",
            CompatTier::LoveHateSoulmates => "⚡",
            CompatTier::KindredSpirits => "🤝",
            CompatTier::BusinessPartners => "💼",
        }
    }

    /// One-paragraph reading of the tier
    pub fn blurb(&self) -> &'static str {
        match self {
            CompatTier::HeavenSent => {
                "A match made in heaven. Type and element are in full harmony \
                 and the two of you complete each other; pairings this good are rare."
            }
            CompatTier::LoveHateSoulmates => {
                "Opposite personalities, harmonious elements. Expect friction and \
                 bickering, but just as much to learn from each other; accept the \
                 differences and this becomes a formidable pair."
            }
            CompatTier::KindredSpirits => {
                "A relationship of deep mutual understanding. Conversation flows \
                 and values align; a great friendship that can grow into more."
            }
            CompatTier::BusinessPartners => {
                "Better as colleagues than as romantics. Aim for a practical, \
                 goal-driven partnership and respect what makes you different."
            }
        }
    }
}

impl std::fmt::Display for CompatTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Grade ladder for an MBTI-only match (80/60/40 boundaries)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchGrade {
    Perfect,
    Good,
    Average,
    NeedsEffort,
}

impl MatchGrade {
    /// Derive the grade from a 0-100 score
    pub fn from_score(score: u32) -> Self {
        if score >= GRADE_TOP_MIN {
            MatchGrade::Perfect
        } else if score >= GRADE_GOOD_MIN {
            MatchGrade::Good
        } else if score >= GRADE_AVERAGE_MIN {
            MatchGrade::Average
        } else {
            MatchGrade::NeedsEffort
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchGrade::Perfect => "Perfect Match",
            MatchGrade::Good => "Good Match",
            MatchGrade::Average => "Average Match",
            MatchGrade::NeedsEffort => "Takes Work",
        }
    }

    /// Advice paragraph attached to match descriptions
    pub fn advice(&self) -> &'static str {
        match self {
            MatchGrade::Perfect => {
                "You complement each other beautifully. Respect the differences \
                 and grow together."
            }
            MatchGrade::Good => {
                "Your differences can become your charm. Understanding and \
                 honest talk build something great here."
            }
            MatchGrade::Average => {
                "With some effort this works well. Conversation and compromise \
                 are the keys."
            }
            MatchGrade::NeedsEffort => {
                "You are very different, which means there is a lot to learn. \
                 Accept each other as you are."
            }
        }
    }
}

impl std::fmt::Display for MatchGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Grade ladder for the daily luck score (80/60/40 boundaries)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LuckGrade {
    Jackpot,
    Good,
    Normal,
    Recharging,
}

impl LuckGrade {
    /// Derive the grade from a 1-100 score
    pub fn from_score(score: u32) -> Self {
        if score >= GRADE_TOP_MIN {
            LuckGrade::Jackpot
        } else if score >= GRADE_GOOD_MIN {
            LuckGrade::Good
        } else if score >= GRADE_AVERAGE_MIN {
            LuckGrade::Normal
        } else {
            LuckGrade::Recharging
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LuckGrade::Jackpot => "Jackpot",
            LuckGrade::Good => "Good",
            LuckGrade::Normal => "Normal",
            LuckGrade::Recharging => "Recharging",
        }
    }

    /// Get emoji for grade
    pub fn emoji(&self) -> &'static str {
        match self {
            LuckGrade::Jackpot => "🔥",
            LuckGrade::Good => "✨",
            LuckGrade::Normal => "🌤️",
            LuckGrade::Recharging => "🌙",
        }
    }

}

impl std::fmt::Display for LuckGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Identity half of a couple report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerRef {
    pub mbti: Mbti,
    pub element: Element,
    pub character_name: String,
    pub character_emoji: String,
}

/// Full couple compatibility report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub me: PartnerRef,
    pub partner: PartnerRef,
    /// Equal blend of the two component scores, 0-100
    pub total_score: u32,
    pub mbti_score: u32,
    pub element_score: u32,
    pub tier: CompatTier,
    pub description: String,
}

/// MBTI-only match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MbtiMatch {
    pub mine: Mbti,
    pub partner: Mbti,
    pub score: u32,
    pub grade: MatchGrade,
    pub description: String,
}

// =============================================================================
// TESTS
// =============================================================================
