//! The sixteen personality type codes
//!
//! Codes are opaque lookup keys: the only structure the engine reads out of
//! them is the four-letter spelling (for the seed formula and the
//! all-letters-differ comparison) and the temperament group.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::CoreError;

/// One of the sixteen four-letter type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Mbti {
    INTJ,
    INTP,
    ENTJ,
    ENTP,
    INFJ,
    INFP,
    ENFJ,
    ENFP,
    ISTJ,
    ISFJ,
    ESTJ,
    ESFJ,
    ISTP,
    ISFP,
    ESTP,
    ESFP,
}

/// Temperament group, derived from the middle letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MbtiGroup {
    Analyst,
    Diplomat,
    Sentinel,
    Explorer,
}

impl Mbti {
    /// All sixteen codes, in canonical catalog order
    pub const ALL: [Mbti; 16] = [
        Mbti::INTJ,
        Mbti::INTP,
        Mbti::ENTJ,
        Mbti::ENTP,
        Mbti::INFJ,
        Mbti::INFP,
        Mbti::ENFJ,
        Mbti::ENFP,
        Mbti::ISTJ,
        Mbti::ISFJ,
        Mbti::ESTJ,
        Mbti::ESFJ,
        Mbti::ISTP,
        Mbti::ISFP,
        Mbti::ESTP,
        Mbti::ESFP,
    ];

    /// The four-letter code string
    pub fn as_str(&self) -> &'static str {
        match self {
            Mbti::INTJ => "INTJ",
            Mbti::INTP => "INTP",
            Mbti::ENTJ => "ENTJ",
            Mbti::ENTP => "ENTP",
            Mbti::INFJ => "INFJ",
            Mbti::INFP => "INFP",
            Mbti::ENFJ => "ENFJ",
            Mbti::ENFP => "ENFP",
            Mbti::ISTJ => "ISTJ",
            Mbti::ISFJ => "ISFJ",
            Mbti::ESTJ => "ESTJ",
            Mbti::ESFJ => "ESFJ",
            Mbti::ISTP => "ISTP",
            Mbti::ISFP => "ISFP",
            Mbti::ESTP => "ESTP",
            Mbti::ESFP => "ESFP",
        }
    }

    /// Position in the canonical ordering (catalog index component)
    pub fn index(&self) -> usize {
        Mbti::ALL.iter().position(|m| m == self).unwrap_or(0)
    }

    /// Sum of the four ASCII letter codes. Part of the daily seed formula.
    pub fn char_sum(&self) -> u32 {
        self.as_str().bytes().map(u32::from).sum()
    }

    /// How many of the four letters differ from the other code's
    pub fn differing_letters(&self, other: Mbti) -> usize {
        self.as_str()
            .bytes()
            .zip(other.as_str().bytes())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// True when every one of the four letters differs
    pub fn is_opposite(&self, other: Mbti) -> bool {
        self.differing_letters(other) == 4
    }

    /// Temperament group for this code
    pub fn group(&self) -> MbtiGroup {
        let bytes = self.as_str().as_bytes();
        match (bytes[1], bytes[2], bytes[3]) {
            (b'N', b'T', _) => MbtiGroup::Analyst,
            (b'N', b'F', _) => MbtiGroup::Diplomat,
            (b'S', _, b'J') => MbtiGroup::Sentinel,
            _ => MbtiGroup::Explorer,
        }
    }
}

impl std::fmt::Display for Mbti {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mbti {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Mbti::ALL
            .into_iter()
            .find(|m| m.as_str() == code)
            .ok_or_else(|| CoreError::UnknownMbti(s.trim().to_string()))
    }
}

impl std::fmt::Display for MbtiGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MbtiGroup::Analyst => "Analyst",
            MbtiGroup::Diplomat => "Diplomat",
            MbtiGroup::Sentinel => "Sentinel",
            MbtiGroup::Explorer => "Explorer",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// TESTS
// =============================================================================
