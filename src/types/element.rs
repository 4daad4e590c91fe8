//! The five-phase element cycle

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::CoreError;

/// One of the five elements. Two total relations connect them:
/// `generates` (Wood→Fire→Earth→Metal→Water→Wood) and
/// `overcomes` (Wood→Earth, Fire→Metal, Earth→Water, Metal→Wood, Water→Fire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// All five elements, in cycle order
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position in the canonical ordering (catalog index component)
    pub fn index(&self) -> usize {
        match self {
            Element::Wood => 0,
            Element::Fire => 1,
            Element::Earth => 2,
            Element::Metal => 3,
            Element::Water => 4,
        }
    }

    /// The element this one generates (single 5-cycle, no fixed points)
    pub fn generates(&self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element this one overcomes (single 5-cycle, no fixed points)
    pub fn overcomes(&self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Fire => Element::Metal,
            Element::Earth => Element::Water,
            Element::Metal => Element::Wood,
            Element::Water => Element::Fire,
        }
    }

    /// Traditional Hangul tag for the element
    pub fn hangul(&self) -> char {
        match self {
            Element::Wood => '목',
            Element::Fire => '화',
            Element::Earth => '토',
            Element::Metal => '금',
            Element::Water => '수',
        }
    }

    /// Unicode scalar of the Hangul tag. Part of the daily seed formula,
    /// so this value is load-bearing for cross-run reproducibility.
    pub fn char_code(&self) -> u32 {
        self.hangul() as u32
    }

    /// Get emoji for element
    pub fn emoji(&self) -> &'static str {
        match self {
            Element::Wood => "🌳",
            Element::Fire => "🔥",
            Element::Earth => "🏔️",
            Element::Metal => "⚔️",
            Element::Water => "💧",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Element {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wood" | "목" => Ok(Element::Wood),
            "fire" | "화" => Ok(Element::Fire),
            "earth" | "토" => Ok(Element::Earth),
            "metal" | "금" => Ok(Element::Metal),
            "water" | "수" => Ok(Element::Water),
            other => Err(CoreError::UnknownElement(other.to_string())),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
