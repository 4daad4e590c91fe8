//! Catalog character records

use serde::{Deserialize, Serialize};

use crate::types::{Element, Mbti, MbtiGroup};

/// One of the 80 precomputed characters, keyed by (MBTI, element).
/// Built once at startup and never mutated; display strings are opaque
/// content as far as the engine is concerned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub mbti: Mbti,
    pub element: Element,
    pub group: MbtiGroup,
    /// Display name, e.g. "Forest Strategist"
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub charm_points: Vec<String>,
    /// Daily fortune message templates; the synthesizer draws one per day
    pub fortune_templates: Vec<String>,
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({}/{})", self.emoji, self.name, self.mbti, self.element)
    }
}
