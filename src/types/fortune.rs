//! Daily synthesis result records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Element, LuckGrade, Mbti};

/// Best-match companion chosen for the day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestMatch {
    pub mbti: Mbti,
    pub element: Element,
    pub character_name: String,
    pub character_emoji: String,
    /// Combined compatibility score against the fortune's identity
    pub score: u32,
}

/// One day's fortune for one identity. Created fresh per call, never
/// mutated; regenerating with the same identity and date reproduces it
/// byte for byte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyFortune {
    pub date: NaiveDate,
    pub mbti: Mbti,
    pub element: Element,
    pub character_name: String,
    pub character_emoji: String,
    pub message: String,
    pub lucky_time: String,
    pub lucky_action: String,
    pub avoid_action: String,
    pub lucky_color: String,
    /// In [1, 99]
    pub lucky_number: u32,
    pub best_match: Option<BestMatch>,
}

impl DailyFortune {
    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "date={} | who={}/{} | number={} | color={} | time={}",
            self.date, self.mbti, self.element, self.lucky_number, self.lucky_color,
            self.lucky_time
        )
    }
}

/// Date-keyed luck reading, identity-free
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayLuck {
    pub date: NaiveDate,
    /// In [1, 100]
    pub score: u32,
    pub grade: LuckGrade,
    pub message: String,
    pub lucky_item: String,
    /// In [1, 45]
    pub lucky_number: u32,
}

impl DayLuck {
    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "date={} | score={} | grade={} | number={}",
            self.date,
            self.score,
            self.grade.label(),
            self.lucky_number
        )
    }
}
