//! Core types for Fortuna

mod character;
mod compat;
mod element;
mod error;
mod fortune;
mod lotto;
mod mbti;
mod stats;

pub use character::Character;
pub use compat::{CompatTier, CompatibilityReport, LuckGrade, MatchGrade, MbtiMatch, PartnerRef};
pub use element::Element;
pub use error::CoreError;
pub use fortune::{BestMatch, DailyFortune, DayLuck};
pub use lotto::{LottoRecord, LottoSet, WinCheck};
pub use mbti::{Mbti, MbtiGroup};
pub use stats::{LottoStats, PairCount, RangeBucket, RANGE_BUCKETS};
