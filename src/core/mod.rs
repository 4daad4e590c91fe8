//! Core modules for Fortuna

pub mod affinity;
pub mod api;
pub mod catalog;
pub mod compat;
pub mod fortune;
pub mod history;
pub mod lotto;
pub mod saju;
pub mod scorer;
pub mod seeded;
pub mod stats;

pub use affinity::{mbti_score, raw_affinity};
pub use api::{create_router, run_server};
pub use catalog::{all_characters, character};
pub use compat::{compatibility, mbti_match};
pub use fortune::{daily_fortune, day_luck};
pub use history::HistoryStore;
pub use lotto::{ball_color_name, check_winning, generate_sets, generate_sets_with_rng};
pub use saju::{birth_elements, BirthElements};
pub use scorer::{combine_scores, compat_tier, element_score};
pub use seeded::{daily_seed, date_seed, SeededRandom};
pub use stats::{aggregate, recommend};
