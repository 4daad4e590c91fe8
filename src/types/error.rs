//! Recoverable error type for the engine
//!
//! Corrupt static tables are a different animal: those are programming
//! errors and the closed enums plus the indexed catalog make them
//! unrepresentable, so nothing here models them.

use thiserror::Error;

/// Errors the caller can act on: bad user input or an over-constrained
/// request. No retry policy exists anywhere; retrying the same inputs
/// yields the same outcome.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Exclude list left fewer than six eligible numbers
    #[error("exclude list leaves only {eligible} eligible numbers; at least 6 are required")]
    TooFewEligible { eligible: usize },

    /// Unrecognized four-letter type code
    #[error("unknown MBTI code: {0:?}")]
    UnknownMbti(String),

    /// Unrecognized element name
    #[error("unknown element: {0:?} (expected wood/fire/earth/metal/water)")]
    UnknownElement(String),

    /// Date string did not parse
    #[error("invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// A hand-entered set or draw broke the six-distinct-in-range rule
    #[error("invalid number set: {0}")]
    InvalidSet(String),

    /// History record id not present in the store
    #[error("no history record with id {0:?}")]
    RecordNotFound(String),

    /// History file could not be read or written
    #[error("history store I/O error: {0}")]
    Storage(#[from] std::io::Error),

    /// History file exists but does not parse
    #[error("history store is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}
