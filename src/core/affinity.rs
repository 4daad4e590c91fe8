//! Type-pair affinity table
//!
//! Sparse hand-tuned table of affinity values on a 0-5 scale. Each type
//! row lists its six notable partners; every pair the table does not
//! mention falls back to a neutral default. Lookup tries (a, b) first and
//! then the mirrored key, so rows only need to be written once.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::types::Mbti;
use crate::{AFFINITY_DEFAULT, AFFINITY_MAX};

use Mbti::*;

/// Hand-tuned pair entries, six per type
const AFFINITY_ENTRIES: [(Mbti, Mbti, u8); 96] = [
    (INTJ, ENTP, 5), (INTJ, ENFP, 5), (INTJ, INTP, 4), (INTJ, INFJ, 4), (INTJ, ENTJ, 4), (INTJ, INTJ, 3),
    (INTP, ENTJ, 5), (INTP, ENFJ, 5), (INTP, INTJ, 4), (INTP, INFP, 4), (INTP, ENTP, 4), (INTP, INTP, 3),
    (ENTJ, INTP, 5), (ENTJ, INFP, 5), (ENTJ, ENTP, 4), (ENTJ, INTJ, 4), (ENTJ, ENFJ, 4), (ENTJ, ENTJ, 3),
    (ENTP, INTJ, 5), (ENTP, INFJ, 5), (ENTP, INTP, 4), (ENTP, ENTJ, 4), (ENTP, ENFP, 4), (ENTP, ENTP, 3),
    (INFJ, ENTP, 5), (INFJ, ENFP, 5), (INFJ, INFP, 4), (INFJ, INTJ, 4), (INFJ, ENFJ, 4), (INFJ, INFJ, 3),
    (INFP, ENFJ, 5), (INFP, ENTJ, 5), (INFP, INFJ, 4), (INFP, INTP, 4), (INFP, ENFP, 4), (INFP, INFP, 3),
    (ENFJ, INFP, 5), (ENFJ, ISFP, 5), (ENFJ, INTP, 5), (ENFJ, INFJ, 4), (ENFJ, ENTJ, 4), (ENFJ, ENFJ, 3),
    (ENFP, INTJ, 5), (ENFP, INFJ, 5), (ENFP, INTP, 4), (ENFP, ENTP, 4), (ENFP, INFP, 4), (ENFP, ENFP, 3),
    (ISTJ, ESTP, 5), (ISTJ, ESFP, 5), (ISTJ, ISFJ, 4), (ISTJ, ESTJ, 4), (ISTJ, ISTP, 3), (ISTJ, ISTJ, 3),
    (ISFJ, ESFP, 5), (ISFJ, ESTP, 5), (ISFJ, ISTJ, 4), (ISFJ, ESFJ, 4), (ISFJ, ISFP, 3), (ISFJ, ISFJ, 3),
    (ESTJ, ISTP, 5), (ESTJ, ISFP, 5), (ESTJ, ISTJ, 4), (ESTJ, ESTP, 4), (ESTJ, ESFJ, 4), (ESTJ, ESTJ, 3),
    (ESFJ, ISFP, 5), (ESFJ, ISTP, 5), (ESFJ, ISFJ, 4), (ESFJ, ESTJ, 4), (ESFJ, ESFP, 4), (ESFJ, ESFJ, 3),
    (ISTP, ESTJ, 5), (ISTP, ESFJ, 5), (ISTP, ESTP, 4), (ISTP, ISTJ, 3), (ISTP, ISFP, 3), (ISTP, ISTP, 3),
    (ISFP, ENFJ, 5), (ISFP, ESFJ, 5), (ISFP, ESTJ, 5), (ISFP, ESFP, 4), (ISFP, ISFJ, 3), (ISFP, ISFP, 3),
    (ESTP, ISTJ, 5), (ESTP, ISFJ, 5), (ESTP, ISTP, 4), (ESTP, ESTJ, 4), (ESTP, ESFP, 4), (ESTP, ESTP, 3),
    (ESFP, ISTJ, 5), (ESFP, ISFJ, 5), (ESFP, ISFP, 4), (ESFP, ESTP, 4), (ESFP, ESFJ, 4), (ESFP, ESFP, 3),
];

lazy_static! {
    static ref AFFINITY: HashMap<(Mbti, Mbti), u8> = {
        let mut map = HashMap::with_capacity(AFFINITY_ENTRIES.len());
        for &(a, b, v) in AFFINITY_ENTRIES.iter() {
            map.insert((a, b), v);
        }
        map
    };
}

/// Raw affinity on the 0-5 scale. Tries (a, b), then (b, a), then the
/// neutral default.
pub fn raw_affinity(a: Mbti, b: Mbti) -> u32 {
    AFFINITY
        .get(&(a, b))
        .or_else(|| AFFINITY.get(&(b, a)))
        .map(|&v| u32::from(v))
        .unwrap_or(AFFINITY_DEFAULT)
}

/// Affinity rescaled to the 0-100 band
pub fn mbti_score(a: Mbti, b: Mbti) -> u32 {
    raw_affinity(a, b) * 100 / AFFINITY_MAX
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pairs() {
        assert_eq!(raw_affinity(INTJ, ENTP), 5);
        assert_eq!(raw_affinity(INTJ, ENFP), 5);
        assert_eq!(raw_affinity(ISTP, ISTJ), 3);
        assert_eq!(raw_affinity(ENFJ, INTP), 5);
    }

    #[test]
    fn test_mirrored_lookup() {
        // ENTP's row holds (ENTP, INTJ); the reverse order must match
        assert_eq!(raw_affinity(ENTP, INTJ), raw_affinity(INTJ, ENTP));
        for a in Mbti::ALL {
            for b in Mbti::ALL {
                assert_eq!(raw_affinity(a, b), raw_affinity(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_unlisted_pair_defaults() {
        // INTJ row never mentions ESFP
        assert_eq!(raw_affinity(INTJ, ESFP), AFFINITY_DEFAULT);
        assert_eq!(mbti_score(INTJ, ESFP), 40);
    }

    #[test]
    fn test_self_pairs_listed() {
        for m in Mbti::ALL {
            assert_eq!(raw_affinity(m, m), 3, "{m} with itself");
        }
    }

    #[test]
    fn test_score_scale() {
        assert_eq!(mbti_score(INTJ, ENTP), 100);
        assert_eq!(mbti_score(INTJ, INTP), 80);
        assert_eq!(mbti_score(INTJ, INTJ), 60);
    }

    #[test]
    fn test_table_is_complete_rows() {
        // every type contributes exactly six entries as the row owner
        for m in Mbti::ALL {
            let owned = AFFINITY_ENTRIES.iter().filter(|&&(a, _, _)| a == m).count();
            assert_eq!(owned, 6, "{m} row");
        }
    }
}
