//! Lotto set generation and winning checks
//!
//! Generation is the one place this crate wants real unpredictability, so
//! it runs on ambient OS randomness rather than the seeded stream. The
//! `_with_rng` variant takes any `Rng` so tests can pin the outcome.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{CoreError, LottoSet, WinCheck};
use crate::{LOTTO_MAX, LOTTO_MIN, LOTTO_SET_SIZE};

/// Generate `count` sets with ambient randomness
pub fn generate_sets(
    count: usize,
    include: &[u8],
    exclude: &[u8],
) -> Result<Vec<LottoSet>, CoreError> {
    generate_sets_with_rng(&mut rand::thread_rng(), count, include, exclude)
}

/// Generate `count` sets from a caller-supplied source of randomness.
///
/// Excluded numbers never appear. Included numbers are seeded into every
/// set when they are in range and not excluded; ineligible includes are
/// dropped silently, and at most six are kept. Each set comes back in
/// ascending order.
pub fn generate_sets_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    include: &[u8],
    exclude: &[u8],
) -> Result<Vec<LottoSet>, CoreError> {
    let pool: Vec<u8> = (LOTTO_MIN..=LOTTO_MAX).filter(|n| !exclude.contains(n)).collect();
    if pool.len() < LOTTO_SET_SIZE {
        return Err(CoreError::TooFewEligible { eligible: pool.len() });
    }

    let mut seeds: Vec<u8> = Vec::with_capacity(LOTTO_SET_SIZE);
    for &n in include {
        if pool.contains(&n) && !seeds.contains(&n) && seeds.len() < LOTTO_SET_SIZE {
            seeds.push(n);
        }
    }

    let mut sets = Vec::with_capacity(count);
    for _ in 0..count {
        let mut selected = seeds.clone();
        while selected.len() < LOTTO_SET_SIZE {
            let candidates: Vec<u8> =
                pool.iter().copied().filter(|n| !selected.contains(n)).collect();
            // pool has at least six numbers, so candidates is never empty here
            if let Some(&pick) = candidates.choose(rng) {
                selected.push(pick);
            }
        }
        let mut numbers = [0u8; LOTTO_SET_SIZE];
        numbers.copy_from_slice(&selected);
        sets.push(LottoSet::from_unsorted(numbers));
    }

    Ok(sets)
}

/// Compare a set against a draw and its bonus number
pub fn check_winning(set: &LottoSet, draw: &LottoSet, bonus: u8) -> WinCheck {
    let match_count = set.numbers().iter().filter(|n| draw.contains(**n)).count() as u8;
    let has_bonus = set.contains(bonus);

    let rank = match (match_count, has_bonus) {
        (6, _) => Some(1),
        (5, true) => Some(2),
        (5, false) => Some(3),
        (4, _) => Some(4),
        (3, _) => Some(5),
        _ => None,
    };

    WinCheck { match_count, has_bonus, rank }
}

/// Display color band for a ball number
pub fn ball_color_name(n: u8) -> &'static str {
    if n <= 10 {
        "yellow"
    } else if n <= 20 {
        "blue"
    } else if n <= 30 {
        "red"
    } else if n <= 40 {
        "gray"
    } else {
        "green"
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xF0CACC1A)
    }

    #[test]
    fn test_sets_are_valid() {
        let sets = generate_sets_with_rng(&mut rng(), 5, &[], &[]).unwrap();
        assert_eq!(sets.len(), 5);
        for set in &sets {
            let ns = set.numbers();
            assert!(ns.windows(2).all(|w| w[0] < w[1]), "sorted and distinct: {:?}", ns);
            assert!(ns.iter().all(|&n| (1..=45).contains(&n)));
        }
    }

    #[test]
    fn test_exclude_is_honored() {
        let exclude = [1, 2, 3, 4, 5, 10, 20, 30, 40, 45];
        let sets = generate_sets_with_rng(&mut rng(), 20, &[], &exclude).unwrap();
        for set in &sets {
            for n in &exclude {
                assert!(!set.contains(*n), "excluded {} appeared in {:?}", n, set);
            }
        }
    }

    #[test]
    fn test_include_is_seeded_into_every_set() {
        let sets = generate_sets_with_rng(&mut rng(), 10, &[7, 14], &[]).unwrap();
        for set in &sets {
            assert!(set.contains(7) && set.contains(14));
        }
    }

    #[test]
    fn test_ineligible_includes_dropped_silently() {
        // 0 and 46 are out of range, 9 is excluded, 7 is duplicated
        let sets = generate_sets_with_rng(&mut rng(), 5, &[0, 46, 9, 7, 7], &[9]).unwrap();
        for set in &sets {
            assert!(set.contains(7));
            assert!(!set.contains(9));
        }
    }

    #[test]
    fn test_includes_capped_at_six() {
        let sets = generate_sets_with_rng(&mut rng(), 3, &[1, 2, 3, 4, 5, 6, 7, 8], &[]).unwrap();
        for set in &sets {
            assert_eq!(set.numbers(), &[1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_small_pool_is_an_error() {
        let exclude: Vec<u8> = (1..=40).collect();
        let err = generate_sets_with_rng(&mut rng(), 1, &[], &exclude).unwrap_err();
        match err {
            CoreError::TooFewEligible { eligible } => assert_eq!(eligible, 5),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_exactly_six_eligible_is_fine() {
        let exclude: Vec<u8> = (7..=45).collect();
        let sets = generate_sets_with_rng(&mut rng(), 2, &[], &exclude).unwrap();
        for set in &sets {
            assert_eq!(set.numbers(), &[1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_winning_ranks() {
        let draw = LottoSet::from_unsorted([1, 2, 3, 4, 5, 6]);
        let rank = |nums: [u8; 6], bonus: u8| check_winning(&LottoSet::from_unsorted(nums), &draw, bonus).rank;

        assert_eq!(rank([1, 2, 3, 4, 5, 6], 7), Some(1));
        assert_eq!(rank([1, 2, 3, 4, 5, 7], 7), Some(2));
        assert_eq!(rank([1, 2, 3, 4, 5, 40], 7), Some(3));
        assert_eq!(rank([1, 2, 3, 4, 39, 40], 7), Some(4));
        assert_eq!(rank([1, 2, 3, 38, 39, 40], 7), Some(5));
        assert_eq!(rank([1, 2, 37, 38, 39, 40], 7), None);
        // bonus without five hits does not change the rank
        assert_eq!(rank([1, 2, 3, 7, 39, 40], 7), Some(5));
    }

    #[test]
    fn test_ball_color_bands() {
        assert_eq!(ball_color_name(1), "yellow");
        assert_eq!(ball_color_name(10), "yellow");
        assert_eq!(ball_color_name(11), "blue");
        assert_eq!(ball_color_name(20), "blue");
        assert_eq!(ball_color_name(21), "red");
        assert_eq!(ball_color_name(30), "red");
        assert_eq!(ball_color_name(31), "gray");
        assert_eq!(ball_color_name(40), "gray");
        assert_eq!(ball_color_name(41), "green");
        assert_eq!(ball_color_name(45), "green");
    }
}
