//! Integration tests for the lotto pipeline
//!
//! Generation through aggregation through recommendation, the way the
//! CLI wires them together.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fortuna::core::{aggregate, check_winning, generate_sets, generate_sets_with_rng, recommend};
use fortuna::types::{LottoRecord, LottoSet};

fn to_records(sets: &[LottoSet]) -> Vec<LottoRecord> {
    sets.iter()
        .enumerate()
        .map(|(i, &numbers)| LottoRecord {
            id: format!("rec_{}", i),
            numbers,
            created_at: Utc::now(),
            memo: None,
            favorite: i % 2 == 0,
            group_id: None,
            line_index: None,
        })
        .collect()
}

#[test]
fn test_ambient_generation_produces_valid_sets() {
    let sets = generate_sets(10, &[], &[]).unwrap();
    assert_eq!(sets.len(), 10);
    for set in &sets {
        assert!(set.numbers().windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_generate_then_aggregate_then_recommend() {
    let mut rng = StdRng::seed_from_u64(20_250_310);
    let sets = generate_sets_with_rng(&mut rng, 8, &[7], &[13]).unwrap();
    let records = to_records(&sets);

    let stats = aggregate(&records, false);
    assert_eq!(stats.sets_counted, 8);
    // every set carries the include, so 7 tops the frequency table
    assert_eq!(stats.count_of(7), 8);
    assert_eq!(stats.hot_numbers(1), vec![7]);
    // the exclude never shows up
    assert_eq!(stats.count_of(13), 0);
    assert_eq!(stats.odd + stats.even, 48);
    assert_eq!(stats.sums.len(), 8);
    assert!(stats.sum_mean > 0.0);

    let picks = recommend(&stats);
    assert_eq!(picks.len(), 6);
    assert!(picks.windows(2).all(|w| w[0] < w[1]));
    // the forced include is the hottest number and never recommended
    assert!(!picks.contains(&7));
}

#[test]
fn test_favorites_restriction_narrows_the_pass() {
    let mut rng = StdRng::seed_from_u64(42);
    let sets = generate_sets_with_rng(&mut rng, 6, &[], &[]).unwrap();
    let records = to_records(&sets);

    let all = aggregate(&records, false);
    let favs = aggregate(&records, true);
    assert_eq!(all.sets_counted, 6);
    assert_eq!(favs.sets_counted, 3);
    assert!(favs.frequency.iter().sum::<u32>() < all.frequency.iter().sum::<u32>());
}

#[test]
fn test_winning_check_against_generated_draw() {
    let mut rng = StdRng::seed_from_u64(7);
    let draw = generate_sets_with_rng(&mut rng, 1, &[], &[]).unwrap()[0];
    let bonus = (1..=45u8).find(|n| !draw.contains(*n)).unwrap();

    // the draw matches itself at rank 1
    assert_eq!(check_winning(&draw, &draw, bonus).rank, Some(1));

    // swap one number for the bonus: five hits plus bonus is rank 2
    let mut five_plus_bonus = *draw.numbers();
    five_plus_bonus[0] = bonus;
    let ticket = LottoSet::from_unsorted(five_plus_bonus);
    let result = check_winning(&ticket, &draw, bonus);
    assert_eq!(result.match_count, 5);
    assert!(result.has_bonus);
    assert_eq!(result.rank, Some(2));
}

#[test]
fn test_recommendation_spreads_across_ranges() {
    // a history confined to 1-10 leaves the other buckets cold
    let sets: Vec<LottoSet> = (0..4)
        .map(|i| LottoSet::from_unsorted([1 + i, 2 + i, 3 + i, 4 + i, 5 + i, 6 + i]))
        .collect();
    let stats = aggregate(&to_records(&sets), false);
    let picks = recommend(&stats);

    assert_eq!(picks.len(), 6);
    // one pick from each of the four cold buckets
    assert!(picks.iter().any(|&n| (11..=20).contains(&n)));
    assert!(picks.iter().any(|&n| (21..=30).contains(&n)));
    assert!(picks.iter().any(|&n| (31..=40).contains(&n)));
    assert!(picks.iter().any(|&n| (41..=45).contains(&n)));
}
