//! Daily fortune synthesis
//!
//! One seeded stream per (identity, date) drives every field of the daily
//! fortune in a fixed draw order, so the whole record is reproducible.
//! Changing the draw order changes every published fortune; treat it as
//! part of the output format.

use chrono::NaiveDate;

use crate::core::{affinity, catalog, scorer, seeded};
use crate::types::{BestMatch, DailyFortune, DayLuck, Element, LuckGrade, Mbti};
use crate::{LUCKY_NUMBER_MAX, MATCH_CANDIDATES};

/// Lucky items for the day-luck reading
const LUCKY_ITEMS: [&str; 15] = [
    "a red wallet",
    "a four-leaf clover",
    "a silver ring",
    "a blue pen",
    "a pocket mirror",
    "a coffee tumbler",
    "fresh sneakers",
    "a handwritten note",
    "a green plant",
    "a keychain charm",
    "wireless earphones",
    "a striped scarf",
    "a coin from your birth year",
    "a bookmark",
    "an umbrella",
];

/// Three messages per luck grade; picked by the same stream as the score
fn luck_messages(grade: LuckGrade) -> &'static [&'static str; 3] {
    match grade {
        LuckGrade::Jackpot => &[
            "Everything you touch turns out well today. Swing big.",
            "Fortune is squarely on your side. Say yes to the opportunity.",
            "A golden day. What you start now carries momentum for weeks.",
        ],
        LuckGrade::Good => &[
            "A pleasantly smooth day. Small wins stack up if you keep moving.",
            "Good news finds you through other people today. Stay reachable.",
            "Steady tailwinds. Finish the thing that is almost done.",
        ],
        LuckGrade::Normal => &[
            "An ordinary day, which is its own kind of gift. Keep your pace.",
            "Nothing dramatic ahead. A good day for maintenance and rest.",
            "Even keel today. Routine choices beat bold ones.",
        ],
        LuckGrade::Recharging => &[
            "Energy runs low today. Postpone what can wait and rest well.",
            "A day for recharging. Be extra careful with money and words.",
            "Headwinds pass. Keep your footing and tomorrow looks brighter.",
        ],
    }
}

/// Synthesize the daily fortune for one identity on one date.
///
/// The stream draws in a fixed order: message, time, action, avoid,
/// color, number, then the best-match shuffle.
pub fn daily_fortune(mbti: Mbti, element: Element, date: NaiveDate) -> DailyFortune {
    let me = catalog::character(mbti, element);
    let mut rng = seeded::SeededRandom::new(seeded::daily_seed(mbti, element, date));

    let message = rng.choice(&me.fortune_templates).clone();
    let lucky_time = rng.choice(&catalog::LUCKY_TIMES).to_string();
    let lucky_action = rng.choice(catalog::element_actions(element)).to_string();
    let avoid_action = rng.choice(catalog::element_avoid(element)).to_string();
    let lucky_color = rng.choice(catalog::element_colors(element)).to_string();
    let lucky_number = rng.next_int(1, LUCKY_NUMBER_MAX) as u32;
    let best_match = pick_best_match(mbti, element, &mut rng);

    DailyFortune {
        date,
        mbti,
        element,
        character_name: me.name.clone(),
        character_emoji: me.emoji.clone(),
        message,
        lucky_time,
        lucky_action,
        avoid_action,
        lucky_color,
        lucky_number,
        best_match,
    }
}

/// Shuffle the 79 other characters, sample a handful, keep the best
/// combined score. Strictly-greater comparison, so earlier candidates win
/// ties.
fn pick_best_match(
    mbti: Mbti,
    element: Element,
    rng: &mut seeded::SeededRandom,
) -> Option<BestMatch> {
    let others: Vec<&'static crate::types::Character> = catalog::all_characters()
        .iter()
        .filter(|c| !(c.mbti == mbti && c.element == element))
        .collect();

    let shuffled = rng.shuffle(&others);
    let sample = &shuffled[..MATCH_CANDIDATES.min(shuffled.len())];

    let mut best = *sample.first()?;
    let mut best_score = 0;
    for &candidate in sample {
        let score = scorer::combine_scores(
            scorer::element_score(element, candidate.element),
            affinity::mbti_score(mbti, candidate.mbti),
        );
        if score > best_score {
            best = candidate;
            best_score = score;
        }
    }

    Some(BestMatch {
        mbti: best.mbti,
        element: best.element,
        character_name: best.name.clone(),
        character_emoji: best.emoji.clone(),
        score: best_score,
    })
}

/// Identity-free luck reading for one date
pub fn day_luck(date: NaiveDate) -> DayLuck {
    let mut rng = seeded::SeededRandom::new(seeded::date_seed(date));

    let score = rng.next_int(1, 100) as u32;
    let grade = LuckGrade::from_score(score);
    let message = rng.choice(luck_messages(grade)).to_string();
    let lucky_item = rng.choice(&LUCKY_ITEMS).to_string();
    let lucky_number = rng.next_int(1, 45) as u32;

    DayLuck { date, score, grade, message, lucky_item, lucky_number }
}

// =============================================================================
// TESTS
// =============================================================================
