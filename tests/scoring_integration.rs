//! Integration tests for compatibility scoring
//!
//! Exercises the full report path and pins the score tables it is built
//! from.

use pretty_assertions::assert_eq;

use fortuna::core::{combine_scores, compatibility, element_score, mbti_match, mbti_score};
use fortuna::types::{CompatTier, Element, MatchGrade, Mbti};

#[test]
fn test_element_cycle_scores() {
    use Element::*;
    // the generating cycle, forward and backward
    assert_eq!(element_score(Wood, Fire), 90);
    assert_eq!(element_score(Fire, Wood), 85);
    assert_eq!(element_score(Water, Wood), 90);
    // the overcoming cycle
    assert_eq!(element_score(Wood, Earth), 40);
    assert_eq!(element_score(Earth, Wood), 45);
    // identity
    for e in Element::ALL {
        assert_eq!(element_score(e, e), 70);
    }
}

#[test]
fn test_total_is_half_and_half() {
    for (e, m) in [(90u32, 100u32), (70, 60), (45, 40), (85, 80)] {
        let report = combine_scores(e, m);
        assert_eq!(report, (e + m + 1) / 2);
    }
}

#[test]
fn test_full_report_tiers() {
    use Element::*;
    use Mbti::*;

    // top affinity + generating elements
    let heaven = compatibility(INTP, Water, ENTJ, Wood);
    assert_eq!(heaven.mbti_score, 100);
    assert_eq!(heaven.element_score, 90);
    assert_eq!(heaven.tier, CompatTier::HeavenSent);

    // all four letters differ and elements harmonize
    let love_hate = compatibility(INTJ, Wood, ESFP, Fire);
    assert_eq!(love_hate.tier, CompatTier::LoveHateSoulmates);

    // the same opposite pair without element harmony drops to the ladder
    let plain = compatibility(INTJ, Wood, ESFP, Earth);
    assert_eq!(plain.tier, CompatTier::BusinessPartners);

    // mirror pairing: decent halves, total below every cutoff
    let mirror = compatibility(INTJ, Wood, INTJ, Wood);
    assert_eq!(mirror.mbti_score, 60);
    assert_eq!(mirror.element_score, 70);
    assert_eq!(mirror.total_score, 65);
    assert_eq!(mirror.tier, CompatTier::BusinessPartners);

    // affinity alone can carry a pair into kindred spirits
    let kindred = compatibility(INTJ, Wood, INTP, Earth);
    assert_eq!(kindred.mbti_score, 80);
    assert_eq!(kindred.tier, CompatTier::KindredSpirits);
}

#[test]
fn test_mbti_match_grades() {
    let perfect = mbti_match(Mbti::ISFP, Mbti::ENFJ);
    assert_eq!(perfect.score, 100);
    assert_eq!(perfect.grade, MatchGrade::Perfect);

    let average = mbti_match(Mbti::INTJ, Mbti::ISTJ);
    assert_eq!(average.score, 40);
    assert_eq!(average.grade, MatchGrade::Average);
}

#[test]
fn test_affinity_is_symmetric_over_all_pairs() {
    for a in Mbti::ALL {
        for b in Mbti::ALL {
            assert_eq!(mbti_score(a, b), mbti_score(b, a), "{a} vs {b}");
        }
    }
}

#[test]
fn test_score_bands() {
    // every possible combined score stays in the publishable band
    for a in Mbti::ALL {
        for b in Mbti::ALL {
            for ea in Element::ALL {
                for eb in Element::ALL {
                    let report = compatibility(a, ea, b, eb);
                    assert!((40..=95).contains(&report.total_score));
                }
            }
        }
    }
}

#[test]
fn test_report_carries_catalog_identity() {
    let report = compatibility(Mbti::ENFJ, Element::Water, Mbti::ISFP, Element::Metal);
    assert_eq!(report.me.mbti, Mbti::ENFJ);
    assert_eq!(report.partner.element, Element::Metal);
    assert!(!report.me.character_name.is_empty());
    assert!(!report.partner.character_emoji.is_empty());
}
