//! Couple compatibility reports
//!
//! Assembles full reports from the scorer primitives and the catalog.
//! Everything here is pure; the same two identities always produce the
//! same report.

use crate::core::{affinity, catalog, scorer};
use crate::types::{CompatibilityReport, Element, MatchGrade, Mbti, MbtiMatch, PartnerRef};

fn partner_ref(mbti: Mbti, element: Element) -> PartnerRef {
    let c = catalog::character(mbti, element);
    PartnerRef {
        mbti,
        element,
        character_name: c.name.clone(),
        character_emoji: c.emoji.clone(),
    }
}

/// Full couple report for two (type, element) identities
pub fn compatibility(
    my_mbti: Mbti,
    my_element: Element,
    partner_mbti: Mbti,
    partner_element: Element,
) -> CompatibilityReport {
    let element_score = scorer::element_score(my_element, partner_element);
    let mbti_score = affinity::mbti_score(my_mbti, partner_mbti);
    let total_score = scorer::combine_scores(element_score, mbti_score);
    let tier = scorer::compat_tier(my_mbti, partner_mbti, element_score, mbti_score, total_score);

    let description = format!(
        "{} and {} score {} out of 100. {}",
        catalog::character(my_mbti, my_element).name,
        catalog::character(partner_mbti, partner_element).name,
        total_score,
        tier.blurb()
    );

    CompatibilityReport {
        me: partner_ref(my_mbti, my_element),
        partner: partner_ref(partner_mbti, partner_element),
        total_score,
        mbti_score,
        element_score,
        tier,
        description,
    }
}

/// Type-only match result, graded on the 80/60/40 ladder
pub fn mbti_match(mine: Mbti, partner: Mbti) -> MbtiMatch {
    let score = affinity::mbti_score(mine, partner);
    let grade = MatchGrade::from_score(score);

    let description = format!(
        "{} the {} is {}; {} the {} is {}. {}: {}",
        mine,
        catalog::mbti_title(mine),
        catalog::mbti_blurb(mine),
        partner,
        catalog::mbti_title(partner),
        catalog::mbti_blurb(partner),
        grade.label(),
        grade.advice()
    );

    MbtiMatch { mine, partner, score, grade, description }
}

// =============================================================================
// TESTS
// =============================================================================
