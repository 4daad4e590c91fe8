//! Birth-chart element profile
//!
//! Four pillars derived from the birth date and hour via simple cyclic
//! indexing over the ten heavenly stems and twelve earthly branches. Each
//! pillar contributes a stem element and a branch element; the profile
//! counts all eight and names the dominant and lacking elements.

use crate::types::Element;

const STEMS: [(&str, Element); 10] = [
    ("Jia", Element::Wood),
    ("Yi", Element::Wood),
    ("Bing", Element::Fire),
    ("Ding", Element::Fire),
    ("Wu", Element::Earth),
    ("Ji", Element::Earth),
    ("Geng", Element::Metal),
    ("Xin", Element::Metal),
    ("Ren", Element::Water),
    ("Gui", Element::Water),
];

const BRANCHES: [(&str, Element); 12] = [
    ("Zi", Element::Water),
    ("Chou", Element::Earth),
    ("Yin", Element::Wood),
    ("Mao", Element::Wood),
    ("Chen", Element::Earth),
    ("Si", Element::Fire),
    ("Wu", Element::Fire),
    ("Wei", Element::Earth),
    ("Shen", Element::Metal),
    ("You", Element::Metal),
    ("Xu", Element::Earth),
    ("Hai", Element::Water),
];

/// One stem-branch pillar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillar {
    pub stem: &'static str,
    pub branch: &'static str,
    pub stem_element: Element,
    pub branch_element: Element,
}

fn pillar(stem_index: i64, branch_index: i64) -> Pillar {
    let (stem, stem_element) = STEMS[stem_index.rem_euclid(10) as usize];
    let (branch, branch_element) = BRANCHES[branch_index.rem_euclid(12) as usize];
    Pillar { stem, branch, stem_element, branch_element }
}

/// Element profile of a birth chart
#[derive(Debug, Clone)]
pub struct BirthElements {
    /// Year, month, day and hour pillars, in that order
    pub pillars: [Pillar; 4],
    /// Occurrences per element, in canonical element order
    pub counts: [u32; 5],
    /// Most frequent element (ties to earlier canonical order)
    pub dominant: Element,
    /// Least frequent element (ties to earlier canonical order)
    pub lacking: Element,
}

/// Compute the four-pillar element profile for a birth moment.
///
/// The year pillar anchors at year 4 of the common era; month, day and
/// hour pillars index their cycles directly, with the hour folded into
/// two-hour blocks.
pub fn birth_elements(year: i32, month: u32, day: u32, hour: u32) -> BirthElements {
    let year = i64::from(year);
    let block = i64::from(hour / 2);

    let pillars = [
        pillar(year - 4, year - 4),
        pillar(i64::from(month), i64::from(month)),
        pillar(i64::from(day), i64::from(day)),
        pillar(block, block),
    ];

    let mut counts = [0u32; 5];
    for p in &pillars {
        counts[p.stem_element.index()] += 1;
        counts[p.branch_element.index()] += 1;
    }

    let dominant = Element::ALL
        .into_iter()
        .max_by_key(|e| (counts[e.index()], std::cmp::Reverse(e.index())))
        .unwrap_or(Element::Wood);
    let lacking = Element::ALL
        .into_iter()
        .min_by_key(|e| counts[e.index()])
        .unwrap_or(Element::Wood);

    BirthElements { pillars, counts, dominant, lacking }
}

// =============================================================================
// TESTS
// =============================================================================
