//! Static character catalog and content tables
//!
//! Exactly 80 characters, one per (MBTI, element) pair, assembled once at
//! startup from per-type and per-element trait templates and frozen for
//! the lifetime of the process. Lookup is infallible by construction: both
//! keys are closed enums and the catalog is laid out in their canonical
//! order, so a missing entry cannot be expressed. All strings are opaque
//! content as far as the engine is concerned.

use lazy_static::lazy_static;

use crate::types::{Character, Element, Mbti};

/// Per-type display traits
struct MbtiTraits {
    title: &'static str,
    emoji: &'static str,
    blurb: &'static str,
    strengths: [&'static str; 4],
    weaknesses: [&'static str; 3],
    charms: [&'static str; 3],
}

/// Per-element display traits and daily templates
struct ElementTraits {
    prefix: &'static str,
    blurb: &'static str,
    templates: [&'static str; 3],
}

fn mbti_traits(mbti: Mbti) -> MbtiTraits {
    match mbti {
        Mbti::INTJ => MbtiTraits {
            title: "Strategist",
            emoji: "🎯",
            blurb: "imaginative and methodical, with a plan for everything",
            strengths: ["long-range planning", "systematic thinking", "independence", "goal focus"],
            weaknesses: ["perfectionism", "awkward with feelings", "inflexibility"],
            charms: ["quiet charisma", "plans you can trust", "deep insight"],
        },
        Mbti::INTP => MbtiTraits {
            title: "Logician",
            emoji: "🧩",
            blurb: "an inventive mind with an endless thirst for knowledge",
            strengths: ["creative thinking", "logical analysis", "curiosity", "mental flexibility"],
            weaknesses: ["weak follow-through", "scattered focus", "detached from practicalities"],
            charms: ["one-of-a-kind viewpoint", "offbeat ideas", "pure intellectual passion"],
        },
        Mbti::ENTJ => MbtiTraits {
            title: "Commander",
            emoji: "👑",
            blurb: "a bold, strong-willed leader who always finds a way",
            strengths: ["leadership", "decisiveness", "strategic drive", "efficiency"],
            weaknesses: ["impatience", "domineering streak", "dismissive of emotion"],
            charms: ["commanding presence", "makes things happen", "clear direction"],
        },
        Mbti::ENTP => MbtiTraits {
            title: "Debater",
            emoji: "💡",
            blurb: "quick and curious, never one to pass up an intellectual challenge",
            strengths: ["sharp wit", "adaptability", "brainstorming", "fearless argument"],
            weaknesses: ["argumentative streak", "easily bored", "neglects routine"],
            charms: ["sparkling conversation", "surprising angles", "infectious energy"],
        },
        Mbti::INFJ => MbtiTraits {
            title: "Advocate",
            emoji: "🔮",
            blurb: "idealistic and principled, driven to help others",
            strengths: ["insight into people", "dedication", "principled vision", "quiet resolve"],
            weaknesses: ["burnout prone", "overly private", "perfectionism"],
            charms: ["rare depth", "gentle conviction", "makes people feel seen"],
        },
        Mbti::INFP => MbtiTraits {
            title: "Mediator",
            emoji: "🕊️",
            blurb: "poetic, kind and altruistic to the core",
            strengths: ["empathy", "imagination", "loyalty to values", "open mind"],
            weaknesses: ["conflict avoidance", "daydreaming", "takes things personally"],
            charms: ["warm sincerity", "artistic soul", "sees the good in everyone"],
        },
        Mbti::ENFJ => MbtiTraits {
            title: "Protagonist",
            emoji: "🌟",
            blurb: "a charismatic leader who inspires the room",
            strengths: ["inspiring others", "communication", "organization", "generosity"],
            weaknesses: ["overcommitment", "fishing for approval", "smothering care"],
            charms: ["natural warmth", "rallying presence", "brings out people's best"],
        },
        Mbti::ENFP => MbtiTraits {
            title: "Campaigner",
            emoji: "🎉",
            blurb: "enthusiastic, creative and relentlessly positive",
            strengths: ["enthusiasm", "creativity", "people skills", "optimism"],
            weaknesses: ["scattered focus", "overthinking feelings", "dislikes routine"],
            charms: ["contagious joy", "spontaneous fun", "genuine interest in people"],
        },
        Mbti::ISTJ => MbtiTraits {
            title: "Logistician",
            emoji: "📋",
            blurb: "practical, fact-minded and utterly reliable",
            strengths: ["responsibility", "orderliness", "reliability", "diligence"],
            weaknesses: ["inflexibility", "resists change", "awkward with feelings"],
            charms: ["dependability", "steadiness", "precision"],
        },
        Mbti::ISFJ => MbtiTraits {
            title: "Defender",
            emoji: "🛡️",
            blurb: "devoted and warm, a protector of the people they love",
            strengths: ["devotion", "consideration", "attentiveness", "responsibility"],
            weaknesses: ["self-effacing", "over-sacrificing", "fears change"],
            charms: ["warmth", "trustworthiness", "thoughtful care"],
        },
        Mbti::ESTJ => MbtiTraits {
            title: "Executive",
            emoji: "💼",
            blurb: "an excellent administrator who brings order to everything",
            strengths: ["leadership", "organization", "execution", "efficiency"],
            weaknesses: ["bossiness", "inflexibility", "dismissive of emotion"],
            charms: ["strong drive", "systematic management", "decisiveness"],
        },
        Mbti::ESFJ => MbtiTraits {
            title: "Consul",
            emoji: "👥",
            blurb: "caring, sociable and always popular",
            strengths: ["sociability", "consideration", "harmony seeking", "responsibility"],
            weaknesses: ["needs approval", "sensitive to criticism", "avoids conflict"],
            charms: ["popularity", "kindness", "harmonious atmosphere"],
        },
        Mbti::ISTP => MbtiTraits {
            title: "Virtuoso",
            emoji: "🔧",
            blurb: "a bold and practical master of tools and problems",
            strengths: ["practicality", "troubleshooting", "adaptability", "composure"],
            weaknesses: ["reserved with feelings", "weak long-term planning", "impulsiveness"],
            charms: ["effortless cool", "capable hands", "calm under pressure"],
        },
        Mbti::ISFP => MbtiTraits {
            title: "Adventurer",
            emoji: "🎨",
            blurb: "flexible and charming, with a true artist's eye",
            strengths: ["artistry", "flexibility", "warmth", "openness"],
            weaknesses: ["indecisiveness", "weak planning", "sensitive to criticism"],
            charms: ["unique sensibility", "quiet magnetism", "artistic talent"],
        },
        Mbti::ESTP => MbtiTraits {
            title: "Entrepreneur",
            emoji: "🚀",
            blurb: "energetic and perceptive, happiest living on the edge",
            strengths: ["action bias", "sociability", "adaptability", "quick reflexes"],
            weaknesses: ["impulsiveness", "weak long-term planning", "recklessness"],
            charms: ["charisma", "great fun", "boundless energy"],
        },
        Mbti::ESFP => MbtiTraits {
            title: "Entertainer",
            emoji: "🎭",
            blurb: "spontaneous and enthusiastic, life is never dull nearby",
            strengths: ["sociability", "spontaneity", "positive energy", "observation"],
            weaknesses: ["weak planning", "avoids responsibility", "impulsiveness"],
            charms: ["pure fun", "bright energy", "crowd favorite"],
        },
    }
}

fn element_traits(element: Element) -> ElementTraits {
    match element {
        Element::Wood => ElementTraits {
            prefix: "Forest",
            blurb: "carries the growing, unfolding energy of wood",
            templates: [
                "A fine day for growth. Plant something new and tend it patiently.",
                "Perfect timing to absorb new knowledge. Give reading or study your full focus.",
                "Steady effort bears fruit today. Sketch the long view before you act.",
            ],
        },
        Element::Fire => ElementTraits {
            prefix: "Flame",
            blurb: "carries the passionate, radiant energy of fire",
            templates: [
                "Your energy peaks today. Start the bold thing you have been circling.",
                "A moment that rewards quick decisions. Trust your instinct and move.",
                "Act with passion and the room follows. Let yourself burn bright.",
            ],
        },
        Element::Earth => ElementTraits {
            prefix: "Mountain",
            blurb: "carries the steady, dependable energy of earth",
            templates: [
                "A day for solid foundations. Prepare carefully, step by step.",
                "Your prudence shines today. A careful review invites success.",
                "A stable routine brings the best results. Keep to your rhythm.",
            ],
        },
        Element::Metal => ElementTraits {
            prefix: "Steel",
            blurb: "carries the firm, principled energy of metal",
            templates: [
                "Your judgment is at its sharpest. Make the decision that matters.",
                "Principles pay off today. Hold your line and stay precise.",
                "A logical approach unties every knot put in front of you.",
            ],
        },
        Element::Water => ElementTraits {
            prefix: "Tide",
            blurb: "carries the flexible, deep-running energy of water",
            templates: [
                "Deep reflection brings the answer. Find a quiet hour for yourself.",
                "Intuition and logic flow together today. Follow the current.",
                "Hidden patterns surface if you watch closely. Stay observant.",
            ],
        },
    }
}

/// Human title for a type code (used by match descriptions)
pub fn mbti_title(mbti: Mbti) -> &'static str {
    mbti_traits(mbti).title
}

/// One-line reading of a type code (used by match descriptions)
pub fn mbti_blurb(mbti: Mbti) -> &'static str {
    mbti_traits(mbti).blurb
}

fn build_character(mbti: Mbti, element: Element) -> Character {
    let t = mbti_traits(mbti);
    let e = element_traits(element);

    Character {
        mbti,
        element,
        group: mbti.group(),
        name: format!("{} {}", e.prefix, t.title),
        emoji: format!("{}{}", element.emoji(), t.emoji),
        description: format!(
            "A {} who {}. The {} type and the {} element move in step here.",
            t.title.to_lowercase(),
            e.blurb,
            mbti,
            element
        ),
        strengths: t.strengths.iter().map(|s| s.to_string()).collect(),
        weaknesses: t.weaknesses.iter().map(|s| s.to_string()).collect(),
        charm_points: t.charms.iter().map(|s| s.to_string()).collect(),
        fortune_templates: e.templates.iter().map(|s| s.to_string()).collect(),
    }
}

lazy_static! {
    /// The 80-entry catalog, in (Mbti::ALL × Element::ALL) order
    static ref CATALOG: Vec<Character> = {
        let mut all = Vec::with_capacity(Mbti::ALL.len() * Element::ALL.len());
        for mbti in Mbti::ALL {
            for element in Element::ALL {
                all.push(build_character(mbti, element));
            }
        }
        all
    };
}

/// Resolve a character record. Total over both enums; cannot fail.
pub fn character(mbti: Mbti, element: Element) -> &'static Character {
    let entry = &CATALOG[mbti.index() * Element::ALL.len() + element.index()];
    debug_assert!(entry.mbti == mbti && entry.element == element, "catalog order corrupt");
    entry
}

/// All 80 characters, catalog order
pub fn all_characters() -> &'static [Character] {
    &CATALOG
}

// =============================================================================
// CONTENT TABLES - small fixed lists indexed by element
// =============================================================================

/// The ten day-part windows a daily fortune draws from
pub const LUCKY_TIMES: [&str; 10] = [
    "Dawn (5-7am)",
    "Morning (7-9am)",
    "Late morning (9-11am)",
    "Midday (11am-1pm)",
    "Afternoon (1-3pm)",
    "Late afternoon (3-5pm)",
    "Evening (5-7pm)",
    "Night (7-9pm)",
    "Late night (9-11pm)",
    "Midnight (11pm-1am)",
];

/// Lucky colors per element
pub fn element_colors(element: Element) -> &'static [&'static str] {
    match element {
        Element::Wood => &["green", "teal", "lime", "olive"],
        Element::Fire => &["red", "orange", "pink", "magenta"],
        Element::Earth => &["yellow", "brown", "beige", "ochre"],
        Element::Metal => &["white", "silver", "gold", "gray"],
        Element::Water => &["blue", "black", "navy", "azure"],
    }
}

/// Recommended actions per element
pub fn element_actions(element: Element) -> &'static [&'static str] {
    match element {
        Element::Wood => &[
            "start a new project",
            "read a book",
            "tend your plants",
            "take a walk",
            "learn something new",
            "write down your ideas",
            "make a plan",
        ],
        Element::Fire => &[
            "work out",
            "meet people",
            "join the party",
            "make a bold decision",
            "give a presentation",
            "throw yourself into work",
            "take on a challenge",
        ],
        Element::Earth => &[
            "tidy your home",
            "take a proper rest",
            "meditate",
            "eat a home-cooked meal",
            "spend time with family",
            "keep a steady routine",
            "put something into savings",
        ],
        Element::Metal => &[
            "make the big decision",
            "sort out your finances",
            "stick to your principles",
            "close the deal",
            "organize your desk",
            "analyze before acting",
            "review your investments",
        ],
        Element::Water => &[
            "meditate",
            "go for a swim",
            "listen to music",
            "do something creative",
            "go with the flow",
            "walk by the water",
            "think it through deeply",
        ],
    }
}

/// Actions to avoid per element
pub fn element_avoid(element: Element) -> &'static [&'static str] {
    match element {
        Element::Wood => &[
            "overspending",
            "impulse decisions",
            "picking fights",
            "overdoing exercise",
            "one drink too many",
        ],
        Element::Fire => &[
            "major money decisions",
            "snap judgments",
            "burning out on passion",
            "promises you can't keep",
            "heated confrontations",
        ],
        Element::Earth => &[
            "sudden changes",
            "reckless challenges",
            "impulse shopping",
            "too many outings",
            "overstuffed plans",
        ],
        Element::Metal => &[
            "emotional decisions",
            "digging in your heels",
            "harsh criticism",
            "perfectionism",
            "plain stubbornness",
        ],
        Element::Water => &[
            "waffling",
            "avoiding the issue",
            "brooding too long",
            "postponing the decision",
            "escaping into daydreams",
        ],
    }
}

// =============================================================================
// TESTS
// =============================================================================
