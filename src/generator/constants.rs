use crate::models::Unit;

/// Rice mass in grams for a 100% rice plate.
pub const RICE_REFERENCE_GRAMS: f64 = 300.0;

/// Roux mass in grams for a 100% curry plate.
pub const ROUX_REFERENCE_GRAMS: f64 = 200.0;

/// Grams assumed for one piece of a count-unit ingredient.
pub const COUNT_UNIT_GRAMS: f64 = 30.0;

/// Number of comment buckets, one per multiple of 10 from 0 to 100.
pub const COMMENT_BUCKETS: usize = 11;

/// Per-100g nutrient values, used for both base components and ingredients.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutrientProfile {
    pub kcal: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub sodium: f64,
    pub fiber: f64,
}

/// Cooked white rice, per 100 g.
pub const RICE_PROFILE: NutrientProfile = NutrientProfile {
    kcal: 168.0,
    protein: 2.5,
    fat: 0.3,
    carbs: 37.0,
    sodium: 1.0,
    fiber: 0.3,
};

/// Curry roux, per 100 g.
pub const ROUX_PROFILE: NutrientProfile = NutrientProfile {
    kcal: 510.0,
    protein: 8.0,
    fat: 32.0,
    carbs: 48.0,
    sodium: 2800.0,
    fiber: 3.0,
};

/// Get the gram conversion factor for a unit.
pub fn unit_grams(unit: Unit) -> f64 {
    match unit {
        Unit::Count => COUNT_UNIT_GRAMS,
        Unit::Grams => 1.0,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reaction comments, indexed by rice percent rounded to the nearest 10
// ─────────────────────────────────────────────────────────────────────────────

pub const REACTION_COMMENTS: [&[&str]; COMMENT_BUCKETS] = [
    // 0% rice
    &[
        "Is this soup curry? Where did the rice go?",
        "A sea of curry. Somebody send a rescue boat made of rice.",
        "Zero rice. Hope you brought a spoon and a lot of courage.",
    ],
    // 10% rice
    &[
        "A lonely grain of rice is swimming for its life out there.",
        "Ten percent rice, fighting bravely against a curry tide.",
        "You plan to tame ninety percent curry with that little rice?",
    ],
    // 20% rice
    &[
        "Curry is the star here. The rice knows its place.",
        "Twenty percent rice. A plate for the curry hardliners.",
        "So much curry love that the rice barely gets a line.",
    ],
    // 30% rice
    &[
        "Curry leads, rice supports. It works.",
        "Seventy percent curry. The curry shop owner would approve.",
        "More curry than rice. A respectable choice.",
    ],
    // 40% rice
    &[
        "Curry-forward but still balanced. Advanced technique.",
        "A generous curry plate. Sixty percent might just be right.",
        "Four to six. The curry is showing off a little and that is fine.",
    ],
    // 50% rice
    &[
        "Perfect balance. The golden ratio of curry rice.",
        "Fifty-fifty. Mathematically beautiful.",
        "Golden ratio achieved. You have the makings of a curry master.",
    ],
    // 60% rice
    &[
        "Rice is edging ahead, still within tolerance.",
        "A little extra rice. Homestyle and comforting.",
        "Sixty percent rice. The curry is putting up a good fight.",
    ],
    // 70% rice
    &[
        "Is this curry with rice, or rice with curry? A deep question.",
        "Not much curry. Curry-flavoured rice, perhaps?",
        "The curry is quietly wishing there were a bit more of it.",
    ],
    // 80% rice
    &[
        "That is mostly rice. The curry is crying a little.",
        "The curry is drowning in rice. The tables have turned.",
        "Twenty percent curry. An extreme case of rice curry.",
    ],
    // 90% rice
    &[
        "You can barely see the curry beyond the rice mountain.",
        "Ten percent curry, a tiny island in a sea of rice.",
        "Did someone just spill a bit of curry on plain rice?",
    ],
    // 100% rice
    &[
        "No curry at all. That is a bowl of plain rice. Meeting adjourned.",
        "The curry does not exist. This is white rice in disguise.",
        "Zero curry. You ordered rice. Why are you here?",
    ],
];
