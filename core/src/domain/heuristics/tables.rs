//! Keyword dictionaries and nutrient profiles used by the heuristic engine.
//!
//! Matching is lowercase substring search, never whole-word. Ordering of
//! every table is significant: the first hit wins wherever a single answer
//! is picked.

use crate::domain::assessment::entities::Material;

/// Food hints, scanned in order; the first hit becomes the edibility signal.
pub const EDIBLE_HINTS: &[&str] = &[
    "apple", "banana", "bread", "milk", "oat", "almond", "soy", "yogurt", "cheese", "beef",
    "chicken", "tofu", "bean", "lentil", "rice", "pasta", "chocolate", "cookie", "snack",
    "cereal", "oats", "egg", "coffee", "tea", "juice", "soda", "can of", "canned",
];

/// Packaging cues that cap edibility confidence.
pub const CONTAINER_CUES: &[&str] = &["pet", "bottle", "plastic"];

/// Confidence ceiling applied when a container cue is present.
pub const CONTAINER_CONFIDENCE_CAP: f64 = 0.2;

pub const EDIBLE_HIT_CONFIDENCE: f64 = 0.85;
pub const EDIBLE_MISS_CONFIDENCE: f64 = 0.35;

/// Text that marks a plastic as a commonly recycled resin code.
pub const RECYCLABLE_PLASTIC_CUE: &str = "pet";

pub const HIGH_IMPACT_FOOD_CUE: &str = "beef";

pub fn material_keywords() -> Vec<(Material, Vec<&'static str>)> {
    vec![
        (
            Material::Plastic,
            vec![
                "pet",
                "hdpe",
                "plastic",
                "polyethylene",
                "polypropylene",
                "bottle",
                "wrapper",
                "straw",
            ],
        ),
        (
            Material::Metal,
            vec!["steel", "aluminum", "aluminium", "tin", "can", "metal"],
        ),
        (Material::Glass, vec!["glass", "jar", "bottle glass"]),
        (
            Material::Paper,
            vec!["paper", "cardboard", "carton", "kraft", "box"],
        ),
        (
            Material::Textile,
            vec!["cotton", "polyester", "nylon", "fabric", "textile", "shirt", "towel"],
        ),
        (
            Material::Electronics,
            vec![
                "battery",
                "lithium",
                "phone",
                "charger",
                "cable",
                "headphones",
                "electronic",
            ],
        ),
    ]
}

/// Disposal advice per material, in the order it is emitted.
pub fn material_guidance() -> Vec<(Material, &'static str)> {
    vec![
        (
            Material::Plastic,
            "Check local rules for plastics #1–#2; keep caps on bottles.",
        ),
        (Material::Paper, "Remove plastic windows; flatten boxes."),
        (
            Material::Glass,
            "Rinse and remove lids; color sorting may apply.",
        ),
        (Material::Metal, "Rinse cans; avoid food residue."),
        (
            Material::Electronics,
            "Use e-waste drop-off sites; never trash batteries.",
        ),
    ]
}

/// Approximate nutrients per 100 g or 100 ml.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientProfile {
    pub kcal: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fiber: f64,
    pub sodium: f64,
    pub calcium: f64,
    pub iron: f64,
}

pub const DEFAULT_PROFILE_KEY: &str = "default";

pub const DEFAULT_PROFILE: NutrientProfile = NutrientProfile {
    kcal: 200.0,
    protein: 6.0,
    fat: 8.0,
    carbs: 28.0,
    fiber: 2.0,
    sodium: 200.0,
    calcium: 40.0,
    iron: 1.0,
};

/// A named nutrient profile and the keywords that select it.
#[derive(Debug, Clone)]
pub struct FoodProfile {
    pub key: &'static str,
    pub keywords: Vec<&'static str>,
    pub per_100: NutrientProfile,
}

pub fn food_profiles() -> Vec<FoodProfile> {
    vec![
        FoodProfile {
            key: "apple",
            keywords: vec!["apple"],
            per_100: NutrientProfile {
                kcal: 52.0,
                protein: 0.3,
                fat: 0.2,
                carbs: 14.0,
                fiber: 2.4,
                sodium: 1.0,
                calcium: 6.0,
                iron: 0.1,
            },
        },
        FoodProfile {
            key: "milk",
            keywords: vec!["milk"],
            per_100: NutrientProfile {
                kcal: 60.0,
                protein: 3.2,
                fat: 3.2,
                carbs: 5.0,
                fiber: 0.0,
                sodium: 44.0,
                calcium: 120.0,
                iron: 0.0,
            },
        },
        FoodProfile {
            key: "oats",
            keywords: vec!["oat"],
            per_100: NutrientProfile {
                kcal: 389.0,
                protein: 17.0,
                fat: 7.0,
                carbs: 66.0,
                fiber: 10.0,
                sodium: 2.0,
                calcium: 54.0,
                iron: 4.7,
            },
        },
        FoodProfile {
            key: "beans",
            keywords: vec!["bean", "lentil"],
            per_100: NutrientProfile {
                kcal: 347.0,
                protein: 21.0,
                fat: 1.2,
                carbs: 63.0,
                fiber: 16.0,
                sodium: 5.0,
                calcium: 113.0,
                iron: 5.1,
            },
        },
        FoodProfile {
            key: "beef",
            keywords: vec!["beef"],
            per_100: NutrientProfile {
                kcal: 250.0,
                protein: 26.0,
                fat: 15.0,
                carbs: 0.0,
                fiber: 0.0,
                sodium: 72.0,
                calcium: 18.0,
                iron: 2.6,
            },
        },
        FoodProfile {
            key: "chocolate",
            keywords: vec!["chocolate"],
            per_100: NutrientProfile {
                kcal: 546.0,
                protein: 4.9,
                fat: 31.0,
                carbs: 61.0,
                fiber: 7.0,
                sodium: 24.0,
                calcium: 56.0,
                iron: 8.0,
            },
        },
    ]
}

/// All dictionaries the engine consults, owned by the engine instance.
#[derive(Debug, Clone)]
pub struct KeywordTables {
    pub edible_hints: Vec<&'static str>,
    pub container_cues: Vec<&'static str>,
    pub materials: Vec<(Material, Vec<&'static str>)>,
    pub guidance: Vec<(Material, &'static str)>,
    pub food_profiles: Vec<FoodProfile>,
}

impl KeywordTables {
    pub fn standard() -> Self {
        Self {
            edible_hints: EDIBLE_HINTS.to_vec(),
            container_cues: CONTAINER_CUES.to_vec(),
            materials: material_keywords(),
            guidance: material_guidance(),
            food_profiles: food_profiles(),
        }
    }
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self::standard()
    }
}
