use crate::domain::{
    assessment::entities::{NutrientValues, NutritionEstimate},
    heuristics::{
        HeuristicEngine, normalize,
        tables::{DEFAULT_PROFILE, DEFAULT_PROFILE_KEY, NutrientProfile},
    },
};

pub const DEFAULT_SERVING: u32 = 100;
pub const MIN_SERVING: u32 = 50;
pub const MAX_SERVING: u32 = 500;
const GRAMS_PER_OUNCE: f64 = 28.35;

impl HeuristicEngine {
    /// Per-serving nutrients for an item already judged edible.
    pub fn estimate_nutrition(&self, text: &str) -> NutritionEstimate {
        let text = normalize(text);
        let (key, per_100) = self.nutrient_profile(&text);
        let serving = self.serving_size(&text);
        let factor = f64::from(serving) / 100.0;

        NutritionEstimate {
            serving: format!("{} g/ml", serving),
            values: NutrientValues {
                calories: round1(per_100.kcal * factor),
                protein_g: round1(per_100.protein * factor),
                fat_g: round1(per_100.fat * factor),
                carbs_g: round1(per_100.carbs * factor),
                fiber_g: round1(per_100.fiber * factor),
                sodium_mg: (per_100.sodium * factor).round(),
                calcium_mg: (per_100.calcium * factor).round(),
                iron_mg: (per_100.iron * factor).round(),
            },
            assumptions: format!("Based on {} profile, {}g/ml assumed serving.", key, serving),
        }
    }

    fn nutrient_profile(&self, text: &str) -> (&'static str, NutrientProfile) {
        self.tables
            .food_profiles
            .iter()
            .find(|profile| profile.keywords.iter().any(|k| text.contains(k)))
            .map(|profile| (profile.key, profile.per_100))
            .unwrap_or((DEFAULT_PROFILE_KEY, DEFAULT_PROFILE))
    }

    /// Serving size in g or ml taken from the first size hint in `text`,
    /// clamped to a plausible range. Ounces are converted to grams.
    pub fn serving_size(&self, text: &str) -> u32 {
        let Some(captures) = self.serving_pattern.captures(text) else {
            return DEFAULT_SERVING;
        };

        let Ok(amount) = captures[1].parse::<u64>() else {
            // More digits than fit in a u64; treat as "very large".
            return MAX_SERVING;
        };

        let amount = match &captures[2] {
            "oz" => (amount as f64 * GRAMS_PER_OUNCE).round() as u64,
            _ => amount,
        };

        amount.clamp(u64::from(MIN_SERVING), u64::from(MAX_SERVING)) as u32
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> HeuristicEngine {
        HeuristicEngine::new().unwrap()
    }

    #[test]
    fn test_default_profile_and_serving() {
        let estimate = engine().estimate_nutrition("granola snack");
        assert_eq!(estimate.serving, "100 g/ml");
        assert_eq!(estimate.values.calories, 200.0);
        assert_eq!(estimate.values.sodium_mg, 200.0);
        assert_eq!(
            estimate.assumptions,
            "Based on default profile, 100g/ml assumed serving."
        );
    }

    #[test]
    fn test_first_profile_match_wins() {
        // "milk" is listed before "oat", so oat milk uses the milk profile.
        let estimate = engine().estimate_nutrition("oat milk");
        assert!(estimate.assumptions.starts_with("Based on milk profile"));

        let estimate = engine().estimate_nutrition("red lentil soup");
        assert!(estimate.assumptions.starts_with("Based on beans profile"));
    }

    #[test]
    fn test_ounces_are_converted_to_grams() {
        assert_eq!(engine().serving_size("8oz milk"), 227);
        assert_eq!(engine().serving_size("a 3 oz pack"), 85);
    }

    #[test]
    fn test_serving_is_clamped() {
        assert_eq!(engine().serving_size("10g sample"), 50);
        assert_eq!(engine().serving_size("1000ml jug"), 500);
        assert_eq!(engine().serving_size("99999999999999999999999g"), 500);
        assert_eq!(engine().serving_size("no size given"), 100);
    }

    #[test]
    fn test_values_are_scaled_and_rounded() {
        let estimate = engine().estimate_nutrition("apple 250g");
        assert_eq!(estimate.serving, "250 g/ml");
        assert_eq!(estimate.values.calories, 130.0);
        assert_eq!(estimate.values.protein_g, 0.8);
        assert_eq!(estimate.values.carbs_g, 35.0);
        assert_eq!(estimate.values.fiber_g, 6.0);
        assert_eq!(estimate.values.calcium_mg, 15.0);
        assert_eq!(estimate.values.iron_mg, 0.0);
    }

    #[test]
    fn test_estimate_is_reproducible() {
        let engine = engine();
        assert_eq!(
            engine.estimate_nutrition("200g dark chocolate"),
            engine.estimate_nutrition("200g dark chocolate")
        );
    }
}
