use crate::domain::heuristics::{HeuristicEngine, normalize};

pub const MAX_TIPS: usize = 4;

pub const BASELINE_TIPS: [&str; 2] = [
    "Buy only what you’ll use to cut waste.",
    "Look for third-party certifications (B Corp, Fairtrade, FSC) where relevant.",
];

impl HeuristicEngine {
    /// At most four tips. Conditional tips come first so truncation drops
    /// baseline advice before anything specific to the input.
    pub fn tips(&self, text: &str, location: &str) -> Vec<String> {
        let text = normalize(text);
        let mut tips = Vec::with_capacity(5);

        if text.contains("bottle") {
            tips.push("Carry a reusable bottle to avoid single-use purchases.".to_string());
        }
        if text.contains("carton") || text.contains("paper") {
            tips.push("Flatten cartons and keep them dry.".to_string());
        }
        if !location.is_empty() {
            tips.push(format!(
                "Search local recycling rules for {}; they vary by municipality.",
                location
            ));
        }
        tips.extend(BASELINE_TIPS.iter().map(|tip| tip.to_string()));

        tips.truncate(MAX_TIPS);
        tips
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> HeuristicEngine {
        HeuristicEngine::new().unwrap()
    }

    #[test]
    fn test_baseline_only() {
        assert_eq!(engine().tips("apple", ""), BASELINE_TIPS);
    }

    #[test]
    fn test_location_tip_uses_literal_location() {
        let tips = engine().tips("apple", "Leeds");
        assert_eq!(
            tips[0],
            "Search local recycling rules for Leeds; they vary by municipality."
        );
        assert_eq!(tips.len(), 3);
    }

    #[test]
    fn test_truncation_keeps_conditional_tips() {
        let tips = engine().tips("bottle in a paper carton", "Kyoto");
        assert_eq!(tips.len(), MAX_TIPS);
        assert_eq!(
            tips[0],
            "Carry a reusable bottle to avoid single-use purchases."
        );
        assert_eq!(tips[1], "Flatten cartons and keep them dry.");
        assert!(tips[2].contains("Kyoto"));
        assert_eq!(tips[3], BASELINE_TIPS[0]);
    }
}
