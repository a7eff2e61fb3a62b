use crate::domain::{
    assessment::entities::Alternative,
    heuristics::{HeuristicEngine, normalize},
};

impl HeuristicEngine {
    /// Greener swaps for the described product. Exactly one rule fires, in
    /// priority order, so the list is never empty.
    pub fn alternatives(&self, text: &str) -> Vec<Alternative> {
        let text = normalize(text);

        if text.contains("bottle") && text.contains("plastic") {
            vec![
                Alternative::new(
                    "Stainless steel bottle",
                    "Durable, long-life, fully recyclable.",
                ),
                Alternative::new("Glass bottle", "Inert material; recyclable where accepted."),
            ]
        } else if text.contains("paper towel") {
            vec![
                Alternative::new("Reusable cloth towels", "Cuts single-use waste."),
                Alternative::new("Bamboo towels", "Rapidly renewable resource."),
            ]
        } else if text.contains("beef") {
            vec![
                Alternative::new("Lentils or beans", "Much lower emissions, high protein."),
                Alternative::new("Tofu/tempeh", "Low impact plant protein."),
            ]
        } else {
            vec![
                Alternative::new(
                    "Higher recycled-content option",
                    "Reduces virgin material demand.",
                ),
                Alternative::new("Repairable/refillable version", "Extends product lifetime."),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(text: &str) -> Vec<String> {
        HeuristicEngine::new()
            .unwrap()
            .alternatives(text)
            .into_iter()
            .map(|a| a.item)
            .collect()
    }

    #[test]
    fn test_bottle_rule_needs_both_words() {
        assert_eq!(items("Plastic Bottle")[0], "Stainless steel bottle");
        assert_eq!(items("glass bottle")[0], "Higher recycled-content option");
    }

    #[test]
    fn test_priority_order() {
        // Bottle rule outranks the beef rule.
        assert_eq!(
            items("beef broth in a plastic bottle"),
            ["Stainless steel bottle", "Glass bottle"]
        );
        assert_eq!(
            items("paper towel for beef"),
            ["Reusable cloth towels", "Bamboo towels"]
        );
        assert_eq!(items("beef burger"), ["Lentils or beans", "Tofu/tempeh"]);
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(
            items(""),
            ["Higher recycled-content option", "Repairable/refillable version"]
        );
    }
}
