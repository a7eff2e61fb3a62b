use crate::domain::{
    assessment::entities::EdibleAssessment,
    heuristics::{
        HeuristicEngine, normalize,
        tables::{CONTAINER_CONFIDENCE_CAP, EDIBLE_HIT_CONFIDENCE, EDIBLE_MISS_CONFIDENCE},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct EdibleGuess {
    pub is_edible: bool,
    pub confidence: f64,
    pub explain: String,
    /// First food hint found, in dictionary order.
    pub signal: Option<&'static str>,
}

impl From<EdibleGuess> for EdibleAssessment {
    fn from(guess: EdibleGuess) -> Self {
        Self {
            is_edible: guess.is_edible,
            confidence: guess.confidence,
            explain: guess.explain,
        }
    }
}

impl HeuristicEngine {
    /// Guesses whether the described product is food.
    ///
    /// Packaging cues win over food cues: "plastic bottle of juice" is read
    /// as a container, not as a drink.
    pub fn guess_edible(&self, text: &str, image_name: &str) -> EdibleGuess {
        let combined = normalize(&format!("{} {}", text, image_name));

        let signal = self
            .tables
            .edible_hints
            .iter()
            .copied()
            .find(|hint| combined.contains(hint));

        let mut confidence = if signal.is_some() {
            EDIBLE_HIT_CONFIDENCE
        } else {
            EDIBLE_MISS_CONFIDENCE
        };

        if self
            .tables
            .container_cues
            .iter()
            .any(|cue| combined.contains(cue))
        {
            confidence = confidence.min(CONTAINER_CONFIDENCE_CAP);
        }

        EdibleGuess {
            is_edible: confidence > 0.5,
            confidence,
            explain: format!("Signal: {}", signal.unwrap_or("none")),
            signal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> HeuristicEngine {
        HeuristicEngine::new().unwrap()
    }

    #[test]
    fn test_first_hint_in_dictionary_order_wins() {
        // "milk" precedes "chocolate" in the dictionary even though it comes
        // later in the text.
        let guess = engine().guess_edible("chocolate milk", "");
        assert_eq!(guess.signal, Some("milk"));
        assert_eq!(guess.explain, "Signal: milk");
        assert!(guess.is_edible);
        assert_eq!(guess.confidence, 0.85);
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let guess = engine().guess_edible("Organic APPLES", "");
        assert_eq!(guess.signal, Some("apple"));
    }

    #[test]
    fn test_container_cue_caps_confidence() {
        let guess = engine().guess_edible("apple juice in a plastic bottle", "");
        assert_eq!(guess.signal, Some("apple"));
        assert_eq!(guess.confidence, 0.2);
        assert!(!guess.is_edible);
    }

    #[test]
    fn test_container_cue_from_image_name() {
        let guess = engine().guess_edible("banana", "pet_bottle.jpg");
        assert!(!guess.is_edible);
    }

    #[test]
    fn test_no_signal() {
        let guess = engine().guess_edible("", "");
        assert_eq!(guess.signal, None);
        assert_eq!(guess.confidence, 0.35);
        assert!(!guess.is_edible);
        assert_eq!(guess.explain, "Signal: none");
    }
}
