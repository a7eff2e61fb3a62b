//! Deterministic keyword-and-lookup assessment engine.
//!
//! Each pass is a pure function of its input. The engine owns its keyword
//! tables and compiled patterns and holds no other state, so one instance is
//! built at start-up and shared across requests.

use chrono::Utc;
use regex::Regex;

use crate::domain::{
    assessment::{
        entities::{AssessmentResult, AssessmentSource, EdibleAssessment},
        value_objects::AnalysisInput,
    },
    common::entities::app_errors::CoreError,
    heuristics::tables::KeywordTables,
};

pub mod alternatives;
pub mod confidence;
pub mod eco;
pub mod edibility;
pub mod explain;
pub mod materials;
pub mod nutrition;
pub mod tables;
pub mod tips;

pub use confidence::confidence_score;
pub use edibility::EdibleGuess;
pub use explain::explain;

/// `<integer><optional space><unit>`, first occurrence only.
const SERVING_PATTERN: &str = r"(\d+)\s?(g|ml|oz)";

#[derive(Debug, Clone)]
pub struct HeuristicEngine {
    tables: KeywordTables,
    serving_pattern: Regex,
}

impl HeuristicEngine {
    pub fn new() -> Result<Self, CoreError> {
        Self::with_tables(KeywordTables::standard())
    }

    pub fn with_tables(tables: KeywordTables) -> Result<Self, CoreError> {
        let serving_pattern = Regex::new(SERVING_PATTERN).map_err(|e| {
            CoreError::ConfigurationError(format!("invalid serving pattern: {}", e))
        })?;

        Ok(Self {
            tables,
            serving_pattern,
        })
    }

    /// Runs every heuristic pass over `input` and assembles the result.
    pub fn analyze(&self, input: &AnalysisInput) -> AssessmentResult {
        let guess = self.guess_edible(&input.text, &input.image_name);
        let nutrition = guess
            .is_edible
            .then(|| self.estimate_nutrition(&input.text));

        AssessmentResult {
            input: input.clone(),
            overall_confidence: confidence_score(guess.confidence, input.has_image()),
            edible: EdibleAssessment::from(guess),
            nutrition,
            eco: self.eco_assessment(input.eco_text()),
            alternatives: self.alternatives(&input.text),
            tips: self.tips(&input.text, &input.location),
            source: AssessmentSource::Local,
            timestamp: Utc::now(),
        }
    }
}

pub(crate) fn normalize(text: &str) -> String {
    text.to_lowercase()
}
