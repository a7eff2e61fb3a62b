use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    assessment::value_objects::AnalysisInput,
    common::entities::app_errors::CoreError,
    heuristics::{
        confidence::{MAX_OVERALL_CONFIDENCE, MIN_OVERALL_CONFIDENCE},
        tips::MAX_TIPS,
    },
};

/// A complete assessment. Built fresh for every call and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub input: AnalysisInput,
    pub edible: EdibleAssessment,
    /// Present exactly when `edible.is_edible` is true.
    pub nutrition: Option<NutritionEstimate>,
    pub eco: EcoAssessment,
    pub alternatives: Vec<Alternative>,
    pub tips: Vec<String>,
    pub overall_confidence: f64,
    #[serde(default)]
    pub source: AssessmentSource,
    pub timestamp: DateTime<Utc>,
}

impl AssessmentResult {
    /// Compares two results ignoring their creation time.
    pub fn same_assessment(&self, other: &AssessmentResult) -> bool {
        self.input == other.input
            && self.edible == other.edible
            && self.nutrition == other.nutrition
            && self.eco == other.eco
            && self.alternatives == other.alternatives
            && self.tips == other.tips
            && self.overall_confidence == other.overall_confidence
            && self.source == other.source
    }

    /// Rejects results no backend could have produced, such as ones
    /// edited by a client before being sent back.
    pub fn check_invariants(&self) -> Result<(), CoreError> {
        let invalid = |reason: &str| Err(CoreError::Invalid(reason.to_string()));

        if self.nutrition.is_some() != self.edible.is_edible {
            return invalid("nutrition must be present exactly when the item is edible");
        }
        if !(0.0..=1.0).contains(&self.edible.confidence) {
            return invalid("edible confidence must be within [0, 1]");
        }
        if self.eco.materials.is_empty() {
            return invalid("eco materials must not be empty");
        }
        if self.alternatives.is_empty() {
            return invalid("at least one alternative is required");
        }
        if self.tips.len() > MAX_TIPS {
            return invalid("at most 4 tips are allowed");
        }
        if !(MIN_OVERALL_CONFIDENCE..=MAX_OVERALL_CONFIDENCE).contains(&self.overall_confidence) {
            return invalid("overall confidence must be within [0.4, 0.95]");
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdibleAssessment {
    pub is_edible: bool,
    pub confidence: f64,
    pub explain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionEstimate {
    pub serving: String,
    pub values: NutrientValues,
    #[serde(default)]
    pub assumptions: String,
}

/// Nutrient amounts for one serving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientValues {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub fiber_g: f64,
    pub sodium_mg: f64,
    pub calcium_mg: f64,
    pub iron_mg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EcoAssessment {
    #[schema(value_type = Vec<String>)]
    pub materials: Vec<Material>,
    pub carbon_tier: CarbonTier,
    pub recyclable: bool,
    pub guidance: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Alternative {
    pub item: String,
    pub why: String,
}

impl Alternative {
    pub fn new(item: impl Into<String>, why: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            why: why.into(),
        }
    }
}

/// Which path produced an assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentSource {
    #[default]
    Local,
    Remote,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CarbonTier {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    /// Only produced when a remote reply carried no usable tier.
    Unknown,
}

impl CarbonTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarbonTier::Low => "Low",
            CarbonTier::Medium => "Medium",
            CarbonTier::High => "High",
            CarbonTier::VeryHigh => "Very High",
            CarbonTier::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CarbonTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarbonTier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "low" => Ok(CarbonTier::Low),
            "medium" => Ok(CarbonTier::Medium),
            "high" => Ok(CarbonTier::High),
            "very high" | "veryhigh" => Ok(CarbonTier::VeryHigh),
            "unknown" => Ok(CarbonTier::Unknown),
            _ => Err(()),
        }
    }
}

/// Material category. Serialized as a plain lowercase string; names a
/// remote model invents are carried through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Material {
    Plastic,
    Metal,
    Glass,
    Paper,
    Textile,
    Electronics,
    Unknown,
    Other(String),
}

impl Material {
    pub fn as_str(&self) -> &str {
        match self {
            Material::Plastic => "plastic",
            Material::Metal => "metal",
            Material::Glass => "glass",
            Material::Paper => "paper",
            Material::Textile => "textile",
            Material::Electronics => "electronics",
            Material::Unknown => "unknown",
            Material::Other(name) => name,
        }
    }
}

impl From<String> for Material {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "plastic" => Material::Plastic,
            "metal" => Material::Metal,
            "glass" => Material::Glass,
            "paper" => Material::Paper,
            "textile" => Material::Textile,
            "electronics" => Material::Electronics,
            "unknown" | "" => Material::Unknown,
            _ => Material::Other(value.trim().to_string()),
        }
    }
}

impl From<Material> for String {
    fn from(value: Material) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
