use crate::domain::assessment::entities::AssessmentResult;

/// One-line summary of an assessment.
pub fn explain(result: &AssessmentResult) -> String {
    let materials = result
        .eco
        .materials
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Edible: {} (conf {}) – {} Materials: {}. Carbon tier: {}. Recyclable: {}.",
        if result.edible.is_edible { "Yes" } else { "No" },
        result.edible.confidence,
        result.edible.explain,
        materials,
        result.eco.carbon_tier,
        if result.eco.recyclable {
            "Likely"
        } else {
            "Uncertain"
        },
    )
}
