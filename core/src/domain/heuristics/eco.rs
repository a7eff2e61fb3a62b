use crate::domain::{
    assessment::entities::{CarbonTier, EcoAssessment, Material},
    heuristics::{
        HeuristicEngine, normalize,
        tables::{HIGH_IMPACT_FOOD_CUE, RECYCLABLE_PLASTIC_CUE},
    },
};

impl HeuristicEngine {
    pub fn eco_assessment(&self, text: &str) -> EcoAssessment {
        let materials = self.detect_materials(text);
        let normalized = normalize(text);

        EcoAssessment {
            carbon_tier: carbon_tier(&materials, &normalized),
            recyclable: is_recyclable(&materials, &normalized),
            guidance: self
                .tables
                .guidance
                .iter()
                .filter(|(material, _)| materials.contains(material))
                .map(|(_, advice)| advice.to_string())
                .collect(),
            materials,
        }
    }
}

/// Later rules override earlier ones: plastic raises the tier, paper or
/// glass lowers it again, and beef always ends at the top.
fn carbon_tier(materials: &[Material], text: &str) -> CarbonTier {
    let mut tier = CarbonTier::Medium;
    if materials.contains(&Material::Plastic) {
        tier = CarbonTier::High;
    }
    if materials.contains(&Material::Paper) || materials.contains(&Material::Glass) {
        tier = CarbonTier::Low;
    }
    if text.contains(HIGH_IMPACT_FOOD_CUE) {
        tier = CarbonTier::VeryHigh;
    }
    tier
}

fn is_recyclable(materials: &[Material], text: &str) -> bool {
    materials
        .iter()
        .any(|m| matches!(m, Material::Glass | Material::Metal | Material::Paper))
        || text.contains(RECYCLABLE_PLASTIC_CUE)
}
