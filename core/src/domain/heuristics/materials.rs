use crate::domain::{
    assessment::entities::Material,
    heuristics::{HeuristicEngine, normalize},
};

impl HeuristicEngine {
    /// Every material category whose keywords appear in `text`, in table
    /// order. Never empty: yields `[Material::Unknown]` when nothing matches.
    pub fn detect_materials(&self, text: &str) -> Vec<Material> {
        let text = normalize(text);

        let mut found: Vec<Material> = self
            .tables
            .materials
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
            .map(|(material, _)| material.clone())
            .collect();

        if found.is_empty() {
            found.push(Material::Unknown);
        }

        found
    }
}
