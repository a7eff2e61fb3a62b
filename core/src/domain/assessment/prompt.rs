use crate::domain::assessment::value_objects::AnalysisInput;

const INSTRUCTIONS: &str = "You are a sustainability and nutrition assistant. \
Assess the product described below. Respond with strict JSON only, no prose, \
matching this shape: {\"nutrition\": {\"serving\": string, \"values\": {\"calories\": number, \
\"protein_g\": number, \"fat_g\": number, \"carbs_g\": number, \"fiber_g\": number, \
\"sodium_mg\": number, \"calcium_mg\": number, \"iron_mg\": number}, \"assumptions\": string} \
or null when the product is not food, \"eco\": {\"materials\": [string], \
\"carbonTier\": \"Low\"|\"Medium\"|\"High\"|\"Very High\", \"recyclable\": boolean, \
\"guidance\": [string]}, \"alternatives\": [{\"item\": string, \"why\": string}], \
\"tips\": [string] (at most 4)}.";

/// Renders the prompt sent to a hosted model for one input.
pub fn build_assessment_prompt(input: &AnalysisInput) -> String {
    format!(
        "{INSTRUCTIONS}\n\nProduct description: {}\nImage file name: {}\nUser location: {}",
        or_none(&input.text),
        or_none(&input.image_name),
        or_none(&input.location),
    )
}

fn or_none(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() { "(none)" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_every_input_field() {
        let prompt = build_assessment_prompt(&AnalysisInput::new(
            "oat milk carton",
            "IMG_0042.jpg",
            "Lyon",
        ));
        assert!(prompt.contains("Product description: oat milk carton"));
        assert!(prompt.contains("Image file name: IMG_0042.jpg"));
        assert!(prompt.contains("User location: Lyon"));
        assert!(prompt.contains("strict JSON"));
    }

    #[test]
    fn test_prompt_marks_missing_fields() {
        let prompt = build_assessment_prompt(&AnalysisInput::from_text("apple"));
        assert!(prompt.contains("Image file name: (none)"));
        assert!(prompt.contains("User location: (none)"));
    }
}
