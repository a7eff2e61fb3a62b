use serde_json::json;

/// Returns the JSON schema for remote assessment replies
pub fn get_assessment_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "nutrition": {
                "type": "object",
                "nullable": true,
                "properties": {
                    "serving": { "type": "string" },
                    "values": {
                        "type": "object",
                        "properties": {
                            "calories": { "type": "number" },
                            "protein_g": { "type": "number" },
                            "fat_g": { "type": "number" },
                            "carbs_g": { "type": "number" },
                            "fiber_g": { "type": "number" },
                            "sodium_mg": { "type": "number" },
                            "calcium_mg": { "type": "number" },
                            "iron_mg": { "type": "number" }
                        },
                        "required": [
                            "calories", "protein_g", "fat_g", "carbs_g",
                            "fiber_g", "sodium_mg", "calcium_mg", "iron_mg"
                        ]
                    },
                    "assumptions": { "type": "string" }
                },
                "required": ["serving", "values"]
            },
            "eco": {
                "type": "object",
                "properties": {
                    "materials": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "carbonTier": {
                        "type": "string",
                        "enum": ["Low", "Medium", "High", "Very High"]
                    },
                    "recyclable": { "type": "boolean" },
                    "guidance": {
                        "type": "array",
                        "items": { "type": "string" }
                    }
                },
                "required": ["materials", "carbonTier", "recyclable", "guidance"]
            },
            "alternatives": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "item": { "type": "string" },
                        "why": { "type": "string" }
                    },
                    "required": ["item", "why"]
                }
            },
            "tips": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["eco", "alternatives", "tips"]
    })
}
