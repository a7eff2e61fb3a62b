//! Lenient parsing of hosted-model replies.
//!
//! Models wrap JSON in prose or code fences and drop or mistype fields. The
//! reply is cut down to its outermost object, then every field is read on
//! its own: a broken field gets its default without discarding the others.

use serde_json::Value;

use crate::domain::{
    assessment::entities::{Alternative, CarbonTier, EcoAssessment, Material, NutritionEstimate},
    common::entities::app_errors::CoreError,
};

/// The subset of an assessment a hosted model supplies.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteAssessment {
    pub nutrition: Option<NutritionEstimate>,
    pub eco: EcoAssessment,
    pub alternatives: Vec<Alternative>,
    pub tips: Vec<String>,
}

/// Slice from the first `{` to the last `}`, if there is one.
pub fn extract_json_object(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    (end > start).then(|| &response[start..=end])
}

/// Fails only when the reply holds no parseable JSON object at all.
pub fn parse_remote_response(response: &str) -> Result<RemoteAssessment, CoreError> {
    let json = extract_json_object(response).ok_or_else(|| {
        CoreError::ExternalServiceError("no JSON object in model reply".to_string())
    })?;

    let value: Value = serde_json::from_str(json).map_err(|e| {
        CoreError::ExternalServiceError(format!("malformed JSON in model reply: {}", e))
    })?;

    if !value.is_object() {
        return Err(CoreError::ExternalServiceError(
            "model reply is not a JSON object".to_string(),
        ));
    }

    Ok(RemoteAssessment {
        nutrition: value
            .get("nutrition")
            .and_then(|v| serde_json::from_value(v.clone()).ok()),
        eco: parse_eco(value.get("eco")),
        alternatives: parse_alternatives(value.get("alternatives")),
        tips: string_array(value.get("tips")),
    })
}

fn parse_eco(value: Option<&Value>) -> EcoAssessment {
    let field = |name: &str| value.and_then(|eco| eco.get(name));

    EcoAssessment {
        materials: string_array(field("materials"))
            .into_iter()
            .map(Material::from)
            .collect(),
        carbon_tier: field("carbonTier")
            .or_else(|| field("carbon_tier"))
            .and_then(Value::as_str)
            .and_then(|tier| tier.parse().ok())
            .unwrap_or(CarbonTier::Unknown),
        recyclable: field("recyclable")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        guidance: string_array(field("guidance")),
    }
}

fn parse_alternatives(value: Option<&Value>) -> Vec<Alternative> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let name = item.get("item")?.as_str()?;
                    let why = item.get("why").and_then(Value::as_str).unwrap_or("");
                    Some(Alternative::new(name, why))
                })
                .collect()
        })
        .unwrap_or_default()
}

fn string_array(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
