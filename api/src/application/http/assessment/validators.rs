use ecoreveal_core::domain::assessment::value_objects::AnalysisInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    #[validate(length(max = 5000, message = "text must be at most 5000 characters"))]
    pub text: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "imageName must be at most 255 characters"))]
    pub image_name: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "location must be at most 200 characters"))]
    pub location: String,
}

impl From<AnalyzeRequest> for AnalysisInput {
    fn from(request: AnalyzeRequest) -> Self {
        AnalysisInput::new(
            request.text.trim(),
            request.image_name.trim(),
            request.location.trim(),
        )
    }
}
