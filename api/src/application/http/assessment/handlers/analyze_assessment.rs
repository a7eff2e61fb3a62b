use axum::extract::State;
use ecoreveal_core::domain::assessment::{
    entities::AssessmentResult, ports::AssessmentService, value_objects::AnalysisInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    assessment::validators::AnalyzeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const EMPTY_SCAN_MESSAGE: &str = "Add a photo or describe the product.";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeAssessmentResponse {
    pub data: AssessmentResult,
    pub explanation: String,
}

#[utoipa::path(
    post,
    path = "",
    tag = "assessment",
    summary = "Assess a product",
    description = "Runs the configured classifier on a product description and/or image file name and returns edibility, nutrition, eco impact, alternatives and tips.",
    responses(
        (status = 200, body = AnalyzeAssessmentResponse),
        (status = 400, description = "Empty or invalid request")
    ),
    request_body = AnalyzeRequest
)]
pub async fn analyze_assessment(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeRequest>,
) -> Result<Response<AnalyzeAssessmentResponse>, ApiError> {
    let input = AnalysisInput::from(payload);
    if input.is_blank() {
        return Err(ApiError::BadRequest(EMPTY_SCAN_MESSAGE.to_string()));
    }

    let result = state.service.analyze(input).await;
    let explanation = state.service.explain(&result);

    Ok(Response::OK(AnalyzeAssessmentResponse {
        data: result,
        explanation,
    }))
}
