use axum::extract::State;
use ecoreveal_core::domain::assessment::{entities::AssessmentResult, ports::AssessmentService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, JsonBody},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ExplainAssessmentResponse {
    pub data: String,
}

#[utoipa::path(
    post,
    path = "/explain",
    tag = "assessment",
    summary = "Explain an assessment",
    description = "Renders a one-line human-readable summary of a previously returned assessment.",
    responses(
        (status = 200, body = ExplainAssessmentResponse)
    ),
    request_body = AssessmentResult
)]
pub async fn explain_assessment(
    State(state): State<AppState>,
    JsonBody(result): JsonBody<AssessmentResult>,
) -> Result<Response<ExplainAssessmentResponse>, ApiError> {
    Ok(Response::OK(ExplainAssessmentResponse {
        data: state.service.explain(&result),
    }))
}
