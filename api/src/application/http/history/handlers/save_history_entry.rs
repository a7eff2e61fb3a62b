use axum::extract::State;
use ecoreveal_core::domain::{
    assessment::entities::AssessmentResult,
    history::{entities::HistoryEntry, ports::HistoryService},
};
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
pub struct SaveHistoryEntryResponse {
    pub data: HistoryEntry,
}

#[utoipa::path(
    post,
    path = "",
    tag = "history",
    summary = "Save an assessment",
    description = "Prepends an assessment to the history, dropping the oldest entries beyond the configured capacity.",
    responses(
        (status = 201, body = SaveHistoryEntryResponse)
    ),
    request_body = AssessmentResult
)]
pub async fn save_history_entry(
    State(state): State<AppState>,
    JsonBody(result): JsonBody<AssessmentResult>,
) -> Result<Response<SaveHistoryEntryResponse>, ApiError> {
    let entry = state
        .service
        .save_result(result)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SaveHistoryEntryResponse { data: entry }))
}
