use axum::extract::State;
use ecoreveal_core::domain::common::ClassifierKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

/// Public runtime settings. The API key is never exposed.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigResponse {
    pub classifier_backend: String,
    pub gemini_model: Option<String>,
    pub inference_timeout_ms: u64,
    pub history_capacity: usize,
    pub metrics_enabled: bool,
}

pub async fn get_config(State(state): State<AppState>) -> Response<GetConfigResponse> {
    let inference = &state.args.inference;
    let remote = inference.backend == ClassifierKind::Remote;

    Response::OK(GetConfigResponse {
        classifier_backend: inference.backend.to_string(),
        gemini_model: remote.then(|| inference.gemini_model.clone()),
        inference_timeout_ms: inference.timeout_ms,
        history_capacity: state.service.history_capacity(),
        metrics_enabled: state.args.server.metrics_enabled,
    })
}
