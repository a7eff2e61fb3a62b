use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use ecoreveal_core::domain::history::{entities::HistoryEntry, ports::HistoryService};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub const EXPORT_FILE_NAME: &str = "ecoreveal-history.json";

#[utoipa::path(
    get,
    path = "/export",
    tag = "history",
    summary = "Export history",
    description = "Downloads the whole history as a pretty-printed JSON document.",
    responses(
        (status = 200, description = "History document", body = Vec<HistoryEntry>, content_type = "application/json")
    )
)]
pub async fn export_history(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let document = state
        .service
        .export_history()
        .await
        .map_err(ApiError::from)?;

    let disposition = format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME);

    Ok((
        [
            (CONTENT_TYPE, "application/json".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        document,
    ))
}
