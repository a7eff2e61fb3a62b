use super::handlers::clear_history::{__path_clear_history, clear_history};
use super::handlers::export_history::{__path_export_history, export_history};
use super::handlers::get_history::{__path_get_history, get_history};
use super::handlers::save_history_entry::{__path_save_history_entry, save_history_entry};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_history, save_history_entry, export_history, clear_history))]
pub struct HistoryApiDoc;

pub fn history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/history", state.args.server.root_path),
            get(get_history)
                .post(save_history_entry)
                .delete(clear_history),
        )
        .route(
            &format!("{}/history/export", state.args.server.root_path),
            get(export_history),
        )
}
