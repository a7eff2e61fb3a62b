use super::handlers::analyze_assessment::{__path_analyze_assessment, analyze_assessment};
use super::handlers::explain_assessment::{__path_explain_assessment, explain_assessment};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_assessment, explain_assessment))]
pub struct AssessmentApiDoc;

pub fn assessment_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/assessments", state.args.server.root_path),
            post(analyze_assessment),
        )
        .route(
            &format!("{}/assessments/explain", state.args.server.root_path),
            post(explain_assessment),
        )
}
