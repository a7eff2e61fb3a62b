use crate::application::http::{
    assessment::router::AssessmentApiDoc, health::HealthApiDoc, history::router::HistoryApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EcoReveal API",
        description = "Heuristic edibility, nutrition and eco-impact assessment of consumer products."
    ),
    nest(
        (path = "/assessments", api = AssessmentApiDoc),
        (path = "/history", api = HistoryApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
