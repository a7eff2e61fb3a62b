use std::future::Future;

use crate::domain::{
    assessment::{entities::AssessmentResult, value_objects::AnalysisInput},
    common::entities::app_errors::CoreError,
};

/// A strategy that turns an input into an assessment.
///
/// Implementations never fail: whatever happens internally, the caller
/// receives a well-formed result.
#[cfg_attr(test, mockall::automock)]
pub trait ClassifierBackend: Send + Sync {
    fn classify(&self, input: AnalysisInput) -> impl Future<Output = AssessmentResult> + Send;

    fn name(&self) -> &'static str;
}

/// Client for a hosted text-generation model.
#[cfg_attr(test, mockall::automock)]
pub trait InferenceClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for assessment business logic
#[cfg_attr(test, mockall::automock)]
pub trait AssessmentService: Send + Sync {
    fn analyze(&self, input: AnalysisInput) -> impl Future<Output = AssessmentResult> + Send;

    fn explain(&self, result: &AssessmentResult) -> String;
}
