use std::future::Future;

use crate::domain::{
    assessment::entities::AssessmentResult, common::entities::app_errors::CoreError,
    history::entities::HistoryEntry,
};

/// Storage for the history list, newest entry first.
#[cfg_attr(test, mockall::automock)]
pub trait HistoryRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<HistoryEntry>, CoreError>> + Send;

    /// Inserts `entry` at the front and drops whatever falls beyond
    /// `capacity`, as one atomic step.
    fn prepend(
        &self,
        entry: HistoryEntry,
        capacity: usize,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for history operations
#[cfg_attr(test, mockall::automock)]
pub trait HistoryService: Send + Sync {
    fn save_result(
        &self,
        result: AssessmentResult,
    ) -> impl Future<Output = Result<HistoryEntry, CoreError>> + Send;

    fn get_history(&self) -> impl Future<Output = Result<Vec<HistoryEntry>, CoreError>> + Send;

    /// The whole history as a pretty-printed JSON document.
    fn export_history(&self) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn clear_history(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
