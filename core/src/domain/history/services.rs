use tracing::{info, instrument};

use crate::domain::{
    assessment::{entities::AssessmentResult, ports::ClassifierBackend},
    common::{entities::app_errors::CoreError, services::Service},
    history::{
        entities::HistoryEntry,
        ports::{HistoryRepository, HistoryService},
    },
};

impl<CB, H> HistoryService for Service<CB, H>
where
    CB: ClassifierBackend,
    H: HistoryRepository,
{
    #[instrument(skip(self, result))]
    async fn save_result(&self, result: AssessmentResult) -> Result<HistoryEntry, CoreError> {
        result.check_invariants()?;

        let entry = HistoryEntry::new(result);

        self.history_repository
            .prepend(entry.clone(), self.history_capacity)
            .await?;

        info!(entry_id = %entry.id, "saved assessment to history");
        Ok(entry)
    }

    async fn get_history(&self) -> Result<Vec<HistoryEntry>, CoreError> {
        self.history_repository.list().await
    }

    async fn export_history(&self) -> Result<String, CoreError> {
        let entries = self.history_repository.list().await?;
        let document = serde_json::to_string_pretty(&entries)?;
        Ok(document)
    }

    #[instrument(skip(self))]
    async fn clear_history(&self) -> Result<(), CoreError> {
        self.history_repository.clear().await?;
        info!("cleared assessment history");
        Ok(())
    }
}
