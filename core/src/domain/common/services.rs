use std::sync::Arc;

use crate::domain::{assessment::ports::ClassifierBackend, history::ports::HistoryRepository};

/// Application service shared by every port implementation.
///
/// Holds the configured classifier backend and the history store. All
/// fields are behind `Arc`, so cloning the service is cheap and clones
/// share the same backend and storage.
pub struct Service<CB, H>
where
    CB: ClassifierBackend,
    H: HistoryRepository,
{
    pub(crate) classifier: Arc<CB>,
    pub(crate) history_repository: Arc<H>,
    pub(crate) history_capacity: usize,
}

impl<CB, H> Service<CB, H>
where
    CB: ClassifierBackend,
    H: HistoryRepository,
{
    pub fn new(classifier: CB, history_repository: H, history_capacity: usize) -> Self {
        Self {
            classifier: Arc::new(classifier),
            history_repository: Arc::new(history_repository),
            history_capacity,
        }
    }

    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }
}

impl<CB, H> Clone for Service<CB, H>
where
    CB: ClassifierBackend,
    H: HistoryRepository,
{
    fn clone(&self) -> Self {
        Self {
            classifier: Arc::clone(&self.classifier),
            history_repository: Arc::clone(&self.history_repository),
            history_capacity: self.history_capacity,
        }
    }
}
