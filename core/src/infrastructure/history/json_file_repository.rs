use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tokio::sync::Mutex;
use tracing::{instrument, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::{entities::HistoryEntry, ports::HistoryRepository},
};

/// History kept as a single JSON array file on the local device.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a crash mid-write never leaves a truncated history. All
/// access is serialized through one lock.
#[derive(Debug)]
pub struct JsonFileHistoryRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means empty history. An unreadable document is logged
    /// and treated as empty so the next save starts a fresh list.
    async fn read_entries(&self) -> Result<Vec<HistoryEntry>, CoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "history file is corrupt, starting empty");
                Ok(Vec::new())
            }
        }
    }

    async fn write_entries(&self, entries: &[HistoryEntry]) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let document = serde_json::to_vec(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp_path, document).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

impl HistoryRepository for JsonFileHistoryRepository {
    async fn list(&self) -> Result<Vec<HistoryEntry>, CoreError> {
        let _guard = self.lock.lock().await;
        self.read_entries().await
    }

    #[instrument(skip(self, entry), fields(path = %self.path.display()))]
    async fn prepend(&self, entry: HistoryEntry, capacity: usize) -> Result<(), CoreError> {
        let _guard = self.lock.lock().await;

        let mut entries = self.read_entries().await?;
        entries.insert(0, entry);
        entries.truncate(capacity);

        self.write_entries(&entries).await
    }

    async fn clear(&self) -> Result<(), CoreError> {
        let _guard = self.lock.lock().await;

        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::{assessment::value_objects::AnalysisInput, heuristics::HeuristicEngine};

    fn entry(text: &str) -> HistoryEntry {
        let engine = HeuristicEngine::new().unwrap();
        HistoryEntry::new(engine.analyze(&AnalysisInput::from_text(text)))
    }

    fn repository(dir: &TempDir) -> JsonFileHistoryRepository {
        JsonFileHistoryRepository::new(dir.path().join("history.json"))
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_history() {
        let dir = TempDir::new().unwrap();
        assert!(repository(&dir).list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_prepend_keeps_newest_first() {
        let dir = TempDir::new().unwrap();
        let repository = repository(&dir);

        repository.prepend(entry("apple"), 100).await.unwrap();
        repository.prepend(entry("milk"), 100).await.unwrap();

        let entries = repository.list().await.unwrap();
        let texts: Vec<_> = entries.iter().map(|e| e.result.input.text.as_str()).collect();
        assert_eq!(texts, ["milk", "apple"]);
    }

    #[tokio::test]
    async fn test_prepend_enforces_capacity() {
        let dir = TempDir::new().unwrap();
        let repository = repository(&dir);

        for text in ["one", "two", "three", "four"] {
            repository.prepend(entry(text), 3).await.unwrap();
        }

        let entries = repository.list().await.unwrap();
        let texts: Vec<_> = entries.iter().map(|e| e.result.input.text.as_str()).collect();
        assert_eq!(texts, ["four", "three", "two"]);
    }

    #[tokio::test]
    async fn test_history_survives_a_new_repository_instance() {
        let dir = TempDir::new().unwrap();
        let saved = entry("oats");

        repository(&dir).prepend(saved.clone(), 100).await.unwrap();
        let entries = repository(&dir).list().await.unwrap();

        assert_eq!(entries, vec![saved]);
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let dir = TempDir::new().unwrap();
        let repository = repository(&dir);

        repository.prepend(entry("apple"), 100).await.unwrap();
        repository.clear().await.unwrap();
        repository.clear().await.unwrap();

        assert!(repository.list().await.unwrap().is_empty());
        assert!(!repository.path().exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let repository = repository(&dir);
        tokio::fs::write(repository.path(), b"not json").await.unwrap();

        assert!(repository.list().await.unwrap().is_empty());

        repository.prepend(entry("apple"), 100).await.unwrap();
        assert_eq!(repository.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let repository = JsonFileHistoryRepository::new(dir.path().join("nested/deeper/h.json"));

        repository.prepend(entry("apple"), 100).await.unwrap();
        assert_eq!(repository.list().await.unwrap().len(), 1);
    }
}
