use std::sync::Arc;

use tracing::info;

use crate::{
    domain::{
        common::{ClassifierKind, EcoRevealConfig, entities::app_errors::CoreError, services::Service},
        heuristics::HeuristicEngine,
    },
    infrastructure::{
        classifier::{ConfiguredClassifier, LocalHeuristicBackend, RemoteInferenceBackend},
        history::JsonFileHistoryRepository,
        llm::gemini_client::GeminiLLMClient,
    },
};

pub type EcoRevealService = Service<ConfiguredClassifier, JsonFileHistoryRepository>;

pub fn create_service(config: EcoRevealConfig) -> Result<EcoRevealService, CoreError> {
    let engine = Arc::new(HeuristicEngine::new()?);

    let classifier = match config.classifier.kind {
        ClassifierKind::Local => ConfiguredClassifier::Local(LocalHeuristicBackend::new(engine)),
        ClassifierKind::Remote => {
            let api_key = config
                .classifier
                .llm
                .gemini_api_key
                .filter(|key| !key.trim().is_empty())
                .ok_or_else(|| {
                    CoreError::ConfigurationError(
                        "the remote classifier requires GEMINI_API_KEY".to_string(),
                    )
                })?;

            let client = GeminiLLMClient::new(
                api_key,
                config.classifier.llm.gemini_model,
                config.classifier.timeout,
            )?;

            ConfiguredClassifier::Remote(RemoteInferenceBackend::new(
                client,
                engine,
                config.classifier.timeout,
            ))
        }
    };

    info!(
        backend = config.classifier.kind.as_str(),
        history_path = %config.history.path.display(),
        history_capacity = config.history.capacity,
        "assessment service ready"
    );

    Ok(Service::new(
        classifier,
        JsonFileHistoryRepository::new(config.history.path),
        config.history.capacity,
    ))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::common::{ClassifierConfig, HistoryConfig, LLMConfig};

    fn config(kind: ClassifierKind, api_key: Option<&str>) -> EcoRevealConfig {
        EcoRevealConfig {
            classifier: ClassifierConfig {
                kind,
                llm: LLMConfig {
                    gemini_api_key: api_key.map(String::from),
                    gemini_model: "gemini-2.0-flash".to_string(),
                },
                timeout: Duration::from_secs(5),
            },
            history: HistoryConfig {
                path: "history.json".into(),
                capacity: 100,
            },
        }
    }

    #[test]
    fn test_local_backend_needs_no_key() {
        let service = create_service(config(ClassifierKind::Local, None)).unwrap();
        assert!(matches!(*service.classifier, ConfiguredClassifier::Local(_)));
    }

    #[test]
    fn test_remote_backend_without_key_is_rejected() {
        for key in [None, Some("  ")] {
            let result = create_service(config(ClassifierKind::Remote, key));
            assert!(matches!(result, Err(CoreError::ConfigurationError(_))));
        }
    }

    #[test]
    fn test_remote_backend_with_key() {
        let service = create_service(config(ClassifierKind::Remote, Some("key"))).unwrap();
        assert!(matches!(*service.classifier, ConfiguredClassifier::Remote(_)));
    }
}
