use crate::{
    domain::assessment::{
        entities::AssessmentResult, ports::ClassifierBackend, value_objects::AnalysisInput,
    },
    infrastructure::llm::gemini_client::GeminiLLMClient,
};

pub mod local;
pub mod remote;

pub use local::LocalHeuristicBackend;
pub use remote::RemoteInferenceBackend;

/// The backend picked at start-up from configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredClassifier {
    Local(LocalHeuristicBackend),
    Remote(RemoteInferenceBackend<GeminiLLMClient>),
}

impl ClassifierBackend for ConfiguredClassifier {
    async fn classify(&self, input: AnalysisInput) -> AssessmentResult {
        match self {
            ConfiguredClassifier::Local(backend) => backend.classify(input).await,
            ConfiguredClassifier::Remote(backend) => backend.classify(input).await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ConfiguredClassifier::Local(backend) => backend.name(),
            ConfiguredClassifier::Remote(backend) => backend.name(),
        }
    }
}
