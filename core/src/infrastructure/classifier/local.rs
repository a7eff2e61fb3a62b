use std::sync::Arc;

use crate::domain::{
    assessment::{
        entities::AssessmentResult, ports::ClassifierBackend, value_objects::AnalysisInput,
    },
    heuristics::HeuristicEngine,
};

/// Runs the keyword heuristics in-process.
#[derive(Debug, Clone)]
pub struct LocalHeuristicBackend {
    engine: Arc<HeuristicEngine>,
}

impl LocalHeuristicBackend {
    pub fn new(engine: Arc<HeuristicEngine>) -> Self {
        Self { engine }
    }
}

impl ClassifierBackend for LocalHeuristicBackend {
    async fn classify(&self, input: AnalysisInput) -> AssessmentResult {
        self.engine.analyze(&input)
    }

    fn name(&self) -> &'static str {
        "local-heuristic"
    }
}
