use tracing::{debug, instrument};

use crate::domain::{
    assessment::{
        entities::AssessmentResult,
        ports::{AssessmentService, ClassifierBackend},
        value_objects::AnalysisInput,
    },
    common::services::Service,
    heuristics,
    history::ports::HistoryRepository,
};

impl<CB, H> AssessmentService for Service<CB, H>
where
    CB: ClassifierBackend,
    H: HistoryRepository,
{
    #[instrument(skip(self, input), fields(backend = self.classifier.name()))]
    async fn analyze(&self, input: AnalysisInput) -> AssessmentResult {
        let result = self.classifier.classify(input).await;

        debug!(
            is_edible = result.edible.is_edible,
            carbon_tier = %result.eco.carbon_tier,
            source = ?result.source,
            overall_confidence = result.overall_confidence,
            "assessment complete"
        );

        result
    }

    fn explain(&self, result: &AssessmentResult) -> String {
        heuristics::explain(result)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{
        assessment::{
            entities::{AssessmentSource, CarbonTier},
            ports::MockClassifierBackend,
        },
        heuristics::HeuristicEngine,
        history::ports::MockHistoryRepository,
    };

    fn service_with_engine() -> Service<MockClassifierBackend, MockHistoryRepository> {
        let engine = Arc::new(HeuristicEngine::new().unwrap());

        let mut classifier = MockClassifierBackend::new();
        classifier.expect_name().return_const("mock");
        classifier.expect_classify().returning(move |input| {
            let engine = Arc::clone(&engine);
            Box::pin(async move { engine.analyze(&input) })
        });

        Service::new(classifier, MockHistoryRepository::new(), 100)
    }

    #[tokio::test]
    async fn test_analyze_delegates_to_backend() {
        let service = service_with_engine();

        let result = service
            .analyze(AnalysisInput::from_text("100g beef steak"))
            .await;

        assert!(result.edible.is_edible);
        assert_eq!(result.eco.carbon_tier, CarbonTier::VeryHigh);
        assert_eq!(result.source, AssessmentSource::Local);
    }

    #[tokio::test]
    async fn test_explain_summarises_result() {
        let service = service_with_engine();

        let result = service
            .analyze(AnalysisInput::from_text("plastic water bottle"))
            .await;
        let line = service.explain(&result);

        assert!(line.starts_with("Edible: No"));
        assert!(line.contains("Carbon tier: High."));
    }
}
