use std::{sync::Arc, time::Duration};

use chrono::Utc;
use tracing::{debug, warn};

use crate::domain::{
    assessment::{
        entities::{AssessmentResult, AssessmentSource, EdibleAssessment, Material},
        ports::{ClassifierBackend, InferenceClient},
        prompt::build_assessment_prompt,
        remote_response::{RemoteAssessment, parse_remote_response},
        schema::get_assessment_schema,
        value_objects::AnalysisInput,
    },
    common::entities::app_errors::CoreError,
    heuristics::{HeuristicEngine, confidence_score, tips::MAX_TIPS},
};

/// Appended to `edible.explain` when the remote call was abandoned.
pub const FALLBACK_TAG: &str = " (fallback: local heuristics)";

/// Asks a hosted model for the assessment and falls back to the local
/// heuristics on any failure.
///
/// One attempt per call, bounded by `timeout`; there is no retry. Edibility
/// and overall confidence always come from the local engine, so the
/// nutrition/edibility invariant holds whatever the model says.
#[derive(Debug, Clone)]
pub struct RemoteInferenceBackend<C>
where
    C: InferenceClient,
{
    client: C,
    engine: Arc<HeuristicEngine>,
    timeout: Duration,
}

impl<C> RemoteInferenceBackend<C>
where
    C: InferenceClient,
{
    pub fn new(client: C, engine: Arc<HeuristicEngine>, timeout: Duration) -> Self {
        Self {
            client,
            engine,
            timeout,
        }
    }

    async fn request(&self, input: &AnalysisInput) -> Result<RemoteAssessment, CoreError> {
        let call = self
            .client
            .generate_with_text(build_assessment_prompt(input), get_assessment_schema());

        let raw = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| CoreError::ExternalServiceTimeout(self.timeout.as_millis() as u64))??;

        parse_remote_response(&raw)
    }

    fn merge(&self, input: AnalysisInput, remote: RemoteAssessment) -> AssessmentResult {
        let guess = self.engine.guess_edible(&input.text, &input.image_name);

        let nutrition = if guess.is_edible {
            Some(
                remote
                    .nutrition
                    .unwrap_or_else(|| self.engine.estimate_nutrition(&input.text)),
            )
        } else {
            None
        };

        let mut eco = remote.eco;
        if eco.materials.is_empty() {
            eco.materials.push(Material::Unknown);
        }

        let alternatives = if remote.alternatives.is_empty() {
            self.engine.alternatives(&input.text)
        } else {
            remote.alternatives
        };

        let mut tips = if remote.tips.is_empty() {
            self.engine.tips(&input.text, &input.location)
        } else {
            remote.tips
        };
        tips.truncate(MAX_TIPS);

        AssessmentResult {
            overall_confidence: confidence_score(guess.confidence, input.has_image()),
            edible: EdibleAssessment::from(guess),
            nutrition,
            eco,
            alternatives,
            tips,
            source: AssessmentSource::Remote,
            timestamp: Utc::now(),
            input,
        }
    }

    fn fallback(&self, input: &AnalysisInput, error: &CoreError) -> AssessmentResult {
        warn!(error = %error, "remote inference failed, using local heuristics");

        let mut result = self.engine.analyze(input);
        result.edible.explain.push_str(FALLBACK_TAG);
        result.source = AssessmentSource::Fallback;
        result
    }
}

impl<C> ClassifierBackend for RemoteInferenceBackend<C>
where
    C: InferenceClient,
{
    async fn classify(&self, input: AnalysisInput) -> AssessmentResult {
        match self.request(&input).await {
            Ok(remote) => {
                debug!("remote inference succeeded");
                self.merge(input, remote)
            }
            Err(error) => self.fallback(&input, &error),
        }
    }

    fn name(&self) -> &'static str {
        "remote-inference"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{entities::CarbonTier, ports::MockInferenceClient};

    fn engine() -> Arc<HeuristicEngine> {
        Arc::new(HeuristicEngine::new().unwrap())
    }

    fn client_replying(reply: &'static str) -> MockInferenceClient {
        let mut client = MockInferenceClient::new();
        client
            .expect_generate_with_text()
            .times(1)
            .returning(move |_, _| Box::pin(async move { Ok(reply.to_string()) }));
        client
    }

    fn backend(client: MockInferenceClient) -> RemoteInferenceBackend<MockInferenceClient> {
        RemoteInferenceBackend::new(client, engine(), Duration::from_secs(2))
    }

    fn assert_well_formed(result: &AssessmentResult) {
        assert_eq!(result.nutrition.is_some(), result.edible.is_edible);
        assert!(!result.eco.materials.is_empty());
        assert!(!result.alternatives.is_empty());
        assert!(result.tips.len() <= 4);
        assert!((0.4..=0.95).contains(&result.overall_confidence));
    }

    const FULL_REPLY: &str = r#"Here you go:
    {
        "nutrition": {"serving": "1 medium apple", "values": {"calories": 95, "protein_g": 0.5,
            "fat_g": 0.3, "carbs_g": 25, "fiber_g": 4.4, "sodium_mg": 2, "calcium_mg": 11,
            "iron_mg": 0}, "assumptions": "Medium apple, 182 g."},
        "eco": {"materials": ["paper"], "carbonTier": "Low", "recyclable": true,
                "guidance": ["Compost the core."]},
        "alternatives": [{"item": "Local orchard apples", "why": "Shorter transport."}],
        "tips": ["Buy loose fruit.", "Store apples cool.", "Use bruised apples in baking.",
                 "Compost scraps.", "Fifth tip to be dropped."]
    }"#;

    #[tokio::test]
    async fn test_remote_reply_is_merged() {
        let result = backend(client_replying(FULL_REPLY))
            .classify(AnalysisInput::from_text("apple"))
            .await;

        assert_eq!(result.source, AssessmentSource::Remote);
        assert!(result.edible.is_edible);
        assert_eq!(result.edible.explain, "Signal: apple");
        assert_eq!(result.nutrition.as_ref().unwrap().values.calories, 95.0);
        assert_eq!(result.eco.carbon_tier, CarbonTier::Low);
        assert_eq!(result.alternatives[0].item, "Local orchard apples");
        assert_eq!(result.tips.len(), 4);
        assert_well_formed(&result);
    }

    #[tokio::test]
    async fn test_remote_nutrition_dropped_for_non_edible_item() {
        let result = backend(client_replying(FULL_REPLY))
            .classify(AnalysisInput::from_text("plastic apple-shaped toy bottle"))
            .await;

        assert!(!result.edible.is_edible);
        assert!(result.nutrition.is_none());
        assert_well_formed(&result);
    }

    #[tokio::test]
    async fn test_network_failure_falls_back() {
        let mut client = MockInferenceClient::new();
        client.expect_generate_with_text().times(1).returning(|_, _| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError(
                    "connection refused".to_string(),
                ))
            })
        });

        let input = AnalysisInput::from_text("100g beef steak");
        let result = backend(client).classify(input.clone()).await;

        assert_eq!(result.source, AssessmentSource::Fallback);
        assert_eq!(result.edible.explain, format!("Signal: beef{}", FALLBACK_TAG));
        assert_eq!(result.eco.carbon_tier, CarbonTier::VeryHigh);
        assert_eq!(result.nutrition.as_ref().unwrap().values.calories, 250.0);
        assert_well_formed(&result);

        let local = engine().analyze(&input);
        assert_eq!(result.eco, local.eco);
        assert_eq!(result.alternatives, local.alternatives);
    }

    #[tokio::test]
    async fn test_slow_model_times_out_into_fallback() {
        let mut client = MockInferenceClient::new();
        client.expect_generate_with_text().times(1).returning(|_, _| {
            Box::pin(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok("{}".to_string())
            })
        });

        let backend = RemoteInferenceBackend::new(client, engine(), Duration::from_millis(50));
        let result = backend
            .classify(AnalysisInput::from_text("plastic water bottle"))
            .await;

        assert_eq!(result.source, AssessmentSource::Fallback);
        assert!(result.edible.explain.ends_with(FALLBACK_TAG));
        assert_well_formed(&result);
    }

    #[tokio::test]
    async fn test_prose_reply_falls_back() {
        let result = backend(client_replying("Sorry, I can't assess that product."))
            .classify(AnalysisInput::default())
            .await;

        assert_eq!(result.source, AssessmentSource::Fallback);
        assert_eq!(result.eco.materials, vec![Material::Unknown]);
        assert_well_formed(&result);
    }

    #[tokio::test]
    async fn test_partial_reply_is_repaired() {
        let reply = r#"{"eco": "??", "alternatives": [], "tips": []}"#;
        let input = AnalysisInput::new("8oz milk", "", "Porto");

        let result = backend(client_replying(reply)).classify(input.clone()).await;

        assert_eq!(result.source, AssessmentSource::Remote);
        assert_eq!(result.eco.materials, vec![Material::Unknown]);
        assert_eq!(result.eco.carbon_tier, CarbonTier::Unknown);
        assert!(!result.eco.recyclable);

        let local = engine().analyze(&input);
        assert_eq!(result.nutrition, local.nutrition);
        assert_eq!(result.alternatives, local.alternatives);
        assert_eq!(result.tips, local.tips);
        assert_well_formed(&result);
    }

    #[tokio::test]
    async fn test_prompt_and_schema_are_sent() {
        let mut client = MockInferenceClient::new();
        client
            .expect_generate_with_text()
            .withf(|prompt, schema| {
                prompt.contains("Product description: glass jar")
                    && schema["properties"]["eco"].is_object()
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok("{}".to_string()) }));

        let result = backend(client)
            .classify(AnalysisInput::from_text("glass jar"))
            .await;

        assert_eq!(result.source, AssessmentSource::Remote);
        assert_well_formed(&result);
    }
}
