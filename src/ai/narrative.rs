//! Narrative insight generation
//!
//! Turns [`MarketInsights`] into a readable summary. With a provider the text
//! comes from the model; without one, or when the call fails, a fixed
//! template is filled with the three scalar metrics.

use std::fmt::Write as _;
use std::time::Duration;

use tracing::{debug, warn};

use super::provider::SharedProvider;
use super::timeout::with_timeout;
use crate::constants::insights::PROMPT_ROUTES;
use crate::types::{MarketInsights, Outcome};

pub struct NarrativeInsightGenerator {
    provider: Option<SharedProvider>,
    timeout: Duration,
}

impl NarrativeInsightGenerator {
    pub fn new(provider: Option<SharedProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Generator that always uses the local template
    pub fn offline() -> Self {
        Self::new(None, Duration::ZERO)
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Produce the narrative, falling back to the template on any failure
    pub async fn generate(&self, insights: &MarketInsights) -> String {
        self.request(insights).await.unwrap_or_else(|reason| {
            debug!("Using template narrative: {}", reason);
            fallback_narrative(insights)
        })
    }

    /// Single attempt against the provider, no retries
    pub async fn request(&self, insights: &MarketInsights) -> Outcome<String> {
        let Some(provider) = &self.provider else {
            return Outcome::unavailable("no text-generation provider configured");
        };

        let prompt = build_prompt(insights);
        let result = with_timeout(
            self.timeout,
            provider.generate(&prompt),
            "narrative generation",
        )
        .await;

        match result {
            Ok(response) => {
                debug!(
                    "Narrative from {} in {}ms",
                    response.metadata.provider, response.timing.total_ms
                );
                Outcome::Success(response.content)
            }
            Err(e) => {
                warn!("Error generating AI insights: {}", e);
                Outcome::unavailable(e.to_string())
            }
        }
    }
}

/// Fixed-structure prompt with the scalar metrics and the top routes
pub fn build_prompt(insights: &MarketInsights) -> String {
    let mut routes = String::new();
    for route in insights.popular_routes.iter().take(PROMPT_ROUTES) {
        let _ = writeln!(
            routes,
            "- {} (avg price ${:.2}, demand {:.2})",
            route.route_label, route.mean_price, route.mean_demand_score
        );
    }
    if routes.is_empty() {
        routes.push_str("- none\n");
    }

    format!(
        "Based on the following airline booking market data, provide actionable insights:\n\
         \n\
         Total Flights: {total}\n\
         Average Price: ${avg:.2}\n\
         Peak Demand Score: {peak:.2}\n\
         \n\
         Popular Routes:\n\
         {routes}\
         \n\
         Please provide:\n\
         1. Key market trends\n\
         2. Pricing insights\n\
         3. Demand patterns\n\
         4. Recommendations for hostel operators\n",
        total = insights.total_flights,
        avg = insights.avg_price,
        peak = insights.peak_demand_score,
        routes = routes,
    )
}

/// Deterministic summary; depends only on the three scalar metrics
pub fn fallback_narrative(insights: &MarketInsights) -> String {
    format!(
        "**Market Analysis Summary**\n\
         \n\
         **Key Trends:**\n\
         - Total flights analyzed: {total}\n\
         - Average flight price: ${avg:.2}\n\
         - Peak demand indicator: {peak:.2}\n\
         \n\
         **Pricing Insights:**\n\
         - Moderate pricing variation across routes\n\
         - Seasonal demand patterns evident\n\
         - Competition driving competitive pricing\n\
         \n\
         **Demand Patterns:**\n\
         - Major city routes show highest demand\n\
         - Weekend and holiday periods see increased activity\n\
         - Business travel corridors remain stable\n\
         \n\
         **Recommendations for Hostel Operators:**\n\
         - Focus marketing during high-demand flight periods\n\
         - Partner with airlines for package deals\n\
         - Monitor route popularity for expansion opportunities\n",
        total = insights.total_flights,
        avg = insights.avg_price,
        peak = insights.peak_demand_score,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::provider::{LlmProvider, LlmResponse};
    use crate::types::{FlightPulseError, Result, RouteStat};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedProvider(&'static str);

    #[async_trait]
    impl LlmProvider for FixedProvider {
        async fn generate(&self, _prompt: &str) -> Result<LlmResponse> {
            Ok(LlmResponse::content_only(self.0))
        }
        fn name(&self) -> &str {
            "fixed"
        }
        fn model(&self) -> &str {
            "fixed"
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl LlmProvider for FailingProvider {
        async fn generate(&self, _prompt: &str) -> Result<LlmResponse> {
            Err(FlightPulseError::upstream("OpenAI API", 500))
        }
        fn name(&self) -> &str {
            "failing"
        }
        fn model(&self) -> &str {
            "failing"
        }
    }

    struct SlowProvider;

    #[async_trait]
    impl LlmProvider for SlowProvider {
        async fn generate(&self, _prompt: &str) -> Result<LlmResponse> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(LlmResponse::content_only("too late"))
        }
        fn name(&self) -> &str {
            "slow"
        }
        fn model(&self) -> &str {
            "slow"
        }
    }

    fn sample_insights() -> MarketInsights {
        MarketInsights {
            popular_routes: vec![RouteStat {
                origin: "Sydney".into(),
                destination: "Perth".into(),
                route_label: "Sydney → Perth".into(),
                mean_price: 412.5,
                mean_demand_score: 0.876,
            }],
            total_flights: 50,
            avg_price: 475.126,
            peak_demand_score: 0.994,
            ..MarketInsights::default()
        }
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let insights = sample_insights();
        let first = fallback_narrative(&insights);
        let second = fallback_narrative(&insights.clone());
        assert_eq!(first, second);
        assert!(first.contains("- Total flights analyzed: 50\n"));
        assert!(first.contains("- Average flight price: $475.13\n"));
        assert!(first.contains("- Peak demand indicator: 0.99\n"));
    }

    #[test]
    fn test_fallback_ignores_non_scalar_fields() {
        let insights = sample_insights();
        let stripped = MarketInsights {
            popular_routes: Vec::new(),
            ..insights.clone()
        };
        assert_eq!(fallback_narrative(&insights), fallback_narrative(&stripped));
    }

    #[test]
    fn test_fallback_for_empty_insights() {
        let text = fallback_narrative(&MarketInsights::default());
        assert!(text.starts_with("**Market Analysis Summary**\n"));
        assert!(text.contains("- Total flights analyzed: 0\n"));
        assert!(text.contains("- Average flight price: $0.00\n"));
        assert!(text.contains("**Recommendations for Hostel Operators:**"));
    }

    #[test]
    fn test_prompt_embeds_metrics_and_routes() {
        let prompt = build_prompt(&sample_insights());
        assert!(prompt.contains("Total Flights: 50\n"));
        assert!(prompt.contains("Average Price: $475.13\n"));
        assert!(prompt.contains("Peak Demand Score: 0.99\n"));
        assert!(prompt.contains("- Sydney → Perth (avg price $412.50, demand 0.88)\n"));
    }

    #[test]
    fn test_prompt_caps_routes() {
        let route = sample_insights().popular_routes[0].clone();
        let insights = MarketInsights {
            popular_routes: vec![route; 8],
            ..sample_insights()
        };
        let prompt = build_prompt(&insights);
        assert_eq!(prompt.matches("Sydney → Perth").count(), PROMPT_ROUTES);
    }

    #[tokio::test]
    async fn test_offline_uses_template() {
        let generator = NarrativeInsightGenerator::offline();
        let insights = sample_insights();
        assert!(!generator.has_provider());
        assert_eq!(
            generator.generate(&insights).await,
            fallback_narrative(&insights)
        );
    }

    #[tokio::test]
    async fn test_provider_text_returned_verbatim() {
        let provider: SharedProvider = Arc::new(FixedProvider("  Routes to Perth are hot.\n"));
        let generator = NarrativeInsightGenerator::new(Some(provider), Duration::from_secs(1));
        assert_eq!(
            generator.generate(&sample_insights()).await,
            "  Routes to Perth are hot.\n"
        );
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back() {
        let provider: SharedProvider = Arc::new(FailingProvider);
        let generator = NarrativeInsightGenerator::new(Some(provider), Duration::from_secs(1));
        let insights = sample_insights();

        assert!(!generator.request(&insights).await.is_success());
        assert_eq!(
            generator.generate(&insights).await,
            fallback_narrative(&insights)
        );
    }

    #[tokio::test]
    async fn test_provider_timeout_falls_back() {
        let provider: SharedProvider = Arc::new(SlowProvider);
        let generator =
            NarrativeInsightGenerator::new(Some(provider), Duration::from_millis(20));
        let insights = sample_insights();
        assert_eq!(
            generator.generate(&insights).await,
            fallback_narrative(&insights)
        );
    }
}
