//! Composition root for the HTTP server
//!
//! Every service is stateless; `AppState` is cloned into each handler and
//! nothing is shared between requests except configuration.

use std::sync::Arc;

use tracing::info;

use crate::ai::{NarrativeInsightGenerator, TimeoutConfig, create_provider};
use crate::analytics::InsightsAggregator;
use crate::charts::ChartBuilder;
use crate::config::Config;
use crate::data::{AviationStackClient, SampleDataGenerator};
use crate::types::Result;

#[derive(Clone)]
pub struct AppState {
    /// Records generated per request
    pub sample_count: usize,
    pub generator: SampleDataGenerator,
    pub aggregator: InsightsAggregator,
    pub charts: ChartBuilder,
    pub narrator: Arc<NarrativeInsightGenerator>,
    pub live: Arc<AviationStackClient>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let timeouts = TimeoutConfig::from_config(config);

        let provider = create_provider(&config.llm)?;
        if provider.is_some() {
            info!("AI insights enabled (model: {})", config.llm.model);
        } else {
            info!("OpenAI API key not configured, using template insights");
        }

        Ok(Self {
            sample_count: config.sample.count,
            generator: SampleDataGenerator::new(),
            aggregator: InsightsAggregator::new(),
            charts: ChartBuilder::new(),
            narrator: Arc::new(NarrativeInsightGenerator::new(
                provider,
                timeouts.llm_request,
            )),
            live: Arc::new(AviationStackClient::new(
                &config.aviation,
                timeouts.flight_api,
            )?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_runs_offline() {
        let state = AppState::from_config(&Config::default()).unwrap();
        assert_eq!(state.sample_count, 50);
        assert!(!state.narrator.has_provider());
        assert!(!state.live.is_configured());
    }

    #[test]
    fn test_keys_enable_services() {
        let mut config = Config::default();
        config.llm.api_key = Some("sk-test".into());
        config.aviation.api_key = Some("av-test".into());

        let state = AppState::from_config(&config).unwrap();
        assert!(state.narrator.has_provider());
        assert!(state.live.is_configured());
    }

    #[test]
    fn test_flight_timeout_comes_from_config() {
        let mut config = Config::default();
        config.aviation.timeout_secs = 3;

        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.live.timeout(), std::time::Duration::from_secs(3));
    }
}
