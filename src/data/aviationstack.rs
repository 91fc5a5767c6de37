//! AviationStack flight source
//!
//! Best-effort enrichment: every failure path logs and yields no records.
//! Callers never see an error from this module.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use url::Url;

use crate::ai::timeout::with_timeout;
use crate::config::{AviationConfig, configured_key};
use crate::constants::aviation::PLACEHOLDER_API_KEY;
use crate::constants::network::USER_AGENT;
use crate::types::{FlightPulseError, Outcome, Result};

/// One airport leg as reported by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightEndpoint {
    pub airport: Option<String>,
    pub iata: Option<String>,
    pub scheduled: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarrierInfo {
    pub name: Option<String>,
    pub iata: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightNumber {
    pub number: Option<String>,
    pub iata: Option<String>,
}

/// A flight record from `/v1/flights`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AviationFlight {
    pub flight_date: Option<String>,
    pub flight_status: Option<String>,
    pub departure: Option<FlightEndpoint>,
    pub arrival: Option<FlightEndpoint>,
    pub airline: Option<CarrierInfo>,
    pub flight: Option<FlightNumber>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FlightsResponse {
    data: Vec<AviationFlight>,
}

pub struct AviationStackClient {
    /// Key from configuration, used by [`Self::fetch_configured`]
    api_key: Option<SecretString>,
    api_base: String,
    limit: u32,
    timeout: Duration,
    client: reqwest::Client,
}

impl AviationStackClient {
    /// `timeout` bounds both the HTTP client and the whole request
    pub fn new(config: &AviationConfig, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        let api_key = configured_key(config.api_key.as_deref(), PLACEHOLDER_API_KEY)
            .map(|k| SecretString::from(k.to_string()));

        Ok(Self {
            api_key,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            limit: config.limit,
            timeout,
            client,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch with the key from configuration
    pub async fn fetch_configured(&self) -> Vec<AviationFlight> {
        let key = self.api_key.as_ref().map(|k| k.expose_secret());
        self.fetch(key).await
    }

    /// Fetch live flights, or nothing when unconfigured or unreachable
    pub async fn fetch(&self, api_key: Option<&str>) -> Vec<AviationFlight> {
        self.try_fetch(api_key).await.unwrap_or_default()
    }

    /// Single attempt, no retries
    pub async fn try_fetch(&self, api_key: Option<&str>) -> Outcome<Vec<AviationFlight>> {
        let Some(key) = configured_key(api_key, PLACEHOLDER_API_KEY) else {
            warn!("AviationStack API key not configured, using sample data");
            return Outcome::unavailable("AviationStack API key not configured");
        };
        let key = SecretString::from(key.to_string());

        let result = with_timeout(self.timeout, self.request(&key), "AviationStack request").await;
        match result {
            Ok(flights) => {
                debug!("Fetched {} flights from AviationStack", flights.len());
                Outcome::Success(flights)
            }
            Err(e) => {
                error!("Error fetching aviation data: {}", e);
                Outcome::unavailable(e.to_string())
            }
        }
    }

    async fn request(&self, key: &SecretString) -> Result<Vec<AviationFlight>> {
        let url = self.flights_url(key)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FlightPulseError::upstream("AviationStack API", status.as_u16()));
        }

        let body: FlightsResponse = response.json().await?;
        Ok(body.data)
    }

    fn flights_url(&self, key: &SecretString) -> Result<Url> {
        let limit = self.limit.to_string();
        Url::parse_with_params(
            &format!("{}/flights", self.api_base),
            &[("access_key", key.expose_secret()), ("limit", limit.as_str())],
        )
        .map_err(|e| FlightPulseError::Config(format!("Invalid AviationStack URL: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_base: &str) -> AviationStackClient {
        AviationStackClient::new(
            &AviationConfig {
                api_base: api_base.to_string(),
                ..AviationConfig::default()
            },
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_missing_key_returns_empty() {
        let source = client("http://127.0.0.1:9");
        assert!(source.fetch(None).await.is_empty());
        assert!(source.fetch(Some("")).await.is_empty());
        assert!(
            !source
                .try_fetch(Some("your-aviationstack-api-key"))
                .await
                .is_success()
        );
    }

    #[tokio::test]
    async fn test_configured_key_filters_placeholder() {
        let source = AviationStackClient::new(
            &AviationConfig {
                api_key: Some("your-aviationstack-api-key".into()),
                ..AviationConfig::default()
            },
            Duration::from_secs(1),
        )
        .unwrap();
        assert!(!source.is_configured());
        assert!(source.fetch_configured().await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_returns_empty() {
        let source = client("http://127.0.0.1:9");
        assert!(source.fetch(Some("real-key")).await.is_empty());
    }

    #[test]
    fn test_flights_url() {
        let source = client("http://api.aviationstack.com/v1/");
        let url = source
            .flights_url(&SecretString::from("abc".to_string()))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.aviationstack.com/v1/flights?access_key=abc&limit=100"
        );
    }

    #[test]
    fn test_response_parsing_tolerates_partial_records() {
        let body = r#"{
            "pagination": {"limit": 100, "count": 2},
            "data": [
                {
                    "flight_date": "2024-01-01",
                    "flight_status": "scheduled",
                    "departure": {"airport": "Sydney Kingsford Smith", "iata": "SYD"},
                    "arrival": {"airport": "Melbourne", "iata": "MEL", "scheduled": "2024-01-01T10:00:00+00:00"},
                    "airline": {"name": "Qantas", "iata": "QF"},
                    "flight": {"number": "401", "iata": "QF401"}
                },
                {"flight_date": "2024-01-02", "departure": null}
            ]
        }"#;
        let parsed: FlightsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(
            parsed.data[0].airline.as_ref().and_then(|a| a.name.as_deref()),
            Some("Qantas")
        );
        assert!(parsed.data[1].departure.is_none());
    }
}
