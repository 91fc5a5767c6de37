//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! API keys are never serialized and are redacted in debug output.

use serde::{Deserialize, Serialize};

use crate::constants::{aviation, llm, network, sample, server};
use crate::types::{FlightPulseError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// HTTP server settings
    pub server: ServerConfig,

    /// Text-generation provider settings
    pub llm: LlmConfig,

    /// AviationStack flight API settings
    pub aviation: AviationConfig,

    /// Sample data settings
    pub sample: SampleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            server: ServerConfig::default(),
            llm: LlmConfig::default(),
            aviation: AviationConfig::default(),
            sample: SampleConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `FlightPulseError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(FlightPulseError::Config(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(FlightPulseError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if self.llm.timeout_secs == 0 {
            return Err(FlightPulseError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.llm.max_tokens == 0 {
            return Err(FlightPulseError::Config(
                "LLM max_tokens must be greater than 0".to_string(),
            ));
        }

        if self.aviation.timeout_secs == 0 {
            return Err(FlightPulseError::Config(
                "Aviation timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !(1..=100).contains(&self.aviation.limit) {
            return Err(FlightPulseError::Config(format!(
                "Aviation limit must be between 1 and 100, got {}",
                self.aviation.limit
            )));
        }

        if self.sample.count == 0 {
            return Err(FlightPulseError::Config(
                "Sample count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Return the key only if it is set, non-blank and not the shipped placeholder
pub fn configured_key<'a>(key: Option<&'a str>, placeholder: &str) -> Option<&'a str> {
    key.map(str::trim)
        .filter(|k| !k.is_empty() && *k != placeholder)
}

// =============================================================================
// Server Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Session secret (carried for the dashboard, unused by the pipeline)
    #[serde(skip_serializing)]
    pub secret_key: Option<String>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: server::DEFAULT_HOST.to_string(),
            port: server::DEFAULT_PORT,
            secret_key: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model name
    pub model: String,

    /// API base URL (for OpenAI-compatible endpoints)
    pub api_base: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Completion length cap
    pub max_tokens: usize,

    /// Sampling temperature
    pub temperature: f32,

    /// API key, usually injected from `OPENAI_API_KEY`
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: llm::DEFAULT_MODEL.to_string(),
            api_base: llm::DEFAULT_API_BASE.to_string(),
            timeout_secs: network::LLM_TIMEOUT_SECS,
            max_tokens: llm::DEFAULT_MAX_TOKENS,
            temperature: llm::DEFAULT_TEMPERATURE,
            api_key: None,
        }
    }
}

impl LlmConfig {
    /// Usable API key, if any
    pub fn api_key(&self) -> Option<&str> {
        configured_key(self.api_key.as_deref(), llm::PLACEHOLDER_API_KEY)
    }
}

// =============================================================================
// Aviation Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AviationConfig {
    /// API base URL
    pub api_base: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Records requested per call
    pub limit: u32,

    /// API key, usually injected from `AVIATIONSTACK_API_KEY`
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for AviationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AviationConfig")
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .field("limit", &self.limit)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for AviationConfig {
    fn default() -> Self {
        Self {
            api_base: aviation::DEFAULT_API_BASE.to_string(),
            timeout_secs: network::FLIGHT_API_TIMEOUT_SECS,
            limit: aviation::DEFAULT_LIMIT,
            api_key: None,
        }
    }
}

// =============================================================================
// Sample Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Records generated per request
    pub count: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: sample::DEFAULT_COUNT,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
        assert_eq!(config.llm.max_tokens, 500);
        assert_eq!(config.aviation.limit, 100);
        assert_eq!(config.sample.count, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut config = Config::default();
        config.llm.temperature = 3.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.aviation.limit = 500;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.sample.count = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_configured_key_filters_placeholders() {
        assert_eq!(configured_key(None, "placeholder"), None);
        assert_eq!(configured_key(Some("  "), "placeholder"), None);
        assert_eq!(configured_key(Some("placeholder"), "placeholder"), None);
        assert_eq!(configured_key(Some("sk-real"), "placeholder"), Some("sk-real"));
    }

    #[test]
    fn test_api_keys_are_not_serialized() {
        let mut config = Config::default();
        config.llm.api_key = Some("sk-secret".into());
        config.aviation.api_key = Some("av-secret".into());
        config.server.secret_key = Some("session".into());

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
        assert!(!json.contains("av-secret"));
        assert!(!json.contains("session"));

        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
