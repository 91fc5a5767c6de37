//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! External-service failures never reach a caller as an error: the flight
//! source and the narrative generator turn them into an [`Outcome`] and fall
//! back. What remains here is what a request handler or the CLI can still
//! observe: bad filters, configuration problems and I/O.
//!
//! [`Outcome`]: super::outcome::Outcome

use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum FlightPulseError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // -------------------------------------------------------------------------
    // External Services
    // -------------------------------------------------------------------------
    /// Text-generation API error
    #[error("LLM API error: {0}")]
    LlmApi(String),

    /// Non-success status from an upstream service
    #[error("{service} returned status {status}")]
    Upstream { service: String, status: u16 },

    /// Operation timeout with context
    #[error("Timeout after {duration:?}: {operation}")]
    Timeout {
        operation: String,
        duration: Duration,
    },

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Chart '{name}' failed: {reason}")]
    Chart { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, FlightPulseError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl FlightPulseError {
    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, duration: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create an upstream status error
    pub fn upstream(service: impl Into<String>, status: u16) -> Self {
        Self::Upstream {
            service: service.into(),
            status,
        }
    }

    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidFilter(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let err = FlightPulseError::timeout("OpenAI request", Duration::from_secs(30));
        assert_eq!(err.to_string(), "Timeout after 30s: OpenAI request");
    }

    #[test]
    fn test_upstream_display() {
        let err = FlightPulseError::upstream("aviationstack", 503);
        assert_eq!(err.to_string(), "aviationstack returned status 503");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(FlightPulseError::InvalidFilter("bad date".into()).is_client_error());
        assert!(!FlightPulseError::Config("missing".into()).is_client_error());
        assert!(!FlightPulseError::LlmApi("boom".into()).is_client_error());
    }
}
