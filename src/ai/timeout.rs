//! Unified Timeout Configuration
//!
//! Every outbound call is bounded twice: by the reqwest client timeout and by
//! [`with_timeout`] around the whole future.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::ai::timeout::{TimeoutConfig, with_timeout};
//!
//! let config = TimeoutConfig::default();
//! let result = with_timeout(
//!     config.llm_request,
//!     async { /* LLM call */ },
//!     "LLM request"
//! ).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use crate::config::Config;
use crate::constants::network as net_constants;
use crate::types::{FlightPulseError, Result};

/// Timeouts for the two outbound services
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Timeout for text-generation requests (default: 30 seconds)
    pub llm_request: Duration,
    /// Timeout for flight-data requests (default: 10 seconds)
    pub flight_api: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            llm_request: Duration::from_secs(net_constants::LLM_TIMEOUT_SECS),
            flight_api: Duration::from_secs(net_constants::FLIGHT_API_TIMEOUT_SECS),
        }
    }
}

impl TimeoutConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            llm_request: Duration::from_secs(config.llm.timeout_secs),
            flight_api: Duration::from_secs(config.aviation.timeout_secs),
        }
    }
}

/// Execute an async operation with a timeout
///
/// Returns a timeout error if the operation doesn't complete within the specified duration.
pub async fn with_timeout<T, F>(timeout: Duration, future: F, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(FlightPulseError::timeout(operation_name, timeout)),
    }
}
