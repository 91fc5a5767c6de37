//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Sample data generation constants
pub mod sample {
    /// Default number of records per request
    pub const DEFAULT_COUNT: usize = 50;

    /// Cities used for origins and destinations
    pub const CITIES: &[&str] = &[
        "Sydney",
        "Melbourne",
        "Brisbane",
        "Perth",
        "Adelaide",
        "Darwin",
    ];

    /// Carriers assigned to sample flights
    pub const AIRLINES: &[&str] = &["Qantas", "Virgin Australia", "Jetstar", "Tiger Airways"];

    /// Ticket price range in dollars (inclusive)
    pub const MIN_PRICE: f64 = 150.0;
    pub const MAX_PRICE: f64 = 800.0;

    /// Departure offset from today in days (inclusive)
    pub const MIN_DAYS_AHEAD: u64 = 1;
    pub const MAX_DAYS_AHEAD: u64 = 90;

    /// Demand score range (inclusive)
    pub const MIN_DEMAND: f64 = 0.3;
    pub const MAX_DEMAND: f64 = 1.0;
}

/// Aggregation limits
pub mod insights {
    /// Maximum entries in `popular_routes`
    pub const MAX_POPULAR_ROUTES: usize = 10;

    /// Maximum entries in `demand_periods`
    pub const MAX_DEMAND_PERIODS: usize = 5;

    /// Routes embedded in the narrative prompt
    pub const PROMPT_ROUTES: usize = 5;
}

/// Text generation constants
pub mod llm {
    pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
    pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

    /// Completion length cap
    pub const DEFAULT_MAX_TOKENS: usize = 500;

    pub const DEFAULT_TEMPERATURE: f32 = 0.7;

    /// Placeholder shipped in example configs, treated as unset
    pub const PLACEHOLDER_API_KEY: &str = "your-openai-api-key";
}

/// AviationStack flight API constants
pub mod aviation {
    pub const DEFAULT_API_BASE: &str = "http://api.aviationstack.com/v1";

    /// Records requested per call (API maximum is 100)
    pub const DEFAULT_LIMIT: u32 = 100;

    /// Placeholder shipped in example configs, treated as unset
    pub const PLACEHOLDER_API_KEY: &str = "your-aviationstack-api-key";
}

/// HTTP/Network constants
pub mod network {
    /// Text-generation request timeout (seconds)
    pub const LLM_TIMEOUT_SECS: u64 = 30;

    /// Flight-data request timeout (seconds)
    pub const FLIGHT_API_TIMEOUT_SECS: u64 = 10;

    /// User agent sent to the flight-data API
    pub const USER_AGENT: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
}

/// HTTP server constants
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 5000;
}
