//! FlightPulse - Airline Booking Market Demand Dashboard
//!
//! Generates synthetic Australian domestic flight bookings, aggregates them
//! into market insights, renders Plotly chart descriptions and asks an LLM
//! for a plain-language summary aimed at hostel operators.
//!
//! ## Core Features
//!
//! - **Market Aggregation**: popular routes, daily price trends, peak demand
//!   dates and per-airline statistics
//! - **Narrative Insights**: OpenAI-compatible summary with a deterministic
//!   template fallback
//! - **Graceful Degradation**: every external service is optional
//! - **Dashboard Server**: axum JSON API plus a static Plotly page
//!
//! ## Quick Start
//!
//! ```ignore
//! use flightpulse::{ConfigLoader, InsightsAggregator, SampleDataGenerator};
//!
//! let config = ConfigLoader::load()?;
//! let flights = SampleDataGenerator::new().generate(config.sample.count);
//! let insights = InsightsAggregator::new().aggregate(&flights);
//! println!("Average price: ${:.2}", insights.avg_price);
//! ```
//!
//! ## Modules
//!
//! - [`data`]: sample generation, filtering, AviationStack client
//! - [`analytics`]: insight aggregation
//! - [`charts`]: Plotly figure construction
//! - [`ai`]: LLM provider abstraction and narrative generation
//! - [`server`]: axum router and handlers
//! - [`config`]: layered configuration

pub mod ai;
pub mod analytics;
pub mod charts;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data;
pub mod server;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use config::{Config, ConfigLoader};
pub use types::{FlightPulseError, Outcome, Result};
pub use types::{FlightRecord, MarketInsights};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use analytics::InsightsAggregator;
pub use charts::{ChartBuilder, ChartMap};
pub use data::{AviationStackClient, FlightFilter, SampleDataGenerator};

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{LlmProvider, LlmResponse, NarrativeInsightGenerator, TimeoutConfig, with_timeout};

// =============================================================================
// Server Re-exports
// =============================================================================

pub use server::{AppState, router};
