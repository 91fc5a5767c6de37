//! Market insights model
//!
//! Output of the aggregation pipeline. Field names on the wire match the
//! payload the dashboard page reads (`route`, `price`, `demand_score`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregated statistics for one origin/destination pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStat {
    pub origin: String,
    pub destination: String,
    /// `origin → destination`
    #[serde(rename = "route")]
    pub route_label: String,
    #[serde(rename = "price")]
    pub mean_price: f64,
    #[serde(rename = "demand_score")]
    pub mean_demand_score: f64,
}

/// Mean price on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    #[serde(rename = "price")]
    pub mean_price: f64,
}

/// Mean demand on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandPeriod {
    pub date: NaiveDate,
    #[serde(rename = "demand_score")]
    pub mean_demand_score: f64,
}

/// Aggregated statistics for one carrier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineStat {
    pub airline: String,
    #[serde(rename = "price")]
    pub mean_price: f64,
    #[serde(rename = "demand_score")]
    pub mean_demand_score: f64,
}

/// Full summary of a flight collection
///
/// `Default` is the all-empty, all-zero value returned for empty input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketInsights {
    /// Descending by mean demand, at most 10
    pub popular_routes: Vec<RouteStat>,
    /// Ascending by date, one per distinct date
    pub price_trends: Vec<PricePoint>,
    /// Descending by mean demand, at most 5
    pub demand_periods: Vec<DemandPeriod>,
    pub airline_stats: Vec<AirlineStat>,
    pub total_flights: usize,
    pub avg_price: f64,
    pub peak_demand_score: f64,
}

impl MarketInsights {
    pub fn is_empty(&self) -> bool {
        self.total_flights == 0
    }
}
