//! Flight record model
//!
//! One synthetic or fetched flight. Collections of these are the sole input
//! to aggregation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single flight observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub origin: String,
    pub destination: String,
    /// Ticket price in dollars, always positive
    pub price: f64,
    /// Departure date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub airline: String,
    /// Booking interest in `[0, 1]`
    pub demand_score: f64,
}

impl FlightRecord {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        price: f64,
        date: NaiveDate,
        airline: impl Into<String>,
        demand_score: f64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            price,
            date,
            airline: airline.into(),
            demand_score,
        }
    }

    /// Route label in the `origin → destination` form used by the dashboard
    pub fn route_label(&self) -> String {
        route_label(&self.origin, &self.destination)
    }
}

pub fn route_label(origin: &str, destination: &str) -> String {
    format!("{} → {}", origin, destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_label() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let record = FlightRecord::new("SYD", "MEL", 200.0, date, "X", 0.5);
        assert_eq!(record.route_label(), "SYD → MEL");
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let record = FlightRecord::new("Perth", "Darwin", 321.5, date, "Jetstar", 0.42);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["origin"], "Perth");

        let back: FlightRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
