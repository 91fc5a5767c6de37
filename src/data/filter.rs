//! Record filtering for `/api/filter`
//!
//! Origin and destination match case-insensitively. Date bounds are
//! inclusive. Blank parameters impose no constraint.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::{FlightPulseError, FlightRecord, Result};

/// Raw query parameters, as sent by the dashboard
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    pub origin: String,
    pub destination: String,
    pub date_from: String,
    pub date_to: String,
}

/// Validated filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightFilter {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl TryFrom<FilterParams> for FlightFilter {
    type Error = FlightPulseError;

    fn try_from(params: FilterParams) -> Result<Self> {
        let filter = Self {
            origin: non_blank(&params.origin),
            destination: non_blank(&params.destination),
            date_from: parse_date("date_from", &params.date_from)?,
            date_to: parse_date("date_to", &params.date_to)?,
        };

        if let (Some(from), Some(to)) = (filter.date_from, filter.date_to)
            && from > to
        {
            return Err(FlightPulseError::InvalidFilter(format!(
                "date_from {} is after date_to {}",
                from, to
            )));
        }

        Ok(filter)
    }
}

impl FlightFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, flight: &FlightRecord) -> bool {
        let origin_ok = self
            .origin
            .as_deref()
            .is_none_or(|o| flight.origin.to_lowercase() == o);
        let destination_ok = self
            .destination
            .as_deref()
            .is_none_or(|d| flight.destination.to_lowercase() == d);
        let from_ok = self.date_from.is_none_or(|from| flight.date >= from);
        let to_ok = self.date_to.is_none_or(|to| flight.date <= to);

        origin_ok && destination_ok && from_ok && to_ok
    }

    pub fn apply(&self, flights: Vec<FlightRecord>) -> Vec<FlightRecord> {
        if self.is_empty() {
            return flights;
        }
        flights.into_iter().filter(|f| self.matches(f)).collect()
    }
}

/// Trimmed, lowercased value, or `None` when blank
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

fn parse_date(field: &str, value: &str) -> Result<Option<NaiveDate>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            FlightPulseError::InvalidFilter(format!(
                "{} must be a YYYY-MM-DD date, got '{}'",
                field, trimmed
            ))
        })
}
