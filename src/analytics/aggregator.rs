//! Market insights aggregation
//!
//! Groups flight records into routes, dates and airlines. Groups are emitted
//! in ascending key order, then ranked with a stable sort, so ties keep that
//! order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::constants::insights::{MAX_DEMAND_PERIODS, MAX_POPULAR_ROUTES};
use crate::types::{
    AirlineStat, DemandPeriod, FlightRecord, MarketInsights, PricePoint, RouteStat, route_label,
};

/// Running sums for one group
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    price_sum: f64,
    demand_sum: f64,
    count: usize,
}

impl Accumulator {
    fn add(&mut self, flight: &FlightRecord) {
        self.price_sum += flight.price;
        self.demand_sum += flight.demand_score;
        self.count += 1;
    }

    fn mean_price(&self) -> f64 {
        self.price_sum / self.count as f64
    }

    fn mean_demand(&self) -> f64 {
        self.demand_sum / self.count as f64
    }
}

fn group_by<K: Ord>(
    flights: &[FlightRecord],
    key: impl Fn(&FlightRecord) -> K,
) -> BTreeMap<K, Accumulator> {
    let mut groups: BTreeMap<K, Accumulator> = BTreeMap::new();
    for flight in flights {
        groups.entry(key(flight)).or_default().add(flight);
    }
    groups
}

/// Descending comparison; incomparable values (NaN) count as equal
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Stateless aggregation service
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightsAggregator;

impl InsightsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Summarize `flights`. Total: empty input yields the default insights.
    pub fn aggregate(&self, flights: &[FlightRecord]) -> MarketInsights {
        if flights.is_empty() {
            return MarketInsights::default();
        }

        let by_date = group_by(flights, |f| f.date);

        let insights = MarketInsights {
            popular_routes: popular_routes(flights),
            price_trends: price_trends(&by_date),
            demand_periods: demand_periods(&by_date),
            airline_stats: airline_stats(flights),
            total_flights: flights.len(),
            avg_price: flights.iter().map(|f| f.price).sum::<f64>() / flights.len() as f64,
            peak_demand_score: flights
                .iter()
                .map(|f| f.demand_score)
                .fold(f64::NEG_INFINITY, f64::max),
        };

        debug!(
            "Aggregated {} flights into {} routes, {} dates, {} airlines",
            insights.total_flights,
            insights.popular_routes.len(),
            insights.price_trends.len(),
            insights.airline_stats.len()
        );

        insights
    }
}

fn popular_routes(flights: &[FlightRecord]) -> Vec<RouteStat> {
    let mut routes: Vec<RouteStat> = group_by(flights, |f| {
        (f.origin.clone(), f.destination.clone())
    })
    .into_iter()
    .map(|((origin, destination), acc)| RouteStat {
        route_label: route_label(&origin, &destination),
        origin,
        destination,
        mean_price: acc.mean_price(),
        mean_demand_score: acc.mean_demand(),
    })
    .collect();

    routes.sort_by(|a, b| descending(a.mean_demand_score, b.mean_demand_score));
    routes.truncate(MAX_POPULAR_ROUTES);
    routes
}

fn price_trends(by_date: &BTreeMap<NaiveDate, Accumulator>) -> Vec<PricePoint> {
    by_date
        .iter()
        .map(|(date, acc)| PricePoint {
            date: *date,
            mean_price: acc.mean_price(),
        })
        .collect()
}

fn demand_periods(by_date: &BTreeMap<NaiveDate, Accumulator>) -> Vec<DemandPeriod> {
    let mut periods: Vec<DemandPeriod> = by_date
        .iter()
        .map(|(date, acc)| DemandPeriod {
            date: *date,
            mean_demand_score: acc.mean_demand(),
        })
        .collect();

    periods.sort_by(|a, b| descending(a.mean_demand_score, b.mean_demand_score));
    periods.truncate(MAX_DEMAND_PERIODS);
    periods
}

fn airline_stats(flights: &[FlightRecord]) -> Vec<AirlineStat> {
    group_by(flights, |f| f.airline.clone())
        .into_iter()
        .map(|(airline, acc)| AirlineStat {
            airline,
            mean_price: acc.mean_price(),
            mean_demand_score: acc.mean_demand(),
        })
        .collect()
}
