//! Chart descriptions for client-side rendering
//!
//! Each chart is built and serialized on its own. An empty source list
//! omits the chart. A chart that fails (for example on a non-finite
//! metric) is logged and omitted without affecting the others.

pub mod figure;

use std::collections::BTreeMap;

use tracing::error;

pub use figure::{Figure, Layout, Trace, TraceType};

use crate::types::{FlightPulseError, MarketInsights, Result};

pub const POPULAR_ROUTES: &str = "popular_routes";
pub const PRICE_TRENDS: &str = "price_trends";
pub const AIRLINE_COMPARISON: &str = "airline_comparison";

/// Chart constructor; `Ok(None)` omits the chart
pub type ChartFn = fn(&MarketInsights) -> Result<Option<Figure>>;

const CHARTS: &[(&str, ChartFn)] = &[
    (POPULAR_ROUTES, popular_routes_chart),
    (PRICE_TRENDS, price_trends_chart),
    (AIRLINE_COMPARISON, airline_comparison_chart),
];

/// Chart name → serialized Plotly figure
pub type ChartMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, Default)]
pub struct ChartBuilder;

impl ChartBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, insights: &MarketInsights) -> ChartMap {
        self.build_from(insights, CHARTS)
    }

    /// Build each named chart on its own; failures are logged and skipped
    pub fn build_from(&self, insights: &MarketInsights, charts: &[(&str, ChartFn)]) -> ChartMap {
        let mut built = ChartMap::new();
        for &(name, chart) in charts {
            let result = chart(insights).and_then(|figure| match figure {
                Some(figure) => serialize(name, &figure).map(Some),
                None => Ok(None),
            });
            match result {
                Ok(Some(json)) => {
                    built.insert(name.to_string(), json);
                }
                Ok(None) => {}
                Err(e) => error!("Error creating charts: {}", e),
            }
        }
        built
    }
}

fn serialize(name: &str, figure: &Figure) -> Result<String> {
    serde_json::to_string(figure).map_err(|e| FlightPulseError::Chart {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// NaN and infinite metrics are rejected
fn ensure_finite(chart: &str, values: &[f64]) -> Result<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(v) => Err(FlightPulseError::Chart {
            name: chart.to_string(),
            reason: format!("non-finite value {}", v),
        }),
        None => Ok(()),
    }
}

fn popular_routes_chart(insights: &MarketInsights) -> Result<Option<Figure>> {
    let routes = &insights.popular_routes;
    if routes.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = routes.iter().map(|r| r.route_label.clone()).collect();
    let demand: Vec<f64> = routes.iter().map(|r| r.mean_demand_score).collect();
    ensure_finite(POPULAR_ROUTES, &demand)?;
    let text: Vec<f64> = demand.iter().copied().map(round2).collect();

    Ok(Some(Figure {
        data: vec![Trace::new(TraceType::Bar, labels, demand).text(text, "auto")],
        layout: Layout::new("Popular Routes by Demand Score", "Route", "Demand Score"),
    }))
}

fn price_trends_chart(insights: &MarketInsights) -> Result<Option<Figure>> {
    let trends = &insights.price_trends;
    if trends.is_empty() {
        return Ok(None);
    }

    let dates: Vec<String> = trends.iter().map(|p| p.date.to_string()).collect();
    let prices: Vec<f64> = trends.iter().map(|p| p.mean_price).collect();
    ensure_finite(PRICE_TRENDS, &prices)?;

    Ok(Some(Figure {
        data: vec![
            Trace::new(TraceType::Scatter, dates, prices)
                .mode("lines+markers")
                .name("Average Price"),
        ],
        layout: Layout::new("Price Trends Over Time", "Date", "Average Price ($)"),
    }))
}

fn airline_comparison_chart(insights: &MarketInsights) -> Result<Option<Figure>> {
    let airlines = &insights.airline_stats;
    if airlines.is_empty() {
        return Ok(None);
    }

    let prices: Vec<f64> = airlines.iter().map(|a| a.mean_price).collect();
    let demand: Vec<f64> = airlines.iter().map(|a| a.mean_demand_score).collect();
    ensure_finite(AIRLINE_COMPARISON, &prices)?;
    ensure_finite(AIRLINE_COMPARISON, &demand)?;
    let names: Vec<String> = airlines.iter().map(|a| a.airline.clone()).collect();

    Ok(Some(Figure {
        data: vec![
            Trace::new(TraceType::Scatter, prices, demand)
                .mode("markers+text")
                .text(names, "top center")
                .marker_size(10),
        ],
        layout: Layout::new(
            "Airline Price vs Demand Analysis",
            "Average Price ($)",
            "Demand Score",
        ),
    }))
}
