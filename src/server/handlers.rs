use axum::Json;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Serialize;
use tracing::{debug, info};

use super::error::ApiError;
use super::state::AppState;
use crate::charts::ChartMap;
use crate::data::{AviationFlight, FilterParams, FlightFilter};
use crate::types::{FlightRecord, MarketInsights};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub success: bool,
    pub insights: MarketInsights,
    pub ai_insights: String,
    pub charts: ChartMap,
}

#[derive(Debug, Serialize)]
pub struct LiveResponse {
    pub success: bool,
    pub count: usize,
    pub flights: Vec<AviationFlight>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn get_data(State(state): State<AppState>) -> Result<Json<DashboardResponse>, ApiError> {
    let flights = state.generator.generate(state.sample_count);
    Ok(Json(dashboard(&state, &flights).await))
}

pub async fn filter_data(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let filter = FlightFilter::try_from(params)?;

    let flights = filter.apply(state.generator.generate(state.sample_count));
    debug!("Filter kept {} of {} flights", flights.len(), state.sample_count);

    Ok(Json(dashboard(&state, &flights).await))
}

pub async fn live(State(state): State<AppState>) -> Json<LiveResponse> {
    let flights = state.live.fetch_configured().await;
    info!("Live source returned {} flights", flights.len());

    Json(LiveResponse {
        success: true,
        count: flights.len(),
        flights,
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Aggregate, chart and narrate one record set
async fn dashboard(state: &AppState, flights: &[FlightRecord]) -> DashboardResponse {
    let insights = state.aggregator.aggregate(flights);
    let charts = state.charts.build(&insights);
    let ai_insights = state.narrator.generate(&insights).await;

    DashboardResponse {
        success: true,
        insights,
        ai_insights,
        charts,
    }
}
