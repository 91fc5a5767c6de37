//! Insights Command
//!
//! Runs the dashboard pipeline once over a fresh sample and prints the
//! result, without starting the server.

use serde::Serialize;

use crate::ai::{NarrativeInsightGenerator, TimeoutConfig, create_provider};
use crate::analytics::InsightsAggregator;
use crate::cli::ui::Output;
use crate::config::Config;
use crate::data::{FilterParams, FlightFilter, SampleDataGenerator};
use crate::types::{FlightPulseError, MarketInsights, Result};

pub struct InsightsOptions {
    pub count: Option<usize>,
    pub filter: FilterParams,
    pub format: String,
    pub narrative: bool,
}

#[derive(Serialize)]
struct InsightsReport<'a> {
    insights: &'a MarketInsights,
    #[serde(skip_serializing_if = "Option::is_none")]
    ai_insights: Option<String>,
}

pub async fn run(config: &Config, options: InsightsOptions) -> Result<()> {
    let count = options.count.unwrap_or(config.sample.count);
    if count == 0 {
        return Err(FlightPulseError::Config(
            "--count must be at least 1".to_string(),
        ));
    }
    let filter = FlightFilter::try_from(options.filter)?;

    let flights = filter.apply(SampleDataGenerator::new().generate(count));
    let insights = InsightsAggregator::new().aggregate(&flights);

    let ai_insights = if options.narrative {
        let provider = create_provider(&config.llm)?;
        let timeouts = TimeoutConfig::from_config(config);
        let narrator = NarrativeInsightGenerator::new(provider, timeouts.llm_request);
        Some(narrator.generate(&insights).await)
    } else {
        None
    };

    if options.format == "json" {
        let report = InsightsReport {
            insights: &insights,
            ai_insights,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_text(&insights, count);
    if let Some(text) = ai_insights {
        Output::new().section("AI Insights");
        println!("{}", text);
    }
    Ok(())
}

fn print_text(insights: &MarketInsights, sampled: usize) {
    let out = Output::new();
    out.header("Market Insights");

    if insights.is_empty() {
        out.warning(&format!("No flights matched the filter ({} sampled)", sampled));
        return;
    }

    out.field(
        "Flights analyzed",
        format!("{} of {}", insights.total_flights, sampled),
    );
    out.field("Average price", format!("${:.2}", insights.avg_price));
    out.field("Peak demand score", format!("{:.2}", insights.peak_demand_score));

    out.section("Popular Routes");
    for (rank, route) in insights.popular_routes.iter().enumerate() {
        println!(
            "  {:>2}. {:<24} demand {:.2}  avg ${:.2}",
            rank + 1,
            route.route_label,
            route.mean_demand_score,
            route.mean_price
        );
    }

    out.section("Peak Demand Dates");
    for period in &insights.demand_periods {
        println!("  {}  demand {:.2}", period.date, period.mean_demand_score);
    }

    out.section("Airlines");
    for airline in &insights.airline_stats {
        println!(
            "  {:<18} avg ${:.2}  demand {:.2}",
            airline.airline, airline.mean_price, airline.mean_demand_score
        );
    }
}
