//! Live Command
//!
//! Fetches real-time flights from AviationStack and reports what arrived.

use crate::ai::TimeoutConfig;
use crate::cli::ui::Output;
use crate::config::Config;
use crate::data::aviationstack::FlightEndpoint;
use crate::data::{AviationFlight, AviationStackClient};
use crate::types::Result;

pub async fn run(config: &Config) -> Result<()> {
    let out = Output::new();
    let timeouts = TimeoutConfig::from_config(config);
    let client = AviationStackClient::new(&config.aviation, timeouts.flight_api)?;

    if !client.is_configured() {
        out.warning("AVIATIONSTACK_API_KEY is not set; nothing to fetch");
        return Ok(());
    }

    let flights = client.fetch_configured().await;
    if flights.is_empty() {
        out.warning("No live flights returned");
        return Ok(());
    }

    out.success(&format!("Fetched {} live flights", flights.len()));
    out.section("Flights");
    for flight in &flights {
        println!("  {}", describe(flight));
    }
    Ok(())
}

fn describe(flight: &AviationFlight) -> String {
    let airport = |endpoint: Option<&FlightEndpoint>| {
        endpoint
            .and_then(|e| e.iata.as_deref().or(e.airport.as_deref()))
            .unwrap_or("?")
            .to_string()
    };
    let number = flight
        .flight
        .as_ref()
        .and_then(|f| f.iata.as_deref())
        .unwrap_or("-");
    let airline = flight
        .airline
        .as_ref()
        .and_then(|a| a.name.as_deref())
        .unwrap_or("Unknown airline");
    let status = flight.flight_status.as_deref().unwrap_or("unknown");

    format!(
        "{:<8} {} → {}  {} ({})",
        number,
        airport(flight.departure.as_ref()),
        airport(flight.arrival.as_ref()),
        airline,
        status
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aviationstack::{CarrierInfo, FlightNumber};

    #[test]
    fn test_describe_full_record() {
        let flight = AviationFlight {
            flight_status: Some("active".into()),
            departure: Some(FlightEndpoint {
                iata: Some("SYD".into()),
                ..Default::default()
            }),
            arrival: Some(FlightEndpoint {
                airport: Some("Melbourne".into()),
                ..Default::default()
            }),
            airline: Some(CarrierInfo {
                name: Some("Qantas".into()),
                iata: None,
            }),
            flight: Some(FlightNumber {
                number: None,
                iata: Some("QF401".into()),
            }),
            ..Default::default()
        };
        assert_eq!(describe(&flight), "QF401    SYD → Melbourne  Qantas (active)");
    }

    #[test]
    fn test_describe_sparse_record() {
        let line = describe(&AviationFlight::default());
        assert_eq!(line, "-        ? → ?  Unknown airline (unknown)");
    }
}
