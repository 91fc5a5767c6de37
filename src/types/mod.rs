pub mod error;
pub mod flight;
pub mod insights;
pub mod outcome;

pub use error::{FlightPulseError, Result};
pub use flight::{FlightRecord, route_label};
pub use insights::{AirlineStat, DemandPeriod, MarketInsights, PricePoint, RouteStat};
pub use outcome::Outcome;
