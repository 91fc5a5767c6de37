//! Flight data sources
//!
//! - `sample`: random demonstration records
//! - `filter`: query-parameter filtering
//! - `aviationstack`: optional live feed

pub mod aviationstack;
pub mod filter;
pub mod sample;

pub use aviationstack::{AviationFlight, AviationStackClient};
pub use filter::{FilterParams, FlightFilter};
pub use sample::SampleDataGenerator;
