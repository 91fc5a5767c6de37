//! Sample flight generator
//!
//! Produces random demonstration data over a fixed set of Australian cities
//! and carriers. Output is not reproducible unless a seeded RNG is passed to
//! [`SampleDataGenerator::generate_with`].

use chrono::{Days, Local, NaiveDate};
use rand::Rng;
use tracing::debug;

use crate::constants::sample::{
    AIRLINES, CITIES, MAX_DAYS_AHEAD, MAX_DEMAND, MAX_PRICE, MIN_DAYS_AHEAD, MIN_DEMAND, MIN_PRICE,
};
use crate::types::FlightRecord;

#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDataGenerator;

impl SampleDataGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate `count` records departing within the next 90 days
    pub fn generate(&self, count: usize) -> Vec<FlightRecord> {
        let today = Local::now().date_naive();
        let flights = self.generate_with(&mut rand::rng(), today, count);
        debug!("Generated {} sample flights", flights.len());
        flights
    }

    /// Generate with an explicit random source and reference date
    pub fn generate_with<R: Rng>(
        &self,
        rng: &mut R,
        today: NaiveDate,
        count: usize,
    ) -> Vec<FlightRecord> {
        (0..count).map(|_| random_flight(rng, today)).collect()
    }
}

fn random_flight<R: Rng>(rng: &mut R, today: NaiveDate) -> FlightRecord {
    let origin = rng.random_range(0..CITIES.len());
    // Uniform over the remaining cities: draw from n-1 slots and skip the origin.
    let mut destination = rng.random_range(0..CITIES.len() - 1);
    if destination >= origin {
        destination += 1;
    }

    let offset = rng.random_range(MIN_DAYS_AHEAD..=MAX_DAYS_AHEAD);
    let date = today.checked_add_days(Days::new(offset)).unwrap_or(today);

    FlightRecord {
        origin: CITIES[origin].to_string(),
        destination: CITIES[destination].to_string(),
        price: rng.random_range(MIN_PRICE..=MAX_PRICE),
        date,
        airline: AIRLINES[rng.random_range(0..AIRLINES.len())].to_string(),
        demand_score: rng.random_range(MIN_DEMAND..=MAX_DEMAND),
    }
}
