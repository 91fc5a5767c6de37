//! Market analytics

pub mod aggregator;

pub use aggregator::InsightsAggregator;
