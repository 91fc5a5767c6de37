pub mod config;
pub mod insights;
pub mod live;
pub mod serve;
