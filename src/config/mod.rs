//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/flightpulse/config.toml)
//! 3. Project config (./flightpulse.toml)
//! 4. Environment variables (FLIGHTPULSE_*, plus the well-known API key names)
//! 5. CLI arguments (highest priority)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
