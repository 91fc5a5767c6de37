//! Config Command
//!
//! Usage:
//!   flightpulse config show [-f toml|json]
//!   flightpulse config path
//!   flightpulse config init [--force]

use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::types::Result;

/// Show the merged effective configuration
pub fn show(format: &str) -> Result<()> {
    ConfigLoader::show_config(format == "json")
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Write `flightpulse.toml` into the working directory
pub fn init(force: bool) -> Result<()> {
    let root = std::env::current_dir()?;
    let path = ConfigLoader::init_project(&root, force)?;

    let out = Output::new();
    out.success("Initialized project configuration");
    println!("  Config: {}", path.display());
    out.info("API keys are read from OPENAI_API_KEY and AVIATIONSTACK_API_KEY");
    Ok(())
}
