//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/flightpulse/config.toml)
//! 3. Project config (./flightpulse.toml)
//! 4. Environment variables (FLIGHTPULSE_* prefix, `__` nests)
//! 5. Well-known keys (OPENAI_API_KEY, AVIATIONSTACK_API_KEY, SECRET_KEY)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::types::{FlightPulseError, Result};

/// Well-known environment names and the config keys they fill
const WELL_KNOWN_ENV: &[(&str, &str)] = &[
    ("OPENAI_API_KEY", "llm.api_key"),
    ("AVIATIONSTACK_API_KEY", "aviation.api_key"),
    ("SECRET_KEY", "server.secret_key"),
];

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain using Figment:
    /// .env → defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from: {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => debug!("Ignoring unreadable .env file: {}", e),
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        Self::extract(Self::with_env(figment))
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path));
        Self::extract(figment)
    }

    /// Layer environment variables over a figment
    fn with_env(figment: Figment) -> Figment {
        // e.g. FLIGHTPULSE_LLM__TIMEOUT_SECS -> llm.timeout_secs
        let figment = figment.merge(Env::prefixed("FLIGHTPULSE_").split("__"));
        Self::with_well_known(figment, |name| env::var(name).ok())
    }

    /// Merge well-known key variables as plain strings.
    ///
    /// `Env` would parse a digits-only key into an integer.
    fn with_well_known(
        mut figment: Figment,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Figment {
        for &(name, key) in WELL_KNOWN_ENV {
            if let Some(value) = lookup(name) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }
        figment
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .map_err(|e| FlightPulseError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/flightpulse/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join("flightpulse"))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from("flightpulse.toml")
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path() {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Show current effective configuration
    pub fn show_config(as_json: bool) -> Result<()> {
        let config = Self::load()?;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&config)
                    .map_err(|e| FlightPulseError::Config(e.to_string()))?
            );
        }

        Ok(())
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write a default project config into `dir`
    pub fn init_project(dir: &Path, force: bool) -> Result<PathBuf> {
        let config_path = dir.join(Self::project_config_path());
        if config_path.exists() && !force {
            info!("Project config exists: {}", config_path.display());
            return Ok(config_path);
        }

        fs::write(&config_path, Self::default_project_config())?;
        info!("Created project config: {}", config_path.display());
        Ok(config_path)
    }

    /// Generate default project config content (TOML)
    fn default_project_config() -> String {
        r#"# FlightPulse Configuration
# API keys are read from OPENAI_API_KEY, AVIATIONSTACK_API_KEY and SECRET_KEY.

version = "1.0"

[server]
host = "0.0.0.0"
port = 5000

# Text generation (OpenAI Chat Completions)
[llm]
model = "gpt-3.5-turbo"
timeout_secs = 30
max_tokens = 500
temperature = 0.7

# AviationStack flight data
[aviation]
timeout_secs = 10
limit = 100

[sample]
count = 50
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use tempfile::TempDir;

    /// Run `load()` from an empty directory with no global config
    fn jailed_load(jail: &mut Jail) -> std::result::Result<Config, figment::Error> {
        let dir = jail.directory().to_path_buf();
        jail.set_env("XDG_CONFIG_HOME", dir.display());
        ConfigLoader::load().map_err(|e| e.to_string().into())
    }

    #[test]
    fn test_load_default_config() {
        Jail::expect_with(|jail| {
            let config = jailed_load(jail)?;
            assert_eq!(config.version, "1.0");
            assert_eq!(config.server.port, 5000);
            Ok(())
        });
    }

    #[test]
    fn test_project_file_is_loaded() {
        Jail::expect_with(|jail| {
            jail.create_file("flightpulse.toml", "[sample]\ncount = 12\n")?;
            let config = jailed_load(jail)?;
            assert_eq!(config.sample.count, 12);
            Ok(())
        });
    }

    #[test]
    fn test_env_override() {
        Jail::expect_with(|jail| {
            jail.set_env("FLIGHTPULSE_LLM__MODEL", "test-model");
            let config = jailed_load(jail)?;
            assert_eq!(config.llm.model, "test-model");
            Ok(())
        });
    }

    #[test]
    fn test_numeric_well_known_keys_stay_strings() {
        Jail::expect_with(|jail| {
            jail.set_env("SECRET_KEY", "1234567890");
            jail.set_env("OPENAI_API_KEY", "42");
            jail.set_env("AVIATIONSTACK_API_KEY", "0070");
            let config = jailed_load(jail)?;
            assert_eq!(config.server.secret_key.as_deref(), Some("1234567890"));
            assert_eq!(config.llm.api_key.as_deref(), Some("42"));
            assert_eq!(config.aviation.api_key.as_deref(), Some("0070"));
            Ok(())
        });
    }

    #[test]
    fn test_well_known_keys_override_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("keys.toml");
        fs::write(&path, "[llm]\napi_key = \"from-file\"\n").unwrap();

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&path));
        let figment = ConfigLoader::with_well_known(figment, |name| {
            (name == "OPENAI_API_KEY").then(|| "987654".to_string())
        });
        let config = ConfigLoader::extract(figment).unwrap();

        assert_eq!(config.llm.api_key.as_deref(), Some("987654"));
        assert_eq!(config.aviation.api_key, None);
        assert_eq!(config.server.secret_key, None);
    }

    #[test]
    fn test_init_project_writes_loadable_file() {
        let temp_dir = TempDir::new().unwrap();

        let path = ConfigLoader::init_project(temp_dir.path(), false).unwrap();
        assert!(path.exists());

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
        assert_eq!(config.sample.count, 50);
    }

    #[test]
    fn test_init_project_keeps_existing_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flightpulse.toml");
        fs::write(&path, "[sample]\ncount = 7\n").unwrap();

        ConfigLoader::init_project(temp_dir.path(), false).unwrap();
        assert_eq!(ConfigLoader::load_from_file(&path).unwrap().sample.count, 7);

        ConfigLoader::init_project(temp_dir.path(), true).unwrap();
        assert_eq!(ConfigLoader::load_from_file(&path).unwrap().sample.count, 50);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[server]\nport = 8080\n\n[llm]\ntemperature = 0.2\n").unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert!((config.llm.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[aviation]\nlimit = 1000\n").unwrap();

        let err = ConfigLoader::load_from_file(&path).unwrap_err();
        assert!(matches!(err, FlightPulseError::Config(_)));
    }
}
