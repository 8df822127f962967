//! Configuration management for the crop ranking precompute job
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CPC_ prefix

use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use shared::{CostInclusion, ProfessionFlags};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Crop dataset source
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Scenario values shared by every ranking entry
    pub scenario: ScenarioConfig,

    /// Report output configuration
    pub output: OutputConfig,

    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatasetConfig {
    /// JSON crop dataset; the bundled dataset is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    /// Number of planted tiles
    pub plots: u32,

    /// Day of the season the crops go in (1-28)
    pub start_day: u32,

    pub include_seed_cost: bool,
    pub include_fertilizer_cost: bool,

    pub tiller: bool,
    pub artisan: bool,
    pub agriculturist: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Report file; stdout when unset
    pub path: Option<String>,

    /// Crops kept per ranking entry
    pub top_n: usize,

    /// Pretty-print the JSON report
    pub pretty: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of human-readable output
    pub json: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("CPC_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = Self::defaults(&environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CPC_ prefix)
            .add_source(
                Environment::with_prefix("CPC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    fn defaults(environment: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("environment", environment)?
            .set_default("scenario.plots", 1)?
            .set_default("scenario.start_day", 1)?
            .set_default("scenario.include_seed_cost", true)?
            .set_default("scenario.include_fertilizer_cost", true)?
            .set_default("scenario.tiller", false)?
            .set_default("scenario.artisan", false)?
            .set_default("scenario.agriculturist", false)?
            .set_default("output.top_n", 10)?
            .set_default("output.pretty", false)?
            .set_default("logging.json", false)
    }
}

impl ScenarioConfig {
    pub fn costs(&self) -> CostInclusion {
        CostInclusion {
            seeds: self.include_seed_cost,
            fertilizer: self.include_fertilizer_cost,
        }
    }

    pub fn professions(&self) -> ProfessionFlags {
        ProfessionFlags {
            tiller: self.tiller,
            artisan: self.artisan,
            agriculturist: self.agriculturist,
        }
    }
}
