//! # ziwei-config
//!
//! Layered configuration loading for the Zi Wei report engine using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ZIWEI_*` prefix, `__` as separator)
//! 2. Project-level `.ziwei/config.toml`
//! 3. User-level `~/.config/ziwei/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ZIWEI_SCORING__WEALTH_PALACE` -> `scoring.wealth_palace`,
//! `ZIWEI_PLAN__HORIZON_MONTHS` -> `plan.horizon_months`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use ziwei_config::ZiweiConfig;
//!
//! let config = ZiweiConfig::load_with_dotenv().expect("config");
//! println!("wealth palace: {}", config.scoring.wealth_palace);
//! ```

mod error;
mod general;
mod plan;
mod scoring;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use plan::PlanConfig;
pub use scoring::ScoringConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZiweiConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub plan: PlanConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ZiweiConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".ziwei/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ZIWEI_").split("__"))
    }

    /// Check cross-field constraints every section must satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.plan.validate()?;
        self.general.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ziwei").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
