//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::{default_areas, StoreOptions};
use crate::domain::entities::NewArea;
use crate::domain::policies::TransitionPolicy;
use crate::error::ResiResult;
use crate::infrastructure::fs::default_data_dir;

use super::loader::{self, ConfigWarning, ConfigSource};

/// Where the collections live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Data directory; the platform data dir when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Referral lifecycle rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LifecycleConfig {
    #[serde(default)]
    pub transitions: TransitionPolicy,
}

/// Dashboard view settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_recent_limit() -> usize {
    5
}

/// Log level used when neither `RESI_LOG` nor `-v` says otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Level selected by a `-v` count
    pub fn from_verbosity(count: u8) -> Self {
        match count {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Initial dataset for a fresh store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeedConfig {
    /// Areas to create; the five cooperative funds when empty
    #[serde(default)]
    pub areas: Vec<NewArea>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub lifecycle: LifecycleConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub seed: SeedConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ResiResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ResiResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, `./resi.toml`, the user config, or defaults,
    /// then apply `RESI_*` environment overrides.
    pub fn load_layered(explicit: Option<&Path>, cwd: &Path) -> ResiResult<ConfigSource> {
        loader::load_layered(explicit, cwd)
    }

    /// Apply environment variable overrides (RESI_* prefix)
    pub fn with_env_overrides(self) -> (Self, Vec<String>) {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Resolved data directory
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .or_else(default_data_dir)
            .unwrap_or_else(|| PathBuf::from(".resi"))
    }

    /// Seed areas, falling back to the built-in five
    pub fn seed_areas(&self) -> Vec<NewArea> {
        if self.seed.areas.is_empty() {
            default_areas()
        } else {
            self.seed.areas.clone()
        }
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            policy: self.lifecycle.transitions,
            seed_areas: self.seed_areas(),
        }
    }
}
