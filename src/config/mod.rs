//! Configuration module for resi
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RESI_*)
//! 3. `--config <path>` or `./resi.toml`
//! 4. User config (`<config dir>/resi/config.toml`)
//! 5. Built-in defaults (lowest priority)
//!
//! Only one file is read: the first that applies.

mod loader;
mod types;

pub use loader::{
    with_env_overrides, ConfigSource, ConfigWarning, ENV_DATA_DIR, ENV_LOG_LEVEL,
    ENV_TRANSITIONS, PROJECT_CONFIG_FILE,
};
pub use types::{
    Config, DashboardConfig, LifecycleConfig, LogLevel, LoggingConfig, SeedConfig, StorageConfig,
};
