//! Data and config directory resolution with test isolation support.
//!
//! `dirs` uses platform APIs that ignore `HOME` on some systems, so
//! `RESI_TEST_HOME` is checked first and, when set, both directories
//! live under it.

use std::path::PathBuf;

/// Environment variable for test isolation of the user directories.
pub const RESI_TEST_HOME_VAR: &str = "RESI_TEST_HOME";

const APP_DIR: &str = "resi";

fn test_home() -> Option<PathBuf> {
    std::env::var(RESI_TEST_HOME_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Default data directory: `<platform data dir>/resi`
pub fn default_data_dir() -> Option<PathBuf> {
    match test_home() {
        Some(home) => Some(home.join("data").join(APP_DIR)),
        None => dirs::data_dir().map(|d| d.join(APP_DIR)),
    }
}

/// User config file: `<platform config dir>/resi/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    let base = match test_home() {
        Some(home) => Some(home.join("config")),
        None => dirs::config_dir(),
    };
    base.map(|d| d.join(APP_DIR).join("config.toml"))
}
