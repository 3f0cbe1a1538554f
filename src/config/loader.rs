//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ResiError, ResiResult};
use crate::infrastructure::fs::user_config_path;

use super::types::{Config, LogLevel};

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = "resi.toml";

pub const ENV_DATA_DIR: &str = "RESI_DATA_DIR";
pub const ENV_TRANSITIONS: &str = "RESI_TRANSITIONS";
pub const ENV_LOG_LEVEL: &str = "RESI_LOG_LEVEL";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// A loaded configuration and where it came from
#[derive(Debug, Clone)]
pub struct ConfigSource {
    pub config: Config,
    /// File the config was read from; `None` for built-in defaults
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    /// Environment values that were set but could not be applied
    pub env_errors: Vec<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ResiResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ResiError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ResiError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the first config file that applies, then layer env overrides on top.
///
/// An explicit path must exist; the implicit ones are skipped when absent.
pub fn load_layered(explicit: Option<&Path>, cwd: &Path) -> ResiResult<ConfigSource> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [Some(cwd.join(PROJECT_CONFIG_FILE)), user_config_path()]
            .into_iter()
            .flatten()
            .find(|p| p.is_file()),
    };

    let (config, warnings) = match &candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(path)?
        }
        None => (Config::default(), Vec::new()),
    };

    let (config, env_errors) = with_env_overrides(config, |key| std::env::var(key).ok());
    Ok(ConfigSource {
        config,
        path: candidate,
        warnings,
        env_errors,
    })
}

/// Apply environment variable overrides (RESI_* prefix).
///
/// `lookup` returns the value of a variable, if set. Values that do not
/// parse are left out and reported back.
pub fn with_env_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<String>) {
    let mut errors = Vec::new();

    // RESI_DATA_DIR
    if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.trim().is_empty()) {
        config.storage.data_dir = Some(PathBuf::from(dir));
    }

    // RESI_TRANSITIONS
    if let Some(policy) = lookup(ENV_TRANSITIONS) {
        match policy.parse() {
            Ok(policy) => config.lifecycle.transitions = policy,
            Err(err) => errors.push(format!("{}: {}", ENV_TRANSITIONS, err)),
        }
    }

    // RESI_LOG_LEVEL
    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        match level.parse::<LogLevel>() {
            Ok(level) => config.logging.level = level,
            Err(err) => errors.push(format!("{}: {}", ENV_LOG_LEVEL, err)),
        }
    }

    (config, errors)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "data_dir",
        "lifecycle",
        "transitions",
        "dashboard",
        "recent_limit",
        "logging",
        "level",
        "seed",
        "areas",
        "name",
        "description",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, &ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}
