//! Test environment for isolated resi CLI runs.
//!
//! Provides `TestEnv` - a temp home (user config and data dirs) and a
//! temp working directory, plus helpers to run the `resi` binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Variables that would leak the developer's setup into a test run
const SCRUBBED_VARS: &[&str] = &[
    "RESI_DATA_DIR",
    "RESI_TRANSITIONS",
    "RESI_LOG_LEVEL",
    "RESI_LOG",
    "RUST_LOG",
];

/// Result of running a resi CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as one JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({}):\n{}\nstderr:\n{}",
                e, self.stdout, self.stderr
            )
        })
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated CLI environment.
///
/// `RESI_TEST_HOME` points at a temp dir, so the default data dir and
/// the user config live under it.
pub struct TestEnv {
    pub home: TempDir,
    pub work_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().unwrap(),
            work_dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Where the books land when no data dir is configured
    pub fn data_dir(&self) -> PathBuf {
        self.home.path().join("data").join("resi")
    }

    pub fn user_config_path(&self) -> PathBuf {
        self.home.path().join("config").join("resi").join("config.toml")
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    pub fn write_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_resi"));
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("RESI_TEST_HOME", self.home.path());
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute resi");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Run with `--json` and return the parsed document, asserting success
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        let result = self.run(&full);
        assert!(
            result.success,
            "resi {:?} failed:\n{}",
            args,
            result.combined_output()
        );
        result.json()
    }

    /// Register a company and return its id
    pub fn add_company(&self, name: &str, rate: &str) -> String {
        let created = self.json(&[
            "company",
            "add",
            "--name",
            name,
            "--responsible",
            "Carla Souza",
            "--contact",
            "carla@parceira.com.br",
            "--rate",
            rate,
        ]);
        created["id"].as_str().unwrap().to_string()
    }

    /// Register a member and return their id
    pub fn add_member(&self, name: &str) -> String {
        let created = self.json(&[
            "member",
            "add",
            "--name",
            name,
            "--email",
            "ana@coop.org",
            "--phone",
            "(11) 98888-0000",
        ]);
        created["id"].as_str().unwrap().to_string()
    }

    /// Register a referral and return its id
    pub fn add_referral(&self, company: &str, member: &str, value: &str) -> String {
        let created = self.json(&[
            "referral",
            "add",
            "--company",
            company,
            "--member",
            member,
            "--client",
            "Padaria Central",
            "--service",
            "Consultoria",
            "--value",
            value,
        ]);
        created["referral"]["id"].as_str().unwrap().to_string()
    }
}
