//! Configuration file support for dtrack-scan.
//!
//! Provides YAML-based configuration through `dtrack-scan.config.yml` files,
//! and merges it with command-line arguments and built-in defaults.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Args;
use dtrack_scan::application::dto::ScanRequest;
use dtrack_scan::scan_workflow::domain::ProjectIdentity;
use dtrack_scan::scan_workflow::policies::RetryPolicy;
use dtrack_scan::shared::error::ScanError;
use dtrack_scan::shared::Result;

const CONFIG_FILENAME: &str = "dtrack-scan.config.yml";

pub const DEFAULT_SERVER_URL: &str = "http://dtrack-apiserver:8080";
pub const DEFAULT_SBOM_PATH: &str = "/sboms/case-study/deidentified-samd.sbom.json";
pub const DEFAULT_OUTPUT_PATH: &str = "vuln_list.json";
pub const DEFAULT_PROJECT_NAME: &str = "SBOM Scan";
pub const DEFAULT_PROJECT_VERSION: &str = "1.0";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub sbom: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub project_name: Option<String>,
    pub project_version: Option<String>,
    pub poll_attempts: Option<u32>,
    pub poll_interval_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to null rather than an empty mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.poll_attempts == Some(0) {
        bail!(
            "Invalid config: poll_attempts must be at least 1.\n\n\
             💡 Hint: Remove the field to use the default of {} status checks.",
            RetryPolicy::DEFAULT_MAX_ATTEMPTS
        );
    }
    if config.poll_interval_secs == Some(0) {
        bail!(
            "Invalid config: poll_interval_secs must be greater than zero.\n\n\
             💡 Hint: Remove the field to use the default of {} seconds.",
            RetryPolicy::DEFAULT_DELAY.as_secs()
        );
    }
    for (field, value) in [
        ("project_name", &config.project_name),
        ("project_version", &config.project_version),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            bail!("Invalid config: {} must not be empty.", field);
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        if key == "api_key" {
            eprintln!(
                "⚠️  Warning: 'api_key' is never read from the config file. Use DT_API_KEY or --api-key."
            );
        } else {
            eprintln!(
                "⚠️  Warning: Unknown config field '{}' will be ignored.",
                key
            );
        }
    }
}

/// Fully resolved settings for one scan run
#[derive(Debug)]
pub struct ScanConfig {
    pub server_url: String,
    pub api_key: String,
    pub sbom_path: PathBuf,
    pub output_path: PathBuf,
    pub project: ProjectIdentity,
    pub retry_policy: RetryPolicy,
}

impl ScanConfig {
    /// Merges command-line arguments over the config file over defaults.
    pub fn resolve(args: &Args, file: Option<ConfigFile>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let api_key = args
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ScanError::MissingApiKey)?
            .to_string();

        let server_url = args
            .url
            .clone()
            .or(file.url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let sbom_path = args
            .sbom
            .clone()
            .or(file.sbom)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SBOM_PATH));
        let output_path = args
            .output
            .clone()
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        let project = ProjectIdentity::new(
            args.project_name
                .clone()
                .or(file.project_name)
                .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
            args.project_version
                .clone()
                .or(file.project_version)
                .unwrap_or_else(|| DEFAULT_PROJECT_VERSION.to_string()),
        )?;

        let max_attempts = args
            .poll_attempts
            .or(file.poll_attempts)
            .unwrap_or(RetryPolicy::DEFAULT_MAX_ATTEMPTS);
        let delay = args
            .poll_interval
            .or(file.poll_interval_secs)
            .map(Duration::from_secs)
            .unwrap_or(RetryPolicy::DEFAULT_DELAY);
        let retry_policy = RetryPolicy::new(max_attempts, delay)?;

        Ok(Self {
            server_url,
            api_key,
            sbom_path,
            output_path,
            project,
            retry_policy,
        })
    }

    pub fn scan_request(&self) -> ScanRequest {
        ScanRequest::new(
            self.sbom_path.clone(),
            self.project.clone(),
            self.retry_policy,
        )
    }
}
