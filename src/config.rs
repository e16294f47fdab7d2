//! Configuration file support for wanted-list.
//!
//! Provides YAML-based configuration through `wanted-list.config.yml` files,
//! and merges it with the command line into the effective [`Settings`].
//! Precedence: CLI flags, then the config file, then built-in defaults.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::DEFAULT_TIMEOUT_SECONDS;
use crate::cli::Args;
use crate::i18n::Locale;
use crate::shared::error::WantedError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "wanted-list.config.yml";

/// Public FBI Wanted API
pub const DEFAULT_BASE_URL: &str = "https://api.fbi.gov/wanted/v1";

/// Upper bound for `timeout_secs`
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub lang: Option<String>,
    pub color: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    validate_file_size(metadata.len(), path, MAX_CONFIG_FILE_SIZE)?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

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

    if std::fs::symlink_metadata(&config_path).is_err() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(base_url) = &config.base_url {
        validate_base_url(base_url)?;
    }
    if let Some(timeout) = config.timeout_secs {
        validate_timeout(timeout)?;
    }
    Ok(())
}

fn validate_base_url(base_url: &str) -> Result<()> {
    let lower = base_url.trim().to_ascii_lowercase();
    let host = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"));

    match host {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(()),
        _ => Err(WantedError::InvalidConfig {
            field: "base_url".to_string(),
            reason: format!("'{}' is not an http(s) URL", base_url),
            hint: format!("Use a URL such as {}", DEFAULT_BASE_URL),
        }
        .into()),
    }
}

fn validate_timeout(timeout_secs: u64) -> Result<()> {
    if timeout_secs == 0 || timeout_secs > MAX_TIMEOUT_SECONDS {
        return Err(WantedError::InvalidConfig {
            field: "timeout_secs".to_string(),
            reason: format!(
                "{} is out of range, it must be between 1 and {} seconds",
                timeout_secs, MAX_TIMEOUT_SECONDS
            ),
            hint: format!("The default is {} seconds", DEFAULT_TIMEOUT_SECONDS),
        }
        .into());
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub locale: Locale,
    pub color: bool,
}

impl Settings {
    /// Merges CLI arguments over the config file over the defaults
    ///
    /// Without an explicit language the `LANG` environment variable
    /// decides. Colors are only enabled by default when the cards go to a
    /// terminal stdout (no `--output` file) and `NO_COLOR` is unset.
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        let base_url = args
            .base_url
            .clone()
            .or_else(|| config.and_then(|c| c.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_base_url(&base_url)?;

        let timeout_secs = args
            .timeout
            .or_else(|| config.and_then(|c| c.timeout_secs))
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        validate_timeout(timeout_secs)?;

        let locale = args
            .lang
            .as_deref()
            .or_else(|| config.and_then(|c| c.lang.as_deref()))
            .map(Locale::from_tag)
            .or_else(Locale::from_env)
            .unwrap_or_default();

        let color = if args.no_color {
            false
        } else {
            config
                .and_then(|c| c.color)
                .unwrap_or_else(|| args.output.is_none() && default_color())
        };

        Ok(Self {
            base_url: base_url.trim().to_string(),
            timeout: Duration::from_secs(timeout_secs),
            locale,
            color,
        })
    }
}

fn default_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}
