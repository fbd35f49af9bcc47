use crate::error::StatusError;
use crate::platform;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Prefix for environment overrides, e.g. `TTRAVEL__TORN__API_URL`.
pub const ENV_PREFIX: &str = "TTRAVEL";

const REDACTED: &str = "********";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub torn: TornConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TornConfig {
    pub api_key: Option<String>,
    /// Optional API URL override for testing (e.g. mocking)
    pub api_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for TornConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    30
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl TornConfig {
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("Request timeout must be greater than 0");
        }

        if let Some(url) = &self.api_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("Invalid api_url '{}', expected http:// or https://", url);
            }
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl WatchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.interval_secs == 0 {
            anyhow::bail!("Watch interval must be greater than 0");
        }
        Ok(())
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.torn.validate()?;
        self.watch.validate()?;
        Ok(())
    }

    /// Resolve the API key: explicit value (flag or `TORN_API_KEY`) first,
    /// then the config file. Blank keys are skipped.
    pub fn resolve_api_key(&self, explicit: Option<&str>) -> Result<String, StatusError> {
        [explicit, self.torn.api_key.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or(StatusError::MissingApiKey)
    }

    /// Copy safe to print: the API key is masked.
    pub fn redacted(&self) -> Config {
        let mut config = self.clone();
        if config.torn.api_key.is_some() {
            config.torn.api_key = Some(REDACTED.to_string());
        }
        config
    }
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

/// Load the config file (if any) with environment overrides applied on top.
pub fn load(config_dir: Option<&Path>) -> Result<Config> {
    let config_path = platform::config_path(config_dir);
    if !config_path.exists() {
        log::info!(
            "No config file at {}; using defaults",
            config_path.display()
        );
    }

    let loader = ConfigBuilder::builder()
        .add_source(
            File::from(config_path.as_path())
                .format(FileFormat::Toml)
                .required(false),
        )
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;

    config.validate()?;

    Ok(config)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}

/// Walk a dotted key ("torn.api_url") through a serialized config.
pub fn lookup<'a>(value: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    key.split('.').try_fold(value, |current, part| current.get(part))
}

/// Set a single dotted key in the config file at `path`.
///
/// Other keys in the file are kept. The value is typed after the field it
/// targets, and the resulting config must validate before it is written.
pub fn set_value<P: AsRef<Path>>(path: P, key: &str, raw: &str) -> Result<Config> {
    let path = path.as_ref();

    let schema = serde_json::to_value(Config::default()).context("Failed to serialize config")?;
    let target = lookup(&schema, key)
        .filter(|v| !v.is_object())
        .with_context(|| format!("Unknown config key: {}", key))?;
    let value = typed_value(target, raw)?;

    let mut table: toml::Table = if path.exists() {
        fs::read_to_string(path)
            .context("Failed to read config file")?
            .parse()
            .context("Failed to parse config file")?
    } else {
        toml::Table::new()
    };

    let parts: Vec<&str> = key.split('.').collect();
    let (leaf, sections) = parts.split_last().context("Empty config key")?;

    let mut current = &mut table;
    for section in sections {
        current = current
            .entry(section.to_string())
            .or_insert_with(|| toml::Value::Table(toml::Table::new()))
            .as_table_mut()
            .with_context(|| format!("'{}' is not a config section", section))?;
    }
    current.insert(leaf.to_string(), value);

    let toml_string = toml::to_string_pretty(&table).context("Failed to serialize config")?;
    let config: Config = toml::from_str(&toml_string).context("Invalid config value")?;
    config.validate()?;

    if let Some(parent) = path.parent() {
        platform::ensure_writable(parent)?;
    }
    fs::write(path, toml_string).context("Failed to write config file")?;

    Ok(config)
}

fn typed_value(target: &serde_json::Value, raw: &str) -> Result<toml::Value> {
    match target {
        serde_json::Value::Number(_) => raw
            .parse::<i64>()
            .map(toml::Value::Integer)
            .with_context(|| format!("Expected an integer, got '{}'", raw)),
        serde_json::Value::Bool(_) => raw
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .with_context(|| format!("Expected true or false, got '{}'", raw)),
        _ => Ok(toml::Value::String(raw.to_string())),
    }
}
