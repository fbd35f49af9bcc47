use crate::config::{self, Config};
use anyhow::{Context, Result};
use std::path::Path;

pub fn list(config: &Config) -> Result<()> {
    let toml_str =
        toml::to_string_pretty(&config.redacted()).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    let value = serde_json::to_value(config.redacted()).context("Failed to serialize config")?;

    // Dot notation: "torn.api_url"
    let current = config::lookup(&value, key).with_context(|| format!("Key not found: {}", key))?;

    match current {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }

    Ok(())
}

pub fn set(config_path: &Path, key: &str, value: &str) -> Result<()> {
    config::set_value(config_path, key, value)?;
    println!("✓ Set {} in {}", key, config_path.display());
    Ok(())
}

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}
