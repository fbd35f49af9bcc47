//! Cross-platform utilities for directory resolution and file operations.
//!
//! This module provides OS-agnostic config directory resolution with a
//! fallback chain for machines without a usable home directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = ".torn-travel";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the config directory with cross-platform fallback chain.
///
/// Priority order:
/// 1. Explicit override (`--config-dir` / `TTRAVEL_CONFIG_DIR`)
/// 2. Home directory (~/.torn-travel)
/// 3. Platform-specific config directory (XDG on Linux, AppData on Windows)
/// 4. Current working directory (last resort)
pub fn config_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }

    if let Some(home) = home::home_dir() {
        return home.join(APP_DIR_NAME);
    }

    // - Linux: ~/.config/torn-travel
    // - macOS: ~/Library/Application Support/torn-travel
    // - Windows: C:\Users\<User>\AppData\Roaming\torn-travel
    if let Some(config) = dirs::config_dir() {
        return config.join("torn-travel");
    }

    log::warn!("No home or config directory found; using ./{}", APP_DIR_NAME);
    PathBuf::from(APP_DIR_NAME)
}

/// Path of the config file inside [`config_dir`].
pub fn config_path(override_dir: Option<&Path>) -> PathBuf {
    config_dir(override_dir).join(CONFIG_FILE_NAME)
}

/// Ensure a directory exists and is writable by the current user.
///
/// Creates the directory if it doesn't exist, then tests write access
/// by creating and removing a temporary file.
pub fn ensure_writable(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let test_path = dir.join(".write_test");
    fs::write(&test_path, b"test")
        .with_context(|| format!("Directory {} is not writable", dir.display()))?;

    // Ignore errors (file might be held by antivirus on Windows)
    let _ = fs::remove_file(&test_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_dir_takes_priority() {
        let temp = TempDir::new().unwrap();

        assert_eq!(config_dir(Some(temp.path())), temp.path());
    }

    #[test]
    fn test_config_path_with_override() {
        let temp = TempDir::new().unwrap();

        assert_eq!(
            config_path(Some(temp.path())),
            temp.path().join("config.toml")
        );
    }

    #[test]
    fn test_default_config_dir_ends_with_app_name() {
        let dir = config_dir(None);
        let name = dir.file_name().unwrap().to_string_lossy().to_string();
        assert!(name == APP_DIR_NAME || name == "torn-travel");
    }

    #[test]
    fn test_ensure_writable_creates_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b").join("c");

        assert!(ensure_writable(&nested).is_ok());
        assert!(nested.exists());
        assert!(!nested.join(".write_test").exists());
    }
}
