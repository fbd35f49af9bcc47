use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use torn_travel::config::{Config, load, load_from_path, save_to_path, set_value};

#[test]
fn test_load_config_valid() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let config_content = r#"
        [torn]
        api_key = "abc123"
        api_url = "http://localhost:8080"
        timeout_secs = 5

        [watch]
        interval_secs = 60
    "#;
    temp_file.write_all(config_content.as_bytes()).unwrap();

    let config = load_from_path(temp_file.path()).expect("Failed to load valid config");

    assert_eq!(config.torn.api_key.as_deref(), Some("abc123"));
    assert_eq!(config.torn.api_url.as_deref(), Some("http://localhost:8080"));
    assert_eq!(config.torn.timeout_secs, 5);
    assert_eq!(config.watch.interval_secs, 60);
}

#[test]
fn test_load_config_empty_file_uses_defaults() {
    let temp_file = NamedTempFile::new().unwrap();

    let config = load_from_path(temp_file.path()).expect("Empty config should load");

    assert_eq!(config, Config::default());
    assert_eq!(config.torn.timeout_secs, 10);
    assert_eq!(config.watch.interval_secs, 30);
}

#[test]
fn test_load_config_wrong_type_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[watch]\ninterval_secs = \"soon\"\n")
        .unwrap();

    assert!(load_from_path(temp_file.path()).is_err());
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let config = load(Some(temp_dir.path())).expect("Missing file should fall back to defaults");
    assert_eq!(config.torn.api_url, None);
}

#[test]
fn test_load_rejects_invalid_values() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[torn]\ntimeout_secs = 0\n",
    )
    .unwrap();

    let err = load(Some(temp_dir.path())).unwrap_err();
    assert!(err.to_string().contains("timeout must be greater than 0"));
}

#[test]
fn test_save_and_reload() {
    let temp_file = NamedTempFile::new().unwrap();
    let mut config = Config::default();
    config.torn.api_url = Some("https://example.test".to_string());
    config.watch.interval_secs = 90;

    save_to_path(&config, temp_file.path()).unwrap();
    let reloaded = load_from_path(temp_file.path()).unwrap();

    assert_eq!(reloaded, config);
}

#[test]
fn test_set_value_keeps_other_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[torn]\napi_key = \"keep-me\"\n").unwrap();

    let config = set_value(&path, "watch.interval_secs", "15").unwrap();

    assert_eq!(config.watch.interval_secs, 15);
    assert_eq!(config.torn.api_key.as_deref(), Some("keep-me"));

    let reloaded = load_from_path(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_set_value_creates_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");

    set_value(&path, "torn.api_url", "http://localhost:9000").unwrap();

    let reloaded = load_from_path(&path).unwrap();
    assert_eq!(reloaded.torn.api_url.as_deref(), Some("http://localhost:9000"));
}

#[test]
fn test_set_value_rejects_bad_input() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    assert!(set_value(&path, "watch.interval_secs", "often").is_err());
    assert!(set_value(&path, "watch.interval_secs", "0").is_err());
    assert!(set_value(&path, "torn.api_url", "not-a-url").is_err());
    assert!(set_value(&path, "torn", "x").is_err());
    assert!(set_value(&path, "nope.key", "x").is_err());
    assert!(!path.exists());
}
