//! Configuration Loader Tests

use imi_infrastructure::config::{AppConfig, ConfigLoader, InjectorConfig};
use imi_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

/// Prefix no test environment sets, so env overrides never leak in
const ISOLATED_PREFIX: &str = "IMI_LOADER_TEST_UNSET";

#[test]
fn test_defaults_when_file_missing() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("missing.toml"))
        .with_env_prefix(ISOLATED_PREFIX)
        .load()
        .unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.injector, InjectorConfig::default());
}

#[test]
fn test_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("imi.toml");
    std::fs::write(
        &config_path,
        r#"
[logging]
level = "debug"

[injector]
eager_singletons = true

[settings]
insert_at_cursor = true
"#,
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_prefix(ISOLATED_PREFIX)
        .load()
        .unwrap();

    assert_eq!(config.logging.level, "debug");
    assert!(config.injector.eager_singletons);
    assert!(!config.injector.log_bindings);
    assert!(config.settings.insert_at_cursor);
    assert!(config.settings.outer_ignore_rules);
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("imi.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"chatty\"\n").unwrap();

    let result = ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_prefix(ISOLATED_PREFIX)
        .load();

    assert!(result.is_err());
}

#[test]
fn test_save_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let mut original = AppConfig::default();
    original.injector.log_bindings = true;
    original.settings.unignore_actions = false;

    let loader = ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_prefix(ISOLATED_PREFIX);
    loader.save_to_file(&original, &config_path).unwrap();

    assert_eq!(loader.load().unwrap(), original);
    assert_eq!(loader.config_path(), Some(config_path.as_path()));
}
