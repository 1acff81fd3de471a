//! Tests for the tsalias configuration system.

use std::sync::Mutex;

use tsalias_core::config::{CliOverrides, TsaliasConfig};
use tsalias_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all TSALIAS_ env vars to prevent cross-test contamination.
fn clear_tsalias_env_vars() {
    for key in [
        "TSALIAS_BUILD_DIR",
        "TSALIAS_TSCONFIG",
        "TSALIAS_EXTENSION",
        "TSALIAS_THREADS",
        "TSALIAS_FOLLOW_LINKS",
        "TSALIAS_COMPILE_ENABLED",
        "TSALIAS_BUILD_COMMAND",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tsalias_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("tsalias.toml"),
        r#"
[paths]
build_dir = "out"
tsconfig = "tsconfig.build.json"

[rewrite]
threads = 2
"#,
    )
    .unwrap();

    std::env::set_var("TSALIAS_BUILD_DIR", "dist");
    std::env::set_var("TSALIAS_THREADS", "8");

    let cli = CliOverrides {
        threads: Some(3),
        ..Default::default()
    };
    let config = TsaliasConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI beats env and project
    assert_eq!(config.rewrite.effective_threads(), 3);
    // Env beats project
    assert_eq!(config.paths.effective_build_dir(), "dist");
    // Project beats defaults
    assert_eq!(config.paths.effective_tsconfig(), "tsconfig.build.json");
    // Defaults
    assert_eq!(config.rewrite.effective_extension(), "js");

    clear_tsalias_env_vars();
}

#[test]
fn test_defaults_without_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tsalias_env_vars();

    let dir = tempdir();
    let config = TsaliasConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.paths.effective_build_dir(), "build");
    assert_eq!(config.paths.effective_tsconfig(), "tsconfig.extended.json");
    assert_eq!(config.rewrite.effective_extension(), "js");
    assert_eq!(config.rewrite.effective_threads(), 1);
    assert!(!config.rewrite.effective_follow_links());
    assert!(config.compile.effective_enabled());
    assert_eq!(config.compile.effective_command(), "npm run build:all");
}

#[test]
fn test_env_booleans_and_invalid_numbers() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tsalias_env_vars();

    std::env::set_var("TSALIAS_FOLLOW_LINKS", "yes");
    std::env::set_var("TSALIAS_COMPILE_ENABLED", "0");
    std::env::set_var("TSALIAS_THREADS", "many");

    let dir = tempdir();
    let config = TsaliasConfig::load(dir.path(), None).unwrap();

    assert!(config.rewrite.effective_follow_links());
    assert!(!config.compile.effective_enabled());
    // Unparseable values are ignored
    assert_eq!(config.rewrite.effective_threads(), 1);

    clear_tsalias_env_vars();
}

#[test]
fn test_invalid_project_toml() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tsalias_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("tsalias.toml"), "[paths\nbuild_dir = ").unwrap();

    let err = TsaliasConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_bad_extension() {
    for ext in ["", ".js", "a/js"] {
        let config = TsaliasConfig::from_toml(&format!("[rewrite]\nextension = {ext:?}")).unwrap();
        let err = TsaliasConfig::validate(&config).unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "rewrite.extension"),
            "{ext:?} should be rejected"
        );
    }
}

#[test]
fn test_validation_rejects_blank_build_dir_and_command() {
    let config = TsaliasConfig::from_toml("[paths]\nbuild_dir = \"  \"").unwrap();
    assert!(TsaliasConfig::validate(&config).is_err());

    let config = TsaliasConfig::from_toml("[compile]\ncommand = \"\"").unwrap();
    assert!(TsaliasConfig::validate(&config).is_err());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = TsaliasConfig::from_toml("future = 1\n[rewrite]\nextension = \"cjs\"\nnew_key = true\n")
        .unwrap();
    assert_eq!(config.rewrite.effective_extension(), "cjs");
}

#[test]
fn test_round_trips_through_toml() {
    let config = TsaliasConfig::from_toml("[compile]\nenabled = false\ncommand = \"tsc\"").unwrap();
    let text = config.to_toml().unwrap();
    let back = TsaliasConfig::from_toml(&text).unwrap();
    assert_eq!(back.compile.enabled, Some(false));
    assert_eq!(back.compile.command.as_deref(), Some("tsc"));
}
