//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use cyviz::config::AppConfig;
use cyviz_math::{DualityMode, ProjectionMethod};
use serial_test::serial;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cyviz-config-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("CYVIZ_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("CYVIZ_WINDOW__TITLE");
    assert_eq!(config.window.title, "Test From Env");
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("CYVIZ_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    let builtin = AppConfig::default();
    assert_eq!(config.window.title, builtin.window.title);
    assert_eq!(config.explorer.dimension, builtin.explorer.dimension);
    assert_eq!(config.explorer.duality, builtin.explorer.duality);
    assert_eq!(config.explorer.projection, builtin.explorer.projection);
    assert_eq!(config.rendering.light_dir, builtin.rendering.light_dir);
    assert_eq!(config.input.speed_step, builtin.input.speed_step);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = scratch_dir("user");
    std::fs::write(
        dir.join("default.toml"),
        "[explorer]\ndimension = 4\nduality = \"type-i\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("user.toml"),
        "[explorer]\nduality = \"heterotic-e\"\nprojection = \"orthographic\"\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    std::fs::remove_dir_all(&dir).ok();

    assert_eq!(config.explorer.dimension, 4);
    assert_eq!(config.explorer.duality, DualityMode::HeteroticE);
    assert_eq!(config.explorer.projection, ProjectionMethod::Orthographic);
    assert_eq!(config.window.width, 1280);
}

#[test]
#[serial]
fn test_env_overrides_files() {
    let dir = scratch_dir("env");
    std::fs::write(dir.join("user.toml"), "[explorer]\nrotation_speed = 2.0\n").unwrap();

    std::env::set_var("CYVIZ_EXPLORER__ROTATION_SPEED", "0.5");
    let config = AppConfig::load_from(&dir);
    std::env::remove_var("CYVIZ_EXPLORER__ROTATION_SPEED");
    std::fs::remove_dir_all(&dir).ok();

    assert_eq!(config.unwrap().explorer.rotation_speed, 0.5);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.height, 720);
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_invalid_value_is_an_error() {
    let dir = scratch_dir("invalid");
    std::fs::write(dir.join("default.toml"), "[explorer]\nprojection = \"fisheye\"\n").unwrap();

    let result = AppConfig::load_from(&dir);
    std::fs::remove_dir_all(&dir).ok();

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
