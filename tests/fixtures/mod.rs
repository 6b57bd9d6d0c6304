//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use brandkit::models::{BrandColor, ColorRole, LogoAsset};
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the brandkit binary
pub fn brandkit_bin() -> &'static str {
    env!("CARGO_BIN_EXE_brandkit")
}

/// Runs brandkit with an isolated, empty config directory.
pub fn run_brandkit(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    run_brandkit_with_config(args, &config_dir)
}

/// Runs brandkit using the given config directory.
pub fn run_brandkit_with_config(args: &[&str], config_dir: &TempDir) -> Output {
    Command::new(brandkit_bin())
        .args(args)
        .env("BRANDKIT_CONFIG_DIR", config_dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON, panicking with stderr on failure.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "Should parse JSON ({e}). stdout: {stdout} stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// A palette in scrambled role order with one custom-ratio color.
pub fn test_palette() -> Vec<BrandColor> {
    let mut auto = BrandColor::new("#F5F5F5", ColorRole::NeutralLight);
    auto.is_auto = Some(true);
    vec![
        auto,
        BrandColor::new("#FF6600", ColorRole::Accent),
        BrandColor::new("#003366", ColorRole::Primary).with_ratio(0.6),
        BrandColor::new("#336699", ColorRole::Secondary),
        BrandColor::new("#0055AA", ColorRole::Primary),
    ]
}

/// A palette that breaks the neutral_dark limit and has a bad hex code.
pub fn test_palette_with_issues() -> Vec<BrandColor> {
    vec![
        BrandColor::new("#111111", ColorRole::NeutralDark),
        BrandColor::new("#222222", ColorRole::NeutralDark),
        BrandColor::new("blue", ColorRole::Primary),
    ]
}

/// Writes a value as JSON into a temp file.
///
/// The TempDir must be kept alive for the file to exist.
pub fn create_temp_json<T: serde::Serialize>(value: &T, name: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    let json = serde_json::to_string_pretty(value).expect("Failed to serialize fixture");
    fs::write(&path, json).expect("Failed to write fixture");
    (path, temp_dir)
}

/// A logo within the optimized size range.
pub fn test_logo_small() -> LogoAsset {
    LogoAsset {
        filename: Some("brand-logo.svg".to_string()),
        file_size_kb: Some(48.0),
        dimensions: Some("256x256".to_string()),
        format: Some("svg".to_string()),
        preview_url: Some("https://cdn.example.com/brand-logo.svg".to_string()),
    }
}

/// A logo above the optimized size range.
pub fn test_logo_large() -> LogoAsset {
    LogoAsset {
        filename: Some("brand-logo.png".to_string()),
        file_size_kb: Some(1536.0),
        dimensions: Some("4096x4096".to_string()),
        format: Some("png".to_string()),
        preview_url: None,
    }
}
