//! End-to-end tests for `brandkit palette`.

mod fixtures;

use fixtures::*;
use tempfile::TempDir;

#[test]
fn test_palette_display_order_json() {
    let (path, _temp) = create_temp_json(&test_palette(), "colors.json");

    let output = run_brandkit(&["palette", "--file", path.to_str().unwrap(), "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = stdout_json(&output);
    let hexes: Vec<&str> = result["colors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["hex"].as_str().unwrap())
        .collect();
    // Priority order, primaries keep their input order
    assert_eq!(
        hexes,
        vec!["#003366", "#0055AA", "#336699", "#FF6600", "#F5F5F5"]
    );
    assert_eq!(result["hidden"], 0);
    assert_eq!(result["colors"][0]["label"], "Primary");
    assert_eq!(result["colors"][0]["text_color"], "#FFFFFF");
    assert_eq!(result["colors"][0]["ratio"], "60%");
    assert_eq!(result["colors"][4]["text_color"], "#000000");
    assert_eq!(result["colors"][4]["is_auto"], true);
    assert!(result.get("report").is_none());
}

#[test]
fn test_palette_max_truncates() {
    let (path, _temp) = create_temp_json(&test_palette(), "colors.json");

    let output = run_brandkit(&["palette", "--file", path.to_str().unwrap(), "--max", "2"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#003366"));
    assert!(stdout.contains("#0055AA"));
    assert!(!stdout.contains("#336699"));
    assert!(stdout.contains("+3 more"));
}

#[test]
fn test_palette_uses_configured_limit() {
    let config_dir = TempDir::new().unwrap();
    let set = run_brandkit_with_config(&["config", "set", "--max-visible", "1"], &config_dir);
    assert_eq!(set.status.code(), Some(0));

    let (path, _temp) = create_temp_json(&test_palette(), "colors.json");
    let output = run_brandkit_with_config(
        &["palette", "--file", path.to_str().unwrap(), "--json"],
        &config_dir,
    );
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["colors"].as_array().unwrap().len(), 1);
    assert_eq!(result["hidden"], 4);
}

#[test]
fn test_palette_check_reports_issues() {
    let (path, _temp) = create_temp_json(&test_palette_with_issues(), "colors.json");

    let output = run_brandkit(&["palette", "--file", path.to_str().unwrap(), "--check"]);
    // --check alone never fails
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Issues:"));
    assert!(stdout.contains("invalid hex code 'blue'"));
    assert!(stdout.contains("Neutral Dark has 2 colors, at most 1 allowed"));
}

#[test]
fn test_palette_strict_fails_on_issues() {
    let (path, _temp) = create_temp_json(&test_palette_with_issues(), "colors.json");

    let output = run_brandkit(&["palette", "--file", path.to_str().unwrap(), "--strict", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let result = stdout_json(&output);
    let kinds: Vec<&str> = result["report"]["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["kind"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"invalid_color"));
    assert!(kinds.contains(&"too_many_for_role"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Palette has 2 issue(s)"));
}

#[test]
fn test_palette_strict_passes_clean_palette() {
    let (path, _temp) = create_temp_json(&test_palette(), "colors.json");

    let output = run_brandkit(&["palette", "--file", path.to_str().unwrap(), "--strict"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("✓ No issues found"));
}

#[test]
fn test_palette_unknown_role_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("colors.json");
    std::fs::write(&path, r##"[{"hex": "#123456", "role": "tertiary"}]"##).unwrap();

    let output = run_brandkit(&["palette", "--file", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse"));
}

#[test]
fn test_palette_empty() {
    let (path, _temp) = create_temp_json(&Vec::<serde_json::Value>::new(), "colors.json");

    let output = run_brandkit(&["palette", "--file", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("No colors."));
}
