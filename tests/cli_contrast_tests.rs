//! End-to-end tests for `brandkit contrast`.

mod fixtures;

use fixtures::*;

#[test]
fn test_contrast_light_background_json() {
    let output = run_brandkit(&["contrast", "#FFFFFF", "--json"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = stdout_json(&output);
    assert_eq!(result["background"], "#FFFFFF");
    assert_eq!(result["foreground"], "#000000");
    assert_eq!(result["foreground_name"], "black");
    assert_eq!(result["luma"], 255.0);
}

#[test]
fn test_contrast_dark_background_plain() {
    let output = run_brandkit(&["contrast", "#000000"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Background: #000000"));
    assert!(stdout.contains("Text color: #FFFFFF (white)"));
}

#[test]
fn test_contrast_boundary_is_white() {
    let output = run_brandkit(&["contrast", "#808080", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["foreground"], "#FFFFFF");
}

#[test]
fn test_contrast_lowercase_input_normalized() {
    let output = run_brandkit(&["contrast", "#ffcc00", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["background"], "#FFCC00");
    assert_eq!(result["foreground"], "#000000");
}

#[test]
fn test_contrast_malformed_input() {
    for bad in ["#FFF", "FFFFFF", "#GG0000", "#1234567"] {
        let output = run_brandkit(&["contrast", bad]);

        assert_eq!(output.status.code(), Some(1), "input {bad} should be rejected");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("Invalid hex color format"),
            "unexpected stderr for {bad}: {stderr}"
        );
        assert!(output.stdout.is_empty());
    }
}
