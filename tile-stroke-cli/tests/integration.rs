//! Integration tests for the tile-stroke CLI.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;

/// Get the path to a file under the workspace's test_assets directory.
fn test_asset(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // Go up from tile-stroke-cli to the workspace root
    path.push("test_assets");
    path.push(name);
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tile-stroke"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn render_json(extra: &[&str]) -> Value {
    let tile = test_asset("tile.json");
    let mut args = vec!["render", tile.to_str().unwrap(), "--format", "json"];
    args.extend_from_slice(extra);
    let output = run(&args);
    assert!(
        output.status.success(),
        "render failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Output should be valid JSON")
}

#[test]
fn json_output_lists_stroke_commands() {
    let json = render_json(&[]);

    let stroke = json["stroke"].as_array().expect("stroke array");
    assert!(!stroke.is_empty());
    assert!(json["fill"].as_array().unwrap().is_empty(), "no fill without --fill");

    // The first line starts on the left edge and is pulled off the tile
    let start = &stroke[0]["move_to"];
    assert!(start[0].as_f64().unwrap() < 0.0, "head not extruded: {}", start);
}

#[test]
fn fill_flag_adds_fill_path() {
    let json = render_json(&["--fill"]);
    let fill = json["fill"].as_array().unwrap();
    assert!(!fill.is_empty());
    assert!(fill[0].get("move_to").is_some());
}

#[test]
fn dashing_adds_commands() {
    let solid = render_json(&[]);
    let dashed = render_json(&["--dash", "4,2"]);
    let count = |v: &Value| v["stroke"].as_array().unwrap().len();
    assert!(
        count(&dashed) > count(&solid),
        "dashed {} vs solid {}",
        count(&dashed),
        count(&solid)
    );
}

#[test]
fn svg_output() {
    let tile = test_asset("tile.json");
    let output = run(&["render", tile.to_str().unwrap(), "--format", "svg", "--fill"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert!(stdout.contains("fill-rule=\"evenodd\""), "Should have fill path");
    assert!(stdout.contains("stroke-width="), "Should have stroke path");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn png_output_file() {
    let tile = test_asset("tile.json");
    let out = std::env::temp_dir().join(format!("tile-stroke-test-{}.png", std::process::id()));
    let output = run(&[
        "render",
        tile.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "--size",
        "128",
    ]);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let bytes = std::fs::read(&out).expect("PNG written");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let _ = std::fs::remove_file(&out);
}

#[test]
fn png_to_stdout_is_refused() {
    let tile = test_asset("tile.json");
    let output = run(&["render", tile.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--output"));
}

#[test]
fn invalid_dash_pattern_fails() {
    let tile = test_asset("tile.json");
    let output = run(&["render", tile.to_str().unwrap(), "--format", "json", "--dash", "4,0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("dash"));
}

#[test]
fn negative_skip_fails() {
    let tile = test_asset("tile.json");
    let output = run(&["render", tile.to_str().unwrap(), "--format", "json", "--skip=-1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("skip"));
}

#[test]
fn missing_tile_fails() {
    let output = run(&["render", "does-not-exist.json", "--format", "json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist.json"));
}
