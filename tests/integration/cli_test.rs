use std::fs;
use std::process::Command;

use anyhow::Result;

#[path = "../common/mod.rs"]
mod common;
use common::create_temp_dir;

const BIN: &str = env!("CARGO_BIN_EXE_lifosh");

/// The example command prints the log, the table and the totals
#[test]
fn test_cli_example_command() -> Result<()> {
    let output = Command::new(BIN).args(["example"]).output()?;
    assert!(output.status.success(), "CLI example command failed");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Reference string: 7 0 1 2 0 3 0 4 (3 frames)"));
    assert!(stdout.contains("Replaced page 1 (top of stack) in Frame 3."));
    assert!(stdout.contains("Hits: 2  Faults: 6  Hit ratio: 25.0%"));

    Ok(())
}

#[test]
fn test_cli_run_with_frames() -> Result<()> {
    let output = Command::new(BIN)
        .args(["run", "--frames", "1", "--refs", "5,5,5"])
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Hits: 2  Faults: 1"));

    Ok(())
}

#[test]
fn test_cli_rejects_invalid_input() -> Result<()> {
    let output = Command::new(BIN)
        .args(["run", "--refs", "1 2 x"])
        .output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Invalid value \"x\""));

    let output = Command::new(BIN)
        .args(["run", "--frames", "0", "--refs", "1 2"])
        .output()?;
    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_cli_compare_reports_no_anomaly() -> Result<()> {
    let output = Command::new(BIN)
        .args(["compare", "--refs", "1 2 3 4 1 2 5 1 2 3 4 5", "--max-frames", "5"])
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("No Belady anomaly"));

    Ok(())
}

#[test]
fn test_cli_compare_rejects_frame_bound_out_of_range() -> Result<()> {
    for bound in ["0", "11", "500"] {
        let output = Command::new(BIN)
            .args(["compare", "--refs", "1 2 3", "--max-frames", bound])
            .output()?;
        assert!(!output.status.success(), "bound {} should be rejected", bound);

        let stdout = String::from_utf8(output.stdout)?;
        assert!(!stdout.contains("No Belady anomaly"));
        let stderr = String::from_utf8(output.stderr)?;
        assert!(stderr.contains("Invalid frame count"));
    }

    Ok(())
}

#[test]
fn test_cli_random_is_seeded() -> Result<()> {
    let first = Command::new(BIN).args(["random", "--seed", "9"]).output()?;
    let second = Command::new(BIN).args(["random", "--seed", "9"]).output()?;
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn test_cli_export_json() -> Result<()> {
    let dir = create_temp_dir()?;
    let path = dir.path().join("out.json");

    let output = Command::new(BIN)
        .args(["export", "--refs", "7 0 1 2 0 3 0 4", "--output"])
        .arg(&path)
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(value["summary"]["total_hits"], 2);
    assert_eq!(value["steps"].as_array().map(Vec::len), Some(8));

    Ok(())
}

#[test]
fn test_cli_config_file() -> Result<()> {
    let dir = create_temp_dir()?;
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{ "max_frames": 2, "default_frames": 2 }"#)?;

    let output = Command::new(BIN)
        .arg("--config")
        .arg(&config)
        .args(["run", "--frames", "3", "--refs", "1 2"])
        .output()?;
    assert!(!output.status.success(), "frame count above configured maximum accepted");

    Ok(())
}
