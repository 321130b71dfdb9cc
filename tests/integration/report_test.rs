use std::fs;

use anyhow::Result;

#[path = "../common/mod.rs"]
mod common;
use common::create_temp_dir;

use lifosim::input::example_input;
use lifosim::report::export::{write_report, ExportDocument, ExportFormat};
use lifosim::report::narration::describe;
use lifosim::report::{render_table, series_up_to, Summary};
use lifosim::{simulate, Cursor, ExportError, SimulationInput};

#[test]
fn test_json_report_round_trip() -> Result<()> {
    let input = example_input();
    let history = simulate(&input);
    let dir = create_temp_dir()?;
    let path = dir.path().join("report.json");

    write_report(&input, &history, ExportFormat::Json, &path)?;

    let document: ExportDocument = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(document.title, "LIFO Page Replacement Report");
    assert_eq!(document.frame_count, 3);
    assert_eq!(document.reference_string, vec![7, 0, 1, 2, 0, 3, 0, 4]);
    assert_eq!(document.summary, Summary::from_history(&history));
    assert_eq!(document.steps, history.steps());

    Ok(())
}

#[test]
fn test_json_field_names() -> Result<()> {
    let input = SimulationInput::new(1, vec![5, 6])?;
    let history = simulate(&input);
    let json = ExportDocument::new(&input, &history)?.to_json()?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    let step = &value["steps"][1];
    assert_eq!(step["step_index"], 2);
    assert_eq!(step["requested_page"], 6);
    assert_eq!(step["outcome"], "fault");
    assert_eq!(step["evicted_page"], 5);
    assert_eq!(step["evicted_slot_index"], 0);
    assert_eq!(step["frames_after"], serde_json::json!([6]));
    assert_eq!(value["summary"]["total_faults"], 2);

    Ok(())
}

#[test]
fn test_text_report_file() -> Result<()> {
    let input = example_input();
    let history = simulate(&input);
    let dir = create_temp_dir()?;
    let path = dir.path().join("report.txt");

    write_report(&input, &history, ExportFormat::Text, &path)?;
    let text = fs::read_to_string(&path)?;

    assert!(text.contains("Total Frames: 3"));
    assert!(text.contains(&render_table(&history)));
    assert!(text.trim_end().ends_with("LIFO Simulator Generated Report"));

    Ok(())
}

#[test]
fn test_export_requires_steps() -> Result<()> {
    let input = SimulationInput::new(2, Vec::new())?;
    let history = simulate(&input);
    let dir = create_temp_dir()?;
    let path = dir.path().join("empty.json");

    let result = write_report(&input, &history, ExportFormat::Json, &path);
    assert!(matches!(result, Err(ExportError::EmptyHistory)));
    assert!(!path.exists());

    Ok(())
}

#[test]
fn test_consumers_read_same_step_fields() -> Result<()> {
    let input = example_input();
    let history = simulate(&input);

    let points = series_up_to(&history, Cursor::at(7))?;
    assert_eq!(points.len(), history.len());
    assert_eq!(points.last().map(|p| p.hit_ratio), Some(25.0));

    let log: Vec<String> = history.iter().map(describe).collect();
    assert_eq!(log[5], "Page 3 requested. FAULT! Replaced page 2 (top of stack) in Frame 3.");
    assert_eq!(log[6], "Page 0 requested. HIT! Page already in memory.");

    Ok(())
}
