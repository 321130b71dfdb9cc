use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::types::PageRef;
use crate::input::{format_references, SimulationInput};
use crate::report::summary::{format_ratio, Summary};
use crate::report::table::render_rows;
use crate::simulation::history::{SimulationHistory, StepRecord};

pub const REPORT_TITLE: &str = "LIFO Page Replacement Report";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No simulation data to export")]
    EmptyHistory,
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Text,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" => Ok(ExportFormat::Text),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Text => write!(f, "text"),
        }
    }
}

/// Serializable report: configuration, statistics and every step in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub title: String,
    pub generated_at: DateTime<Local>,
    pub frame_count: usize,
    pub reference_string: Vec<PageRef>,
    pub summary: Summary,
    pub steps: Vec<StepRecord>,
}

impl ExportDocument {
    pub fn new(input: &SimulationInput, history: &SimulationHistory) -> Result<Self, ExportError> {
        Self::with_timestamp(input, history, Local::now())
    }

    pub fn with_timestamp(
        input: &SimulationInput,
        history: &SimulationHistory,
        generated_at: DateTime<Local>,
    ) -> Result<Self, ExportError> {
        if history.is_empty() {
            return Err(ExportError::EmptyHistory);
        }
        Ok(Self {
            title: REPORT_TITLE.to_string(),
            generated_at,
            frame_count: input.frame_count(),
            reference_string: input.references().to_vec(),
            summary: Summary::from_history(history),
            steps: history.steps().to_vec(),
        })
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text rendering of the same content
    pub fn to_text(&self) -> String {
        let summary = &self.summary;
        let mut out = String::new();
        out.push_str(&format!("{}\n", self.title));
        out.push_str(&format!("Generated: {}\n\n", self.generated_at.format("%Y-%m-%d %H:%M:%S")));
        out.push_str("Simulation Configuration\n");
        out.push_str(&format!("  Reference String: {}\n", format_references(&self.reference_string)));
        out.push_str(&format!("  Total Frames: {}\n\n", self.frame_count));
        out.push_str("Statistics Summary\n");
        out.push_str(&format!(
            "  Total Hits: {}  Total Faults: {}  Hit Ratio: {}\n\n",
            summary.total_hits,
            summary.total_faults,
            format_ratio(summary.tally())
        ));
        out.push_str(&render_rows(&self.steps));
        out.push_str("\nLIFO Simulator Generated Report\n");
        out
    }

    pub fn render(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Json => self.to_json(),
            ExportFormat::Text => Ok(self.to_text()),
        }
    }
}

/// `LIFO_Report_<date>.<ext>`
pub fn default_file_name(format: ExportFormat, date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("LIFO_Report_{}.{}", date.format("%Y-%m-%d"), format.extension()))
}

/// Build a report and write it to `path`
pub fn write_report(
    input: &SimulationInput,
    history: &SimulationHistory,
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let document = ExportDocument::new(input, history)?;
    let rendered = document.render(format)?;
    fs::write(path.as_ref(), rendered)?;
    info!("Wrote {} report to {}", format, path.as_ref().display());
    Ok(())
}
