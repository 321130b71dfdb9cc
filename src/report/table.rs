use std::fmt::{Display, Write};

use serde::Serialize;

use crate::simulation::history::{SimulationHistory, StepRecord};

const HEADERS: [&str; 5] = ["Step", "Request", "Frames State", "Stack (Top -> Bottom)", "Status"];

/// One printable row of the step table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub step: usize,
    pub request: String,
    /// Slots in order, `-` for empty: `7 | 0 | -`
    pub frames: String,
    /// Stack top first: `4 -> 0 -> 7`
    pub stack: String,
    /// `HIT`, `FAULT` or `REPLACED <page>`
    pub status: String,
}

impl ReportRow {
    pub fn from_step<P: Display>(step: &StepRecord<P>) -> Self {
        let frames = step
            .frames_after
            .iter()
            .map(|slot| match slot {
                Some(page) => page.to_string(),
                None => "-".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" | ");

        let stack = step
            .stack_after
            .iter()
            .rev()
            .map(|page| page.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");

        let status = match (&step.evicted_page, step.is_hit()) {
            (_, true) => "HIT".to_string(),
            (Some(victim), false) => format!("REPLACED {}", victim),
            (None, false) => "FAULT".to_string(),
        };

        Self {
            step: step.step_index,
            request: step.requested_page.to_string(),
            frames,
            stack,
            status,
        }
    }

    fn cells(&self) -> [String; 5] {
        [
            self.step.to_string(),
            self.request.clone(),
            self.frames.clone(),
            self.stack.clone(),
            self.status.clone(),
        ]
    }
}

pub fn rows<P: Display>(history: &SimulationHistory<P>) -> Vec<ReportRow> {
    history.iter().map(ReportRow::from_step).collect()
}

/// Render the full step table, one row per reference in the order requested
pub fn render_table<P: Display>(history: &SimulationHistory<P>) -> String {
    render_rows(history.steps())
}

/// Render a table from bare step records, e.g. those of a loaded report
pub fn render_rows<P: Display>(steps: &[StepRecord<P>]) -> String {
    let body: Vec<[String; 5]> = steps
        .iter()
        .map(|step| ReportRow::from_step(step).cells())
        .collect();

    let mut widths = HEADERS.map(str::len);
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_separator(&mut out, &widths);
    push_row(&mut out, &widths, HEADERS.iter());
    push_separator(&mut out, &widths);
    for cells in &body {
        push_row(&mut out, &widths, cells.iter());
    }
    push_separator(&mut out, &widths);
    let _ = writeln!(out, "({} steps)", body.len());
    out
}

fn push_separator(out: &mut String, widths: &[usize]) {
    out.push('+');
    for &width in widths {
        out.push_str(&"-".repeat(width + 2));
        out.push('+');
    }
    out.push('\n');
}

fn push_row<I, S>(out: &mut String, widths: &[usize], cells: I)
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    out.push('|');
    for (cell, &width) in cells.zip(widths) {
        let _ = write!(out, " {:<width$} |", cell.as_ref(), width = width);
    }
    out.push('\n');
}
