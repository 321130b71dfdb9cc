use serde::Serialize;

use crate::replay::cursor::Cursor;
use crate::replay::error::ReplayResult;
use crate::simulation::history::SimulationHistory;

/// One point of the hit-ratio chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub step: usize,
    /// Cumulative hit ratio in percent after this step
    pub hit_ratio: f64,
    /// `1` for a hit, `-1` for a fault
    pub event: i8,
}

/// Chart data for every step up to and including the cursor
pub fn series_up_to<P>(history: &SimulationHistory<P>, cursor: Cursor) -> ReplayResult<Vec<ChartPoint>> {
    history.check_cursor(cursor)?;
    let points = history
        .iter()
        .take(cursor.processed())
        .enumerate()
        .map(|(index, step)| {
            let tally = history.tally_up_to(Cursor::at(index)).unwrap_or_default();
            ChartPoint {
                step: step.step_index,
                hit_ratio: tally.hit_ratio() * 100.0,
                event: if step.is_hit() { 1 } else { -1 },
            }
        })
        .collect();
    Ok(points)
}

/// Text sparkline of the event series: `+` for hits, `-` for faults
pub fn event_strip(points: &[ChartPoint]) -> String {
    points
        .iter()
        .map(|point| if point.event > 0 { '+' } else { '-' })
        .collect()
}
