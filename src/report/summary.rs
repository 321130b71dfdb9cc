use serde::{Deserialize, Serialize};

use crate::simulation::history::{SimulationHistory, Tally};

/// Whole-run statistics printed at the top of every report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub frame_count: usize,
    pub reference_count: usize,
    pub total_hits: usize,
    pub total_faults: usize,
    pub evictions: usize,
    /// Percentage in `[0, 100]`
    pub hit_ratio: f64,
}

impl Summary {
    pub fn from_history<P>(history: &SimulationHistory<P>) -> Self {
        let totals = history.totals();
        Self {
            frame_count: history.frame_count(),
            reference_count: history.len(),
            total_hits: totals.hits,
            total_faults: totals.faults,
            evictions: history.evictions().count(),
            hit_ratio: totals.hit_ratio() * 100.0,
        }
    }

    pub fn tally(&self) -> Tally {
        Tally {
            hits: self.total_hits,
            faults: self.total_faults,
        }
    }
}

/// Hit ratio as a percentage with one decimal, e.g. `"25.0%"`
pub fn format_ratio(tally: Tally) -> String {
    format!("{:.1}%", tally.hit_ratio() * 100.0)
}
