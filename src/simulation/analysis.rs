use std::fmt::Debug;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::simulation::engine::simulate_pages;
use crate::simulation::history::{SimulationHistory, Tally};

/// Totals of one run at a given frame count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurvePoint {
    pub frame_count: usize,
    pub tally: Tally,
}

/// Fault totals for one reference string across increasing frame counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaultCurve {
    points: Vec<CurvePoint>,
}

impl FaultCurve {
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// True when adding frames never adds faults (no Belady anomaly)
    pub fn is_monotonic(&self) -> bool {
        self.points
            .windows(2)
            .all(|pair| pair[0].tally.faults >= pair[1].tally.faults)
    }
}

/// Simulate `references` once per frame count. Zero is skipped.
pub fn fault_curve<P>(references: &[P], frame_counts: RangeInclusive<usize>) -> FaultCurve
where
    P: Clone + PartialEq + Debug,
{
    let points = frame_counts
        .filter(|&frames| frames > 0)
        .map(|frame_count| CurvePoint {
            frame_count,
            tally: simulate_pages(frame_count, references).totals(),
        })
        .collect();
    FaultCurve { points }
}

/// First step index (1-based) at which the pages resident with `smaller`
/// are not all resident with `larger`. Both histories must replay the same
/// reference string.
pub fn inclusion_violation<P: PartialEq>(
    smaller: &SimulationHistory<P>,
    larger: &SimulationHistory<P>,
) -> Option<usize> {
    smaller
        .iter()
        .zip(larger.iter())
        .find(|(small, large)| {
            small
                .resident_pages()
                .any(|page| !large.resident_pages().any(|other| other == page))
        })
        .map(|(small, _)| small.step_index)
}
