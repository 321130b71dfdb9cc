use serde::{Deserialize, Serialize};

use crate::common::types::{FrameIndex, PageRef};

/// Result of a single page reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Hit,
    Fault,
}

impl Outcome {
    pub fn is_hit(self) -> bool {
        self == Outcome::Hit
    }

    pub fn is_fault(self) -> bool {
        self == Outcome::Fault
    }
}

/// Snapshot of memory after one reference has been processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord<P = PageRef> {
    /// 1-based position in the reference string
    pub step_index: usize,
    pub requested_page: P,
    pub frames_after: Vec<Option<P>>,
    /// Steps since each slot's occupant was loaded; 0 for empty slots
    pub frame_ages: Vec<usize>,
    /// Resident pages, bottom (oldest load) to top (newest load)
    pub stack_after: Vec<P>,
    pub outcome: Outcome,
    /// Set only on a fault that had to reuse an occupied slot
    pub evicted_page: Option<P>,
    pub evicted_slot_index: Option<FrameIndex>,
    /// Slot now holding the requested page
    pub filled_slot_index: FrameIndex,
}

impl<P> StepRecord<P> {
    pub fn is_hit(&self) -> bool {
        self.outcome.is_hit()
    }

    pub fn is_fault(&self) -> bool {
        self.outcome.is_fault()
    }

    /// Fault that evicted a resident page
    pub fn is_replacement(&self) -> bool {
        self.evicted_page.is_some()
    }

    /// Pages resident after this step, in slot order
    pub fn resident_pages(&self) -> impl Iterator<Item = &P> {
        self.frames_after.iter().flatten()
    }

    pub fn occupied_count(&self) -> usize {
        self.frames_after.iter().filter(|slot| slot.is_some()).count()
    }

    /// Page that the next full-memory fault would evict
    pub fn stack_top(&self) -> Option<&P> {
        self.stack_after.last()
    }
}

/// Hit and fault counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub hits: usize,
    pub faults: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Hit => self.hits += 1,
            Outcome::Fault => self.faults += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.hits + self.faults
    }

    /// hits / (hits + faults), or 0.0 when nothing has been processed
    pub fn hit_ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    pub fn fault_ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.faults as f64 / total as f64,
        }
    }
}

/// Complete, read-only record of one simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationHistory<P = PageRef> {
    frame_count: usize,
    steps: Vec<StepRecord<P>>,
    /// `cumulative[i]` counts steps `0..=i`
    #[serde(skip)]
    cumulative: Vec<Tally>,
}

impl<P> SimulationHistory<P> {
    pub(crate) fn from_steps(frame_count: usize, steps: Vec<StepRecord<P>>) -> Self {
        let mut running = Tally::default();
        let cumulative = steps
            .iter()
            .map(|step| {
                running.record(step.outcome);
                running
            })
            .collect();

        Self {
            frame_count,
            steps,
            cumulative,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[StepRecord<P>] {
        &self.steps
    }

    /// Step at a 0-based index
    pub fn get(&self, index: usize) -> Option<&StepRecord<P>> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord<P>> {
        self.steps.iter()
    }

    pub fn last(&self) -> Option<&StepRecord<P>> {
        self.steps.last()
    }

    /// Counters over the whole run
    pub fn totals(&self) -> Tally {
        self.cumulative.last().copied().unwrap_or_default()
    }

    /// Counters over steps `0..=index`
    pub(crate) fn cumulative_at(&self, index: usize) -> Option<Tally> {
        self.cumulative.get(index).copied()
    }

    pub fn evictions(&self) -> impl Iterator<Item = &StepRecord<P>> {
        self.steps.iter().filter(|step| step.is_replacement())
    }
}

impl<'a, P> IntoIterator for &'a SimulationHistory<P> {
    type Item = &'a StepRecord<P>;
    type IntoIter = std::slice::Iter<'a, StepRecord<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
