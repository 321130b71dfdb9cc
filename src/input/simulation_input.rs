use serde::Serialize;

use crate::common::types::{PageRef, MIN_FRAMES};
use crate::input::error::{InputError, InputResult};

/// Validated, frozen input to the simulation engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationInput {
    frame_count: usize,
    references: Vec<PageRef>,
}

impl SimulationInput {
    /// Freeze a frame count and reference string. An empty reference string
    /// is accepted and simulates to an empty history.
    pub fn new(frame_count: usize, references: Vec<PageRef>) -> InputResult<Self> {
        if frame_count < MIN_FRAMES {
            return Err(InputError::NoFrames);
        }
        Ok(Self { frame_count, references })
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn references(&self) -> &[PageRef] {
        &self.references
    }

    /// Same reference string run against a different frame count
    pub fn with_frame_count(&self, frame_count: usize) -> InputResult<Self> {
        Self::new(frame_count, self.references.clone())
    }
}
