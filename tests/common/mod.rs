#![allow(dead_code)]

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

use lifosim::{simulate, PageRef, SimulationHistory, SimulationInput};

// Simulate a reference string with a fixed frame count
pub fn run(frames: usize, refs: &[PageRef]) -> Result<SimulationHistory> {
    let input = SimulationInput::new(frames, refs.to_vec())?;
    Ok(simulate(&input))
}

// Generate reproducible reference strings over a small page range
pub fn seeded_reference_strings(count: usize, seed: u64) -> Vec<Vec<PageRef>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..40);
            (0..len).map(|_| rng.gen_range(0..8)).collect()
        })
        .collect()
}

// Create a temporary directory for report files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(tempfile::tempdir()?)
}
