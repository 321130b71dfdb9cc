use rand::Rng;

use crate::common::config::{ConfigError, SimulatorConfig};
use crate::common::types::{PageRef, EXAMPLE_FRAMES, EXAMPLE_REFERENCES};
use crate::input::simulation_input::SimulationInput;

/// Draw a random reference string. Length and page range come from the config,
/// which is rejected if either range is empty.
pub fn random_references<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SimulatorConfig,
) -> Result<Vec<PageRef>, ConfigError> {
    config.validate_random_ranges()?;
    let len = rng.gen_range(config.random_min_len..=config.random_max_len);
    Ok((0..len)
        .map(|_| rng.gen_range(0..config.random_page_bound))
        .collect())
}

/// The canonical classroom example: `7 0 1 2 0 3 0 4` over 3 frames
pub fn example_input() -> SimulationInput {
    SimulationInput::new(EXAMPLE_FRAMES, EXAMPLE_REFERENCES.to_vec())
        .unwrap_or_else(|_| unreachable!("example frame count is positive"))
}

/// Render references the way users type them
pub fn format_references(references: &[PageRef]) -> String {
    references
        .iter()
        .map(|page| page.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
