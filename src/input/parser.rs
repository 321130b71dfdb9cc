use log::debug;

use crate::common::config::SimulatorConfig;
use crate::common::types::{PageRef, MIN_FRAMES};
use crate::input::error::{InputError, InputResult};
use crate::input::simulation_input::SimulationInput;

/// Parse a frame count, accepting only whole numbers in `[1, max_frames]`
pub fn parse_frame_count(text: &str, max_frames: usize) -> InputResult<usize> {
    let trimmed = text.trim();
    let invalid = || InputError::InvalidFrameCount {
        value: trimmed.to_string(),
        min: MIN_FRAMES,
        max: max_frames,
    };

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let frames: usize = trimmed.parse().map_err(|_| invalid())?;
    check_frame_count(frames, max_frames)
}

/// Reject a numeric frame count outside `[1, max_frames]`
pub fn check_frame_count(frames: usize, max_frames: usize) -> InputResult<usize> {
    if frames < MIN_FRAMES || frames > max_frames {
        return Err(InputError::InvalidFrameCount {
            value: frames.to_string(),
            min: MIN_FRAMES,
            max: max_frames,
        });
    }
    Ok(frames)
}

/// Parse a reference string. Tokens are separated by any run of whitespace
/// and commas; each must consist of ASCII digits and fit a page identifier.
pub fn parse_reference_string(text: &str) -> InputResult<Vec<PageRef>> {
    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(InputError::EmptyReferenceString);
    }

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| parse_page(token, i + 1))
        .collect()
}

fn parse_page(token: &str, position: usize) -> InputResult<PageRef> {
    let invalid = || InputError::InvalidToken {
        token: token.to_string(),
        position,
    };

    // `str::parse` would also accept a leading '+'
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse().map_err(|_| invalid())
}

/// Validate both raw fields and freeze them into a `SimulationInput`
pub fn parse_input(
    frames_text: &str,
    references_text: &str,
    config: &SimulatorConfig,
) -> InputResult<SimulationInput> {
    let frames = parse_frame_count(frames_text, config.max_frames)?;
    let references = parse_reference_string(references_text)?;
    debug!("Parsed {} references for {} frames", references.len(), frames);
    SimulationInput::new(frames, references)
}
