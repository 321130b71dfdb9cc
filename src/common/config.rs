use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::types::{DEFAULT_FRAMES, MAX_FRAMES, MIN_FRAMES};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Tunables for input validation, random generation and playback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Frame count offered when the user gives none
    pub default_frames: usize,

    /// Upper bound on user supplied frame counts
    pub max_frames: usize,

    /// Shortest generated reference string
    pub random_min_len: usize,

    /// Longest generated reference string
    pub random_max_len: usize,

    /// Generated pages fall in `0..random_page_bound`
    pub random_page_bound: u32,

    /// Delay between auto-play steps, in milliseconds
    pub playback_delay_ms: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            default_frames: DEFAULT_FRAMES,
            max_frames: MAX_FRAMES,
            random_min_len: 8,
            random_max_len: 13,
            random_page_bound: 9,
            playback_delay_ms: 400,
        }
    }
}

impl SimulatorConfig {
    /// Parse a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SimulatorConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_frames < MIN_FRAMES {
            return Err(ConfigError::Invalid(format!(
                "max_frames must be at least {}, got {}",
                MIN_FRAMES, self.max_frames
            )));
        }
        if self.default_frames < MIN_FRAMES || self.default_frames > self.max_frames {
            return Err(ConfigError::Invalid(format!(
                "default_frames must lie in [{}, {}], got {}",
                MIN_FRAMES, self.max_frames, self.default_frames
            )));
        }
        self.validate_random_ranges()
    }

    /// Check only the settings that drive random reference generation
    pub fn validate_random_ranges(&self) -> Result<(), ConfigError> {
        if self.random_min_len == 0 || self.random_min_len > self.random_max_len {
            return Err(ConfigError::Invalid(format!(
                "random length range [{}, {}] is empty",
                self.random_min_len, self.random_max_len
            )));
        }
        if self.random_page_bound == 0 {
            return Err(ConfigError::Invalid("random_page_bound must be positive".to_string()));
        }
        Ok(())
    }
}
