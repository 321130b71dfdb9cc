/// Page identifier type
pub type PageRef = u32;

/// Frame slot index type (0-based)
pub type FrameIndex = usize;

/// Smallest frame count the engine accepts
pub const MIN_FRAMES: usize = 1;

/// Largest frame count accepted from user input
pub const MAX_FRAMES: usize = 10;

/// Frame count used when none is given
pub const DEFAULT_FRAMES: usize = 3;

/// Canonical teaching reference string
pub const EXAMPLE_REFERENCES: [PageRef; 8] = [7, 0, 1, 2, 0, 3, 0, 4];

/// Frame count paired with the canonical reference string
pub const EXAMPLE_FRAMES: usize = 3;
