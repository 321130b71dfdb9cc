// LIFO page replacement simulator

pub mod common;
pub mod input;
pub mod replay;
pub mod report;
pub mod simulation;

// Re-export key items for convenient access
pub use common::config::{ConfigError, SimulatorConfig};
pub use common::types::{FrameIndex, PageRef};
pub use input::{parse_input, InputError, SimulationInput};
pub use replay::{Cursor, ReplayError, Session, SessionError};
pub use report::{ExportDocument, ExportError, ExportFormat, Summary};
pub use simulation::{simulate, simulate_pages, Outcome, SimulationHistory, StepRecord, Tally};
