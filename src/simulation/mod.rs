pub mod analysis;
pub mod engine;
pub mod frames;
pub mod history;
mod replacer;

pub use analysis::{fault_curve, inclusion_violation, CurvePoint, FaultCurve};
pub use engine::{simulate, simulate_pages};
pub use frames::FrameSet;
pub use history::{Outcome, SimulationHistory, StepRecord, Tally};
pub use replacer::LifoReplacer;
