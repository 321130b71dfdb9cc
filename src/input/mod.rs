pub mod error;
pub mod generator;
pub mod parser;
pub mod simulation_input;

pub use error::{InputError, InputResult};
pub use generator::{example_input, format_references, random_references};
pub use parser::{check_frame_count, parse_frame_count, parse_input, parse_reference_string};
pub use simulation_input::SimulationInput;
