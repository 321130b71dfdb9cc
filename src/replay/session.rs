use log::{debug, info};

use crate::common::config::SimulatorConfig;
use crate::input::{parse_input, SimulationInput};
use crate::replay::cursor::Cursor;
use crate::replay::error::{ReplayError, SessionError};
use crate::simulation::engine::simulate;
use crate::simulation::history::{SimulationHistory, StepRecord, Tally};

/// A loaded simulation with its replay cursor
#[derive(Debug, Clone)]
struct Loaded {
    input: SimulationInput,
    history: SimulationHistory,
    cursor: Cursor,
}

/// Owned state of one interactive run: the validated input, its history and
/// the replay cursor. Reloading replaces all three at once.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SimulatorConfig,
    loaded: Option<Loaded>,
}

impl Session {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config, loaded: None }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Validate raw user text and simulate it
    pub fn load(&mut self, frames_text: &str, references_text: &str) -> Result<&SimulationHistory, SessionError> {
        let input = parse_input(frames_text, references_text, &self.config)?;
        Ok(self.load_input(input))
    }

    /// Simulate an already validated input, discarding any previous run
    pub fn load_input(&mut self, input: SimulationInput) -> &SimulationHistory {
        let history = simulate(&input);
        info!(
            "Loaded {} pages with {} frames",
            input.references().len(),
            input.frame_count()
        );
        let loaded = self.loaded.insert(Loaded {
            input,
            history,
            cursor: Cursor::NOT_STARTED,
        });
        &loaded.history
    }

    /// Forget the loaded simulation
    pub fn reset(&mut self) {
        if self.loaded.take().is_some() {
            debug!("Session reset");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    fn loaded(&self) -> Result<&Loaded, SessionError> {
        self.loaded.as_ref().ok_or(SessionError::NotLoaded)
    }

    fn loaded_mut(&mut self) -> Result<&mut Loaded, SessionError> {
        self.loaded.as_mut().ok_or(SessionError::NotLoaded)
    }

    pub fn input(&self) -> Result<&SimulationInput, SessionError> {
        Ok(&self.loaded()?.input)
    }

    pub fn history(&self) -> Result<&SimulationHistory, SessionError> {
        Ok(&self.loaded()?.history)
    }

    pub fn cursor(&self) -> Cursor {
        self.loaded
            .as_ref()
            .map_or(Cursor::NOT_STARTED, |loaded| loaded.cursor)
    }

    /// Move to the first step
    pub fn start(&mut self) -> Result<&StepRecord, SessionError> {
        let loaded = self.loaded_mut()?;
        loaded.cursor = loaded.history.step_forward(Cursor::NOT_STARTED)?;
        self.current_step()
    }

    pub fn next(&mut self) -> Result<&StepRecord, SessionError> {
        let loaded = self.loaded_mut()?;
        loaded.cursor = loaded.history.step_forward(loaded.cursor)?;
        self.current_step()
    }

    pub fn prev(&mut self) -> Result<&StepRecord, SessionError> {
        let loaded = self.loaded_mut()?;
        loaded.cursor = loaded.history.step_backward(loaded.cursor)?;
        self.current_step()
    }

    /// Jump to a 1-based step number
    pub fn goto(&mut self, step: usize) -> Result<&StepRecord, SessionError> {
        let loaded = self.loaded_mut()?;
        loaded.cursor = loaded.history.cursor_for_step(step)?;
        self.current_step()
    }

    /// Rewind to the not-started position, keeping the loaded history
    pub fn rewind(&mut self) -> Result<(), SessionError> {
        self.loaded_mut()?.cursor = Cursor::NOT_STARTED;
        Ok(())
    }

    /// Step under the cursor, `None` before `start`
    pub fn current(&self) -> Result<Option<&StepRecord>, SessionError> {
        let loaded = self.loaded()?;
        Ok(loaded.history.step_at(loaded.cursor)?)
    }

    /// Step under the cursor after a successful move; a missing step is a range error
    fn current_step(&self) -> Result<&StepRecord, SessionError> {
        let loaded = self.loaded()?;
        let step = loaded.history.step_at(loaded.cursor)?;
        step.ok_or_else(|| {
            ReplayError::OutOfRange {
                requested: loaded.cursor.as_raw(),
                len: loaded.history.len(),
            }
            .into()
        })
    }

    /// Counters up to the cursor
    pub fn tally(&self) -> Result<Tally, SessionError> {
        let loaded = self.loaded()?;
        Ok(loaded.history.tally_up_to(loaded.cursor)?)
    }

    pub fn can_step_forward(&self) -> bool {
        self.loaded
            .as_ref()
            .is_some_and(|loaded| loaded.history.can_step_forward(loaded.cursor).unwrap_or(false))
    }

    pub fn can_step_backward(&self) -> bool {
        self.loaded
            .as_ref()
            .is_some_and(|loaded| loaded.history.can_step_backward(loaded.cursor).unwrap_or(false))
    }

    /// Cursor sits on the final step
    pub fn is_finished(&self) -> bool {
        self.loaded.as_ref().is_some_and(|loaded| {
            !loaded.history.is_empty() && loaded.cursor == loaded.history.last_cursor()
        })
    }
}
