use crate::replay::cursor::Cursor;
use crate::replay::error::{ReplayError, ReplayResult};
use crate::simulation::history::{SimulationHistory, StepRecord, Tally};

/// Read-only navigation over a finished history.
///
/// Cursors past the last step are rejected rather than clamped.
impl<P> SimulationHistory<P> {
    fn out_of_range(&self, requested: isize) -> ReplayError {
        ReplayError::OutOfRange {
            requested,
            len: self.len(),
        }
    }

    /// Reject cursors that point past the last step
    pub fn check_cursor(&self, cursor: Cursor) -> ReplayResult<()> {
        match cursor.index() {
            Some(index) if index >= self.len() => Err(self.out_of_range(cursor.as_raw())),
            _ => Ok(()),
        }
    }

    /// Step under the cursor, `None` before the first step
    pub fn step_at(&self, cursor: Cursor) -> ReplayResult<Option<&StepRecord<P>>> {
        self.check_cursor(cursor)?;
        Ok(cursor.index().and_then(|index| self.get(index)))
    }

    /// Hits and faults over every step up to and including the cursor
    pub fn tally_up_to(&self, cursor: Cursor) -> ReplayResult<Tally> {
        self.check_cursor(cursor)?;
        Ok(cursor
            .index()
            .and_then(|index| self.cumulative_at(index))
            .unwrap_or_default())
    }

    pub fn hits_up_to(&self, cursor: Cursor) -> ReplayResult<usize> {
        Ok(self.tally_up_to(cursor)?.hits)
    }

    pub fn faults_up_to(&self, cursor: Cursor) -> ReplayResult<usize> {
        Ok(self.tally_up_to(cursor)?.faults)
    }

    /// 0.0 when nothing has been replayed
    pub fn hit_ratio_up_to(&self, cursor: Cursor) -> ReplayResult<f64> {
        Ok(self.tally_up_to(cursor)?.hit_ratio())
    }

    pub fn can_step_forward(&self, cursor: Cursor) -> ReplayResult<bool> {
        self.check_cursor(cursor)?;
        Ok(cursor.processed() < self.len())
    }

    /// The first step is the floor: backward navigation never returns to
    /// the not-started position.
    pub fn can_step_backward(&self, cursor: Cursor) -> ReplayResult<bool> {
        self.check_cursor(cursor)?;
        Ok(matches!(cursor.index(), Some(index) if index > 0))
    }

    pub fn step_forward(&self, cursor: Cursor) -> ReplayResult<Cursor> {
        if self.can_step_forward(cursor)? {
            Ok(cursor.next())
        } else {
            Err(self.out_of_range(cursor.as_raw() + 1))
        }
    }

    pub fn step_backward(&self, cursor: Cursor) -> ReplayResult<Cursor> {
        let allowed = self.can_step_backward(cursor)?;
        match cursor.index() {
            Some(index) if allowed => Ok(Cursor::at(index - 1)),
            _ => Err(self.out_of_range(cursor.as_raw() - 1)),
        }
    }

    /// Cursor on a 1-based step number
    pub fn cursor_for_step(&self, step: usize) -> ReplayResult<Cursor> {
        if step == 0 || step > self.len() {
            return Err(self.out_of_range(step as isize - 1));
        }
        Ok(Cursor::at(step - 1))
    }

    /// Cursor on the final step, `NOT_STARTED` for an empty history
    pub fn last_cursor(&self) -> Cursor {
        match self.len() {
            0 => Cursor::NOT_STARTED,
            len => Cursor::at(len - 1),
        }
    }
}
