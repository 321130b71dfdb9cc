use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-owned position in a history.
///
/// Ranges over `-1..len`, where `-1` means nothing has been replayed yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cursor(Option<usize>);

impl Cursor {
    pub const NOT_STARTED: Cursor = Cursor(None);

    /// Cursor on a 0-based step index
    pub const fn at(index: usize) -> Self {
        Cursor(Some(index))
    }

    /// Convert from the `-1`-based integer form. Values below `-1` have no cursor.
    pub fn from_raw(raw: isize) -> Option<Self> {
        match raw {
            -1 => Some(Cursor::NOT_STARTED),
            r if r >= 0 => Some(Cursor::at(r as usize)),
            _ => None,
        }
    }

    pub fn as_raw(self) -> isize {
        match self.0 {
            Some(index) => index as isize,
            None => -1,
        }
    }

    pub fn index(self) -> Option<usize> {
        self.0
    }

    pub fn is_started(self) -> bool {
        self.0.is_some()
    }

    /// Number of steps replayed so far
    pub fn processed(self) -> usize {
        self.0.map_or(0, |index| index + 1)
    }

    pub(crate) fn next(self) -> Cursor {
        Cursor::at(self.processed())
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_raw())
    }
}
