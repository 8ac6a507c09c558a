//! Run configuration
//!
//! The index comes from the optional positional argument, or
//! [`DEFAULT_INDEX`] when none is given. The environment is never read.

use crate::error::FibError;
use crate::fibonacci::parse_index;

/// Index evaluated when no argument is given
pub const DEFAULT_INDEX: i64 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Index `n` of the Fibonacci term to print
    pub index: i64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX,
        }
    }
}

impl RunConfig {
    pub fn with_index(index: i64) -> Self {
        Self { index }
    }

    /// Resolve from an optional command-line argument
    ///
    /// Non-integer text is an error; it never falls back to the default.
    pub fn resolve(cli_index: Option<&str>) -> Result<Self, FibError> {
        match cli_index {
            Some(text) => Ok(Self::with_index(parse_index(text)?)),
            None => Ok(Self::default()),
        }
    }
}
