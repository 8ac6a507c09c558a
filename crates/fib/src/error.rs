//! Error taxonomy for Fibonacci evaluation
//!
//! Every failure is surfaced to the caller as a [`FibError`]; nothing in the
//! library panics on bad input.

use crate::fibonacci::MAX_INDEX;

/// Error returned by evaluation, parsing and output
#[derive(Debug)]
pub enum FibError {
    /// Input text is not a decimal integer
    InvalidArgument(String),
    /// Negative index (no base case would ever match)
    Negative(i64),
    /// Index whose value does not fit in an `i64`
    Overflow(i64),
    /// Writing the result failed
    Io(std::io::Error),
}

impl std::fmt::Display for FibError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FibError::InvalidArgument(text) => {
                write!(
                    f,
                    "invalid argument '{}': expected a non-negative integer",
                    text
                )
            }
            FibError::Negative(n) => {
                write!(f, "invalid argument {}: index must be non-negative", n)
            }
            FibError::Overflow(n) => write!(
                f,
                "index {} is too large: F(n) overflows i64 for n > {}",
                n, MAX_INDEX
            ),
            FibError::Io(e) => write!(f, "failed to write result: {}", e),
        }
    }
}

impl std::error::Error for FibError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FibError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FibError {
    fn from(e: std::io::Error) -> Self {
        FibError::Io(e)
    }
}
