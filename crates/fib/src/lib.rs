//! Naive Fibonacci
//!
//! Computes the nth Fibonacci number by direct double recursion and prints it.
//!
//! ```
//! use naive_fib::{RunConfig, fibonacci, run};
//!
//! assert_eq!(fibonacci(10).unwrap(), 55);
//!
//! let mut out = Vec::new();
//! run(&RunConfig::with_index(20), &mut out).unwrap();
//! assert_eq!(out, b"6765\n");
//! ```

pub mod config;
pub mod error;
pub mod fibonacci;

pub use config::{DEFAULT_INDEX, RunConfig};
pub use error::FibError;
pub use fibonacci::{MAX_INDEX, fibonacci, parse_index};

use std::io::Write;
use std::time::Instant;
use tracing::debug;

/// Evaluate the configured index and write the result as one decimal line
///
/// Returns the computed value. Nothing is written on error.
pub fn run(config: &RunConfig, out: &mut impl Write) -> Result<i64, FibError> {
    let start = Instant::now();
    let value = fibonacci(config.index)?;
    debug!(
        index = config.index,
        value,
        elapsed = ?start.elapsed(),
        "evaluated"
    );

    writeln!(out, "{}", value)?;
    out.flush()?;
    Ok(value)
}
