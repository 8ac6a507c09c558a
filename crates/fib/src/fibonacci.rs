//! Fibonacci evaluator
//!
//! F(0) = 0, F(1) = F(2) = 1, F(k) = F(k-1) + F(k-2) for k > 2.
//!
//! Evaluation is the unmemoized double recursion: exponential time, stack
//! depth proportional to `n`. F(42) takes hundreds of millions of calls.
//!
//! # Bounds
//!
//! - Negative indices are rejected before any recursion happens.
//! - Indices above [`MAX_INDEX`] are rejected because the value would overflow
//!   `i64`. This also caps the recursion depth at [`MAX_INDEX`] frames.

use crate::error::FibError;
use tracing::debug;

/// Largest index whose Fibonacci value fits in an `i64` (F(92) = 7540113804746346429)
pub const MAX_INDEX: i64 = 92;

/// Compute F(n) by naive recursion
///
/// # Errors
///
/// - [`FibError::Negative`] if `n < 0`
/// - [`FibError::Overflow`] if `n > MAX_INDEX`
pub fn fibonacci(n: i64) -> Result<i64, FibError> {
    if n < 0 {
        return Err(FibError::Negative(n));
    }
    if n > MAX_INDEX {
        return Err(FibError::Overflow(n));
    }
    debug!(n, "evaluating by naive recursion");
    Ok(naive(n))
}

/// Caller guarantees `0 <= n <= MAX_INDEX`
fn naive(n: i64) -> i64 {
    match n {
        0 => 0,
        1 | 2 => 1,
        _ => naive(n - 1) + naive(n - 2),
    }
}

/// Parse a decimal index
///
/// Surrounding whitespace is ignored. Negative values parse; [`fibonacci`]
/// rejects them.
pub fn parse_index(text: &str) -> Result<i64, FibError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| FibError::InvalidArgument(text.to_string()))
}
