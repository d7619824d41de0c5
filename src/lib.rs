//! # primestream
//!
//! A lazy prime number sequence library providing pull-based infinite
//! iteration and derived views.
//!
//! ## Overview
//!
//! The core of the crate is [`primes::PrimeSequence`], an infinite,
//! restartable iterator of primes in increasing order starting at 2. Each
//! pull tests successive candidate integers for primality; nothing is
//! computed beyond what is consumed. On top of it sit five derived views:
//! bounded prefixes, sums, materialized lists, indexed lookups, and grouping
//! by decimal digit count.
//!
//! Evaluation is single-threaded, synchronous, and side-effect-free. Because
//! it is deterministic, independent sequences can run on separate threads
//! with no coordination.
//!
//! ## Example
//!
//! ```rust
//! use primestream::prelude::*;
//!
//! let first_five: Vec<u64> = sequence().take(5).collect();
//! assert_eq!(first_five, vec![2, 3, 5, 7, 11]);
//!
//! assert_eq!(sum(5)?, 28);
//!
//! let groups = group_by_digit_count(20)?;
//! assert_eq!(groups[&1], vec![2, 3, 5, 7]);
//! # Ok::<(), primestream::error::InvalidArgumentError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the public surface of the crate.
///
/// # Usage
///
/// ```rust
/// use primestream::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::InvalidArgumentError;
    pub use crate::primes::*;
}

pub mod error;
pub mod primes;
