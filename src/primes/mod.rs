//! Prime number generation and derived views.
//!
//! This module provides an API to work with prime numbers, built on a lazy,
//! infinite [`PrimeSequence`]. That sequence is used by every operation in
//! this module:
//!
//! - [`sequence`]: the infinite, restartable sequence itself
//! - [`sequence_of`]: a bounded, still-lazy prefix
//! - [`sum`]: the sum of the first `n` primes
//! - [`list`]: the first `n` primes materialized in order
//! - [`nth_prime`]: indexed lookup
//! - [`group_by_digit_count`]: partition of a prefix by decimal digit count
//!
//! # Examples
//!
//! ```rust
//! use primestream::primes;
//!
//! assert_eq!(primes::list(4)?, vec![2, 3, 5, 7]);
//! assert_eq!(primes::sum(5)?, 28);
//! assert_eq!(primes::nth_prime(4), Some(11));
//! # Ok::<(), primestream::error::InvalidArgumentError>(())
//! ```

mod sequence;
mod views;

pub use sequence::{PrimeSequence, is_prime, sequence};
pub use views::{group_by_digit_count, list, nth_prime, sequence_of, sum};
