//! Derived read-only views over the prime sequence.
//!
//! Every operation here is a thin composition over [`sequence`]: a bounded
//! prefix, a sum, a materialized list, an indexed lookup, and a grouping by
//! decimal digit count. Count, size, and index parameters are signed so the
//! negative-argument contract is expressible; a negative value fails with
//! [`InvalidArgumentError`] before any element is produced.

use std::collections::BTreeMap;
use std::iter::Take;

use crate::error::InvalidArgumentError;

use super::sequence::{PrimeSequence, sequence};

/// Rejects negative counts, converting valid ones for use with `take`/`nth`.
fn validate_count(
    operation: &'static str,
    argument: &'static str,
    value: i64,
) -> Result<usize, InvalidArgumentError> {
    usize::try_from(value).map_err(|_| InvalidArgumentError {
        operation,
        argument,
        value,
    })
}

/// Number of decimal digits of a positive integer.
const fn digit_count(value: u64) -> u32 {
    value.ilog10() + 1
}

/// Creates a lazy sequence of the first `size` prime numbers.
///
/// Based on [`sequence`] but bounded to exactly `size` elements. The result
/// is still lazy: primes are produced only as the iterator is consumed.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if `size` is negative. A `size` of 0
/// yields an empty sequence.
///
/// # Examples
///
/// ```rust
/// use primestream::primes::sequence_of;
///
/// let primes: Vec<u64> = sequence_of(4)?.collect();
/// assert_eq!(primes, vec![2, 3, 5, 7]);
///
/// assert!(sequence_of(0)?.next().is_none());
/// assert!(sequence_of(-1).is_err());
/// # Ok::<(), primestream::error::InvalidArgumentError>(())
/// ```
pub fn sequence_of(size: i64) -> Result<Take<PrimeSequence>, InvalidArgumentError> {
    let size = validate_count("sequence_of", "size", size)?;
    Ok(sequence().take(size))
}

/// Calculates the sum of the first `n` prime numbers.
///
/// E.g. if `n` = 5, the result is 2 + 3 + 5 + 7 + 11 = 28. The sum of zero
/// primes is 0.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if `n` is negative.
///
/// # Examples
///
/// ```rust
/// use primestream::primes::sum;
///
/// assert_eq!(sum(5)?, 28);
/// assert_eq!(sum(0)?, 0);
/// # Ok::<(), primestream::error::InvalidArgumentError>(())
/// ```
pub fn sum(n: i64) -> Result<u64, InvalidArgumentError> {
    let n = validate_count("sum", "n", n)?;
    Ok(sequence().take(n).sum())
}

/// Collects the first `n` prime numbers into a list, preserving order.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if `n` is negative.
///
/// # Examples
///
/// ```rust
/// use primestream::primes::list;
///
/// assert_eq!(list(4)?, vec![2, 3, 5, 7]);
/// assert!(list(0)?.is_empty());
/// # Ok::<(), primestream::error::InvalidArgumentError>(())
/// ```
pub fn list(n: i64) -> Result<Vec<u64>, InvalidArgumentError> {
    let n = validate_count("list", "n", n)?;
    Ok(sequence().take(n).collect())
}

/// Finds the prime number at zero-based position `index`.
///
/// Index 0 is 2, index 1 is 3, and so on. Because the sequence is infinite,
/// the lookup always succeeds for a non-negative index; `None` is returned
/// only when `index` is negative.
///
/// # Examples
///
/// ```rust
/// use primestream::primes::nth_prime;
///
/// assert_eq!(nth_prime(0), Some(2));
/// assert_eq!(nth_prime(4), Some(11));
/// assert_eq!(nth_prime(-1), None);
///
/// // Apply further processing only when a prime is found.
/// let found = nth_prime(10).inspect(|prime| assert_eq!(*prime, 31));
/// assert_eq!(found, Some(31));
/// ```
pub fn nth_prime(index: i64) -> Option<u64> {
    let index = usize::try_from(index).ok()?;
    sequence().nth(index)
}

/// Groups the first `n` prime numbers by their amount of decimal digits.
///
/// The key is a digit count and the value is the ordered list of primes with
/// that many digits, in generation order. Groups exist only for digit counts
/// that actually occur. Because the sequence is strictly increasing, the
/// map's key order coincides with insertion order.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if `n` is negative.
///
/// # Examples
///
/// ```rust
/// use primestream::primes::group_by_digit_count;
///
/// let groups = group_by_digit_count(20)?;
/// assert_eq!(groups[&1], vec![2, 3, 5, 7]);
/// assert_eq!(groups[&2].first(), Some(&11));
/// assert_eq!(groups[&2].last(), Some(&71));
/// # Ok::<(), primestream::error::InvalidArgumentError>(())
/// ```
pub fn group_by_digit_count(n: i64) -> Result<BTreeMap<u32, Vec<u64>>, InvalidArgumentError> {
    let n = validate_count("group_by_digit_count", "n", n)?;
    Ok(sequence().take(n).fold(BTreeMap::new(), |mut groups, prime| {
        groups.entry(digit_count(prime)).or_default().push(prime);
        groups
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2, 1)]
    #[case(7, 1)]
    #[case(11, 2)]
    #[case(97, 2)]
    #[case(101, 3)]
    fn digit_count_of_primes(#[case] value: u64, #[case] expected: u32) {
        assert_eq!(digit_count(value), expected);
    }

    #[rstest]
    fn sequence_of_is_lazy() {
        let mut bounded = sequence_of(1_000_000).unwrap();
        // Only the pulled prefix is ever computed.
        assert_eq!(bounded.next(), Some(2));
        assert_eq!(bounded.next(), Some(3));
    }

    #[rstest]
    fn negative_arguments_are_rejected() {
        assert!(sequence_of(-1).is_err());
        assert!(sum(-1).is_err());
        assert!(list(-5).is_err());
        assert!(group_by_digit_count(-3).is_err());
    }

    #[rstest]
    fn error_carries_context() {
        let error = sum(-7).unwrap_err();
        assert_eq!(error.operation, "sum");
        assert_eq!(error.argument, "n");
        assert_eq!(error.value, -7);
    }
}
