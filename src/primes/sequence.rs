//! The lazy prime sequence and its primality kernel.
//!
//! This module provides [`is_prime`], the single source of truth for
//! primality testing, and [`PrimeSequence`], a pull-based iterator over the
//! infinite sequence of primes. Each call to `next()` tests successive
//! candidate integers until one passes; nothing is computed beyond what is
//! consumed, and nothing is cached between pulls besides the cursor itself.
//!
//! # Examples
//!
//! ```rust
//! use primestream::primes::sequence;
//!
//! let first_five: Vec<u64> = sequence().take(5).collect();
//! assert_eq!(first_five, vec![2, 3, 5, 7, 11]);
//! ```

use std::iter::FusedIterator;

/// Returns `true` if `candidate` is a prime number.
///
/// An integer `k >= 2` is prime iff no integer in `[2, floor(sqrt(k))]`
/// evenly divides it. Values below 2 are never prime.
///
/// # Examples
///
/// ```rust
/// use primestream::primes::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91)); // 7 * 13
/// ```
#[inline]
pub fn is_prime(candidate: u64) -> bool {
    if candidate < 2 {
        return false;
    }
    (2..=candidate.isqrt()).all(|divisor| candidate % divisor != 0)
}

/// A lazy, infinite, restartable sequence of prime numbers.
///
/// `PrimeSequence` is a stateful cursor holding the next candidate to test.
/// Pulling an element via [`Iterator::next`] advances the cursor through
/// successive integers until one passes [`is_prime`]. The sequence starts at
/// 2 and is strictly increasing with no duplicates.
///
/// Evaluation is deterministic and side-effect-free: every fresh
/// `PrimeSequence` yields the same values from the start, so two independent
/// sequences always agree on every prefix. The iterator never ends.
///
/// # Examples
///
/// ## Restartability
///
/// ```rust
/// use primestream::primes::PrimeSequence;
///
/// let first: Vec<u64> = PrimeSequence::new().take(4).collect();
/// let second: Vec<u64> = PrimeSequence::new().take(4).collect();
/// assert_eq!(first, second);
/// assert_eq!(first, vec![2, 3, 5, 7]);
/// ```
///
/// ## Laziness
///
/// ```rust
/// use primestream::primes::PrimeSequence;
///
/// let mut primes = PrimeSequence::new();
/// assert_eq!(primes.next_candidate(), 2); // nothing tested yet
///
/// assert_eq!(primes.next(), Some(2));
/// assert_eq!(primes.next_candidate(), 3); // cursor sits just past 2
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeSequence {
    candidate: u64,
}

impl PrimeSequence {
    /// Creates a fresh sequence positioned at the start (the prime 2).
    #[inline]
    pub const fn new() -> Self {
        Self { candidate: 2 }
    }

    /// Returns the next candidate integer the cursor will test.
    ///
    /// Useful for observing how far the sequence has advanced; no candidate
    /// at or beyond this value has been tested yet.
    #[inline]
    pub const fn next_candidate(&self) -> u64 {
        self.candidate
    }
}

impl Default for PrimeSequence {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PrimeSequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let candidate = self.candidate;
            self.candidate += 1;
            if is_prime(candidate) {
                return Some(candidate);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // The sequence is infinite.
        (usize::MAX, None)
    }
}

// next() never returns None, so the iterator is trivially fused.
impl FusedIterator for PrimeSequence {}

/// Creates the infinite, lazy, restartable sequence of primes.
///
/// The values are 2, 3, 5, ... and so on. Equivalent to
/// [`PrimeSequence::new`]; provided as the entry point the derived views
/// build on.
///
/// # Examples
///
/// ```rust
/// use primestream::primes::sequence;
///
/// let mut primes = sequence();
/// assert_eq!(primes.next(), Some(2));
/// assert_eq!(primes.next(), Some(3));
/// ```
#[inline]
pub const fn sequence() -> PrimeSequence {
    PrimeSequence::new()
}

// Independent evaluations share nothing, so a sequence may move freely
// across threads.
static_assertions::assert_impl_all!(PrimeSequence: Send, Sync, Clone, Unpin);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false)]
    #[case(1, false)]
    #[case(2, true)]
    #[case(3, true)]
    #[case(4, false)]
    #[case(25, false)]
    #[case(29, true)]
    #[case(7919, true)]
    #[case(7917, false)]
    fn is_prime_matches_trial_division(#[case] candidate: u64, #[case] expected: bool) {
        assert_eq!(is_prime(candidate), expected);
    }

    #[rstest]
    fn sequence_starts_at_two() {
        let mut primes = sequence();
        assert_eq!(primes.next(), Some(2));
        assert_eq!(primes.next(), Some(3));
        assert_eq!(primes.next(), Some(5));
    }

    #[rstest]
    fn sequence_is_strictly_increasing() {
        let prefix: Vec<u64> = sequence().take(100).collect();
        assert!(prefix.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[rstest]
    fn fresh_sequences_agree() {
        let first: Vec<u64> = sequence().take(50).collect();
        let second: Vec<u64> = sequence().take(50).collect();
        assert_eq!(first, second);
    }

    #[rstest]
    fn cursor_does_not_run_ahead_of_consumption() {
        let mut primes = sequence();
        assert_eq!(primes.next_candidate(), 2);

        let _ = primes.next(); // yields 2
        assert_eq!(primes.next_candidate(), 3);

        let _ = primes.next(); // yields 3
        assert_eq!(primes.next_candidate(), 4);
    }

    #[rstest]
    fn size_hint_is_unbounded() {
        assert_eq!(sequence().size_hint(), (usize::MAX, None));
    }
}
