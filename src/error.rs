//! Error types for the prime sequence API.
//!
//! This module provides the single error kind that can occur when working
//! with the derived views: supplying a negative count, size, or index where
//! a non-negative value is required. All other inputs succeed
//! deterministically, so no further error states exist.

/// Represents a negative argument passed where a non-negative one is required.
///
/// This error is raised synchronously, before any element of the sequence is
/// produced, so a failed call never yields partial output.
///
/// # Examples
///
/// ```rust
/// use primestream::error::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     operation: "sum",
///     argument: "n",
///     value: -3,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "sum: n must be non-negative, got -3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The name of the operation that rejected the argument.
    pub operation: &'static str,
    /// The name of the offending parameter.
    pub argument: &'static str,
    /// The value that was supplied.
    pub value: i64,
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: {} must be non-negative, got {}",
            self.operation, self.argument, self.value
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_names_operation_and_argument() {
        let error = InvalidArgumentError {
            operation: "list",
            argument: "n",
            value: -1,
        };
        assert_eq!(error.to_string(), "list: n must be non-negative, got -1");
    }

    #[rstest]
    fn implements_std_error() {
        let error = InvalidArgumentError {
            operation: "sequence_of",
            argument: "size",
            value: -42,
        };
        let _: &dyn std::error::Error = &error;
    }
}
