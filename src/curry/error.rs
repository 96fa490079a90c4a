//! Error types for curried-function construction.
//!
//! Construction is the only fallible step in this module: the wrapped
//! function runs unguarded once the arity threshold is met, and any error
//! it raises propagates to the caller untouched.

use std::fmt;

/// Represents an arity value that cannot be used to construct a curried
/// function.
///
/// Arity validation happens once, at construction time, before any
/// application logic runs. These are programmer errors, not transient
/// conditions; nothing is retried and no partial wrapper is produced.
///
/// The offending value is carried as an `f64` for diagnostics regardless
/// of the numeric type the caller supplied.
///
/// # Examples
///
/// ```rust
/// use currycomb::curry::{Arity, InvalidArityError};
///
/// let error = Arity::try_from(-2).unwrap_err();
/// assert_eq!(error, InvalidArityError::Negative(-2.0));
/// assert_eq!(
///     format!("{}", error),
///     "invalid arity: expected a non-negative count, got -2"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidArityError {
    /// The supplied arity was NaN or infinite.
    NotFinite(f64),
    /// The supplied arity was negative.
    Negative(f64),
    /// The supplied arity exceeds what an argument count can represent.
    TooLarge(f64),
}

impl fmt::Display for InvalidArityError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite(value) => {
                write!(formatter, "invalid arity: expected a finite number, got {value}")
            }
            Self::Negative(value) => {
                write!(formatter, "invalid arity: expected a non-negative count, got {value}")
            }
            Self::TooLarge(value) => {
                write!(formatter, "invalid arity: {value} does not fit an argument count")
            }
        }
    }
}

impl std::error::Error for InvalidArityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_finite_display() {
        let error = InvalidArityError::NotFinite(f64::NAN);
        assert_eq!(
            format!("{error}"),
            "invalid arity: expected a finite number, got NaN"
        );
    }

    #[test]
    fn test_negative_display() {
        let error = InvalidArityError::Negative(-3.0);
        assert_eq!(
            format!("{error}"),
            "invalid arity: expected a non-negative count, got -3"
        );
    }

    #[test]
    fn test_too_large_display() {
        let error = InvalidArityError::TooLarge(2e19);
        assert_eq!(
            format!("{error}"),
            "invalid arity: 20000000000000000000 does not fit an argument count"
        );
    }
}
