//! Explicit arity values for the runtime curry engine.
//!
//! Rust cannot introspect how many parameters an arbitrary callable
//! declares, so the engine requires the arity as explicit data alongside
//! the function. Conversions from the primitive numeric types validate
//! eagerly: floats are floor-truncated, and anything that is not a finite,
//! non-negative, representable count is rejected.

use std::fmt;

use super::error::InvalidArityError;

/// The number of arguments a curried function must accumulate before the
/// wrapped function is invoked.
///
/// An `Arity` is always a valid argument count. Construct one directly
/// from a `usize` with [`Arity::new`], or fallibly from any primitive
/// numeric type via `TryFrom`, which applies the validation rules above.
///
/// # Examples
///
/// ```rust
/// use currycomb::curry::Arity;
///
/// assert_eq!(Arity::new(3).get(), 3);
///
/// // Floats are floor-truncated.
/// assert_eq!(Arity::try_from(2.9)?.get(), 2);
///
/// // Invalid values fail fast.
/// assert!(Arity::try_from(-1).is_err());
/// assert!(Arity::try_from(f64::NAN).is_err());
/// # Ok::<(), currycomb::curry::InvalidArityError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arity(usize);

impl Arity {
    /// Creates an arity from an argument count.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    /// Returns the argument count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl TryFrom<usize> for Arity {
    type Error = InvalidArityError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Ok(Self(value))
    }
}

macro_rules! arity_try_from_unsigned {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl TryFrom<$integer> for Arity {
                type Error = InvalidArityError;

                #[allow(clippy::cast_precision_loss)]
                fn try_from(value: $integer) -> Result<Self, Self::Error> {
                    usize::try_from(value)
                        .map(Self)
                        .map_err(|_| InvalidArityError::TooLarge(value as f64))
                }
            }
        )+
    };
}

macro_rules! arity_try_from_signed {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl TryFrom<$integer> for Arity {
                type Error = InvalidArityError;

                #[allow(clippy::cast_precision_loss)]
                fn try_from(value: $integer) -> Result<Self, Self::Error> {
                    if value < 0 {
                        return Err(InvalidArityError::Negative(value as f64));
                    }
                    usize::try_from(value)
                        .map(Self)
                        .map_err(|_| InvalidArityError::TooLarge(value as f64))
                }
            }
        )+
    };
}

arity_try_from_unsigned!(u32, u64);
arity_try_from_signed!(i32, i64);

impl TryFrom<f64> for Arity {
    type Error = InvalidArityError;

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(InvalidArityError::NotFinite(value));
        }
        let floored = value.floor();
        if floored < 0.0 {
            return Err(InvalidArityError::Negative(value));
        }
        if floored >= usize::MAX as f64 {
            return Err(InvalidArityError::TooLarge(value));
        }
        Ok(Self(floored as usize))
    }
}

impl TryFrom<f32> for Arity {
    type Error = InvalidArityError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::try_from(f64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_truncation() {
        assert_eq!(Arity::try_from(3.0), Ok(Arity::new(3)));
        assert_eq!(Arity::try_from(3.9), Ok(Arity::new(3)));
        assert_eq!(Arity::try_from(0.5), Ok(Arity::new(0)));
    }

    #[test]
    fn test_not_finite_rejected() {
        assert_eq!(
            Arity::try_from(f64::INFINITY),
            Err(InvalidArityError::NotFinite(f64::INFINITY))
        );
        assert!(matches!(
            Arity::try_from(f64::NAN),
            Err(InvalidArityError::NotFinite(value)) if value.is_nan()
        ));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(Arity::try_from(-1), Err(InvalidArityError::Negative(-1.0)));
        assert_eq!(
            Arity::try_from(-0.5),
            Err(InvalidArityError::Negative(-0.5))
        );
        assert_eq!(
            Arity::try_from(i64::MIN),
            Err(InvalidArityError::Negative(i64::MIN as f64))
        );
    }

    #[test]
    fn test_integer_conversions() {
        assert_eq!(Arity::try_from(2u32), Ok(Arity::new(2)));
        assert_eq!(Arity::try_from(2i64), Ok(Arity::new(2)));
        assert_eq!(Arity::try_from(0usize), Ok(Arity::new(0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Arity::new(4)), "4");
    }
}
