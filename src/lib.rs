//! # currycomb
//!
//! Function currying for Rust.
//!
//! ## Overview
//!
//! Currying transforms a function of N arguments into a chain of functions
//! that can be applied a few arguments at a time. This crate provides two
//! independent renditions of that idea:
//!
//! - **Runtime engine**: [`curry`](curry::curry) wraps a function together
//!   with an explicit [`Arity`](curry::Arity) and accumulates arguments
//!   across calls until the arity is met. Argument types are homogeneous
//!   and the arity is a runtime value.
//! - **Compile-time macros**: [`curry2!`] through [`curry6!`] convert a
//!   fixed-arity function with heterogeneous argument types into nested
//!   single-argument closures.
//!
//! ## Example
//!
//! ```rust
//! use currycomb::prelude::*;
//!
//! let sum = curry(|arguments: Vec<i32>| arguments.iter().sum::<i32>(), 3)?;
//!
//! let result = sum
//!     .call(1)
//!     .partial()
//!     .and_then(|continuation| continuation.apply([2, 3]).complete());
//!
//! assert_eq!(result, Some(6));
//! # Ok::<(), currycomb::curry::InvalidArityError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use currycomb::prelude::*;
/// ```
pub mod prelude {
    pub use crate::curry::*;
}

pub mod curry;

#[cfg(test)]
mod tests {
    use crate::curry::{Arity, Curried};

    #[test]
    fn library_smoke() {
        let add = Curried::new(
            |arguments: Vec<i32>| arguments.into_iter().sum::<i32>(),
            Arity::new(2),
        );
        let result = add.call(1).partial().map(|next| next.call(2).complete());
        assert_eq!(result, Some(Some(3)));
    }
}
