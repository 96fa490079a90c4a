//! Function currying utilities.
//!
//! This module provides two independent implementations of currying, one
//! resolved at runtime and one at compile time.
//!
//! # Overview
//!
//! - [`curry`] / [`Curried`]: the runtime engine. A function over a
//!   homogeneous argument sequence is paired with an explicit [`Arity`];
//!   each application step either completes (the threshold is met and the
//!   wrapped function runs) or yields a continuation carrying the
//!   arguments accumulated so far.
//! - [`curry2!`] through [`curry6!`]: the compile-time family. A function
//!   of fixed arity, with argument types that may all differ, becomes
//!   nested single-argument closures.
//!
//! # Choosing between them
//!
//! Use the macros when the arity is known at the call site and you want
//! each argument to keep its own type. Use the engine when the arity is a
//! runtime value, when callers may supply several arguments per step, or
//! when you need to observe how many arguments are still missing.
//!
//! # Examples
//!
//! ## Runtime engine
//!
//! ```
//! use currycomb::curry::curry;
//!
//! let join = curry(|parts: Vec<String>| parts.join("-"), 3)?;
//!
//! let chain = join.call("a".to_string());
//! let chain = chain.partial().unwrap().apply(["b".to_string(), "c".to_string()]);
//!
//! assert_eq!(chain.complete(), Some("a-b-c".to_string()));
//! # Ok::<(), currycomb::curry::InvalidArityError>(())
//! ```
//!
//! ## Compile-time macros
//!
//! ```
//! use currycomb::curry2;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let curried = curry2!(add);
//! let add_five = curried(5);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! # Mathematical Background
//!
//! Currying rewrites a multi-argument function as a sequence of
//! single-argument functions:
//!
//! ```text
//! curry(f)(a)(b)(c) = f(a, b, c)
//! ```
//!
//! Partial application is the intermediate state: supplying fewer
//! arguments than the arity yields a new function awaiting the remainder.
//! The runtime engine generalizes the left-hand side to any partition of
//! the argument sequence:
//!
//! ```text
//! curry(f, 3)(a, b)(c) = curry(f, 3)(a)(b)(c) = f(a, b, c)
//! ```
//!
//! # Laws
//!
//! - **Equivalence**: fully applying a curried function, across however
//!   many steps, equals calling the original function with the
//!   concatenated arguments.
//! - **Isolation**: continuations derived from the same wrapper never
//!   share accumulated state; applying one chain does not affect another.
//! - **Excess pass-through**: arguments beyond the arity are forwarded to
//!   the wrapped function, never truncated.

mod arity;
mod curried;
mod curry_macro;
mod error;

pub use arity::Arity;
pub use curried::{Application, Curried, curry};
pub use error::InvalidArityError;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::curry5;
pub use crate::curry6;
