//! The runtime curry engine.
//!
//! A [`Curried`] value pairs a function over a homogeneous argument
//! sequence with an explicit [`Arity`] and an owned snapshot of the
//! arguments accumulated so far. Applying it never mutates the wrapper:
//! each step produces either the final result or a fresh continuation
//! owning an extended snapshot.
//!
//! # Design Decisions
//!
//! The wrapped function is held behind `std::rc::Rc` so the wrapper and
//! all continuations derived from it share one function value. This
//! allows:
//!
//! - A wrapper to seed any number of independent chains
//! - Continuations to be cloned and re-applied freely
//! - Functions that don't implement `Copy` to work correctly
//!
//! Accumulated arguments are never shared: every continuation owns its
//! own snapshot (a `SmallVec` that stays inline for short argument
//! lists), which is what guarantees chains cannot contaminate each other.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use super::arity::Arity;
use super::error::InvalidArityError;

/// Inline capacity matching the arities the compile-time macros cover.
type Snapshot<A> = SmallVec<[A; 6]>;

/// A function wrapped for currying, together with the arguments
/// accumulated so far along one chain.
///
/// The wrapped function receives the full accumulated argument list as a
/// `Vec` once the arity threshold is met. Arguments beyond the arity are
/// forwarded as-is, never truncated.
///
/// `Curried` is `Clone` whenever the argument type is: the function is
/// shared, the snapshot is copied. Applying through `&self` means a
/// wrapper can seed any number of chains and every continuation remains
/// reusable.
///
/// # Examples
///
/// ```rust
/// use currycomb::curry::curry;
///
/// let sum = curry(|arguments: Vec<i32>| arguments.iter().sum::<i32>(), 3)?;
///
/// let partial = sum.apply([1, 2]).partial().unwrap();
/// assert_eq!(partial.remaining(), 1);
/// assert_eq!(partial.call(3).complete(), Some(6));
///
/// // The continuation is reusable; the chain above did not consume it.
/// assert_eq!(partial.call(10).complete(), Some(13));
/// # Ok::<(), currycomb::curry::InvalidArityError>(())
/// ```
pub struct Curried<A, R> {
    function: Rc<dyn Fn(Vec<A>) -> R>,
    arity: Arity,
    applied: Snapshot<A>,
}

/// The outcome of one application step: either the wrapped function ran,
/// or the chain continues.
///
/// `Complete` is terminal; a finished chain is not resumed. Starting over
/// means applying the original wrapper (or any retained continuation)
/// again, which roots a brand-new independent chain.
///
/// # Examples
///
/// ```rust
/// use currycomb::curry::curry;
///
/// let first = curry(|arguments: Vec<u8>| arguments[0], 1)?;
///
/// assert!(first.apply([]).is_partial());
/// assert!(first.call(7).is_complete());
///
/// let described = first.call(7).fold(
///     |value| format!("done: {value}"),
///     |continuation| format!("waiting for {}", continuation.remaining()),
/// );
/// assert_eq!(described, "done: 7");
/// # Ok::<(), currycomb::curry::InvalidArityError>(())
/// ```
pub enum Application<A, R> {
    /// The arity threshold was met and the wrapped function produced a
    /// result.
    Complete(R),
    /// The chain is still accumulating; this continuation owns the
    /// arguments supplied so far.
    Partial(Curried<A, R>),
}

/// Wraps `function` for currying with the given arity.
///
/// The arity may be supplied as any primitive numeric type; validation is
/// eager and construction fails with [`InvalidArityError`] before any
/// application logic exists. Floats are floor-truncated; NaN, infinite,
/// and negative values are rejected. See [`Arity`] for the exact rules.
///
/// The wrapped function receives the accumulated arguments as a `Vec`
/// once enough of them have been supplied, across however many calls.
///
/// # Errors
///
/// Returns [`InvalidArityError`] when `arity` is not a usable argument
/// count.
///
/// # Examples
///
/// ```rust
/// use currycomb::curry::curry;
///
/// let sum = curry(|arguments: Vec<i32>| arguments.iter().sum::<i32>(), 3)?;
///
/// let step = sum.call(1).partial().unwrap();
/// let step = step.call(2).partial().unwrap();
/// assert_eq!(step.call(3).complete(), Some(6));
/// # Ok::<(), currycomb::curry::InvalidArityError>(())
/// ```
///
/// ## Arity zero completes immediately
///
/// ```rust
/// use currycomb::curry::curry;
///
/// let constant = curry(|_: Vec<i32>| 42, 0)?;
/// assert_eq!(constant.apply([]).complete(), Some(42));
/// # Ok::<(), currycomb::curry::InvalidArityError>(())
/// ```
///
/// ## Rejected at compile time
///
/// The target must be callable:
///
/// ```compile_fail
/// let _ = currycomb::curry::curry(42, 2);
/// ```
///
/// and the arity must be a numeric type:
///
/// ```compile_fail
/// let sum = |arguments: Vec<i32>| arguments.len();
/// let _ = currycomb::curry::curry(sum, "three");
/// ```
pub fn curry<A, R, F, N>(function: F, arity: N) -> Result<Curried<A, R>, InvalidArityError>
where
    F: Fn(Vec<A>) -> R + 'static,
    N: TryInto<Arity, Error = InvalidArityError>,
{
    Ok(Curried::new(function, arity.try_into()?))
}

impl<A, R> Curried<A, R> {
    /// Wraps `function` with an already-validated arity.
    ///
    /// The wrapper starts with an empty snapshot; it is the root from
    /// which independent chains are applied.
    pub fn new<F>(function: F, arity: Arity) -> Self
    where
        F: Fn(Vec<A>) -> R + 'static,
    {
        Self {
            function: Rc::new(function),
            arity,
            applied: Snapshot::new(),
        }
    }

    /// Returns the arity threshold this wrapper was constructed with.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity.get()
    }

    /// Returns how many arguments this chain has accumulated so far.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.applied.len()
    }

    /// Returns how many further arguments are needed before the wrapped
    /// function runs.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.arity.get().saturating_sub(self.applied.len())
    }
}

impl<A: Clone, R> Curried<A, R> {
    /// Performs one application step with any number of arguments.
    ///
    /// The supplied arguments are appended to a copy of this chain's
    /// snapshot; `self` is left untouched. If the combined count reaches
    /// the arity, the wrapped function runs with the full combined list
    /// (excess arguments included) and the step is
    /// [`Complete`](Application::Complete). Otherwise the step is
    /// [`Partial`](Application::Partial), carrying a continuation that
    /// owns the combined snapshot.
    ///
    /// Supplying no arguments is allowed and never completes a chain
    /// whose arity is positive; it yields an equivalent continuation.
    pub fn apply<I>(&self, arguments: I) -> Application<A, R>
    where
        I: IntoIterator<Item = A>,
    {
        let mut combined = self.applied.clone();
        combined.extend(arguments);

        if combined.len() >= self.arity.get() {
            return Application::Complete((self.function)(combined.into_vec()));
        }

        Application::Partial(Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            applied: combined,
        })
    }

    /// Performs one application step with a single argument.
    pub fn call(&self, argument: A) -> Application<A, R> {
        self.apply(std::iter::once(argument))
    }
}

impl<A: Clone, R> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            applied: self.applied.clone(),
        }
    }
}

impl<A, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity.get())
            .field("applied", &self.applied.len())
            .finish_non_exhaustive()
    }
}

impl<A, R> Application<A, R> {
    /// Returns `true` if the wrapped function has run.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns `true` if the chain is still accumulating.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(_))
    }

    /// Extracts the result, if the wrapped function has run.
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Extracts the continuation, if the chain is still accumulating.
    pub fn partial(self) -> Option<Curried<A, R>> {
        match self {
            Self::Complete(_) => None,
            Self::Partial(continuation) => Some(continuation),
        }
    }

    /// Collapses both cases into a single value.
    pub fn fold<T, C, P>(self, on_complete: C, on_partial: P) -> T
    where
        C: FnOnce(R) -> T,
        P: FnOnce(Curried<A, R>) -> T,
    {
        match self {
            Self::Complete(result) => on_complete(result),
            Self::Partial(continuation) => on_partial(continuation),
        }
    }
}

impl<A, R: fmt::Debug> fmt::Debug for Application<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete(result) => formatter.debug_tuple("Complete").field(result).finish(),
            Self::Partial(continuation) => {
                formatter.debug_tuple("Partial").field(continuation).finish()
            }
        }
    }
}
