//! The compile-time curry macro family.
//!
//! [`curry2!`] through [`curry6!`] convert a function of fixed arity into
//! nested single-argument closures. Unlike the runtime engine, each
//! argument position keeps its own type and the arity is fixed by the
//! macro chosen.
//!
//! # Design Decisions
//!
//! The expansion shares the function and every bound argument via
//! `std::rc::Rc`, so:
//!
//! - The curried function can be called multiple times
//! - Partial applications are reusable
//! - Argument types that don't implement `Copy` work correctly
//!
//! All arities expand through one recursive step macro; the per-arity
//! macros only name the argument positions. The returned closures
//! implement `Fn`.

/// One level of curry expansion. Not part of the public API.
///
/// Intermediate arguments are moved into an `Rc` and re-shared with each
/// deeper closure; the innermost level unwraps (or clones) them and calls
/// the function.
#[doc(hidden)]
#[macro_export]
macro_rules! __curry_step {
    ($function:ident; [$($bound:ident),*]; $head:ident, $($rest:ident),+) => {
        move |$head| {
            let $function = ::std::rc::Rc::clone(&$function);
            $(let $bound = ::std::rc::Rc::clone(&$bound);)*
            let $head = ::std::rc::Rc::new($head);
            $crate::__curry_step!($function; [$($bound,)* $head]; $($rest),+)
        }
    };
    ($function:ident; [$($bound:ident),*]; $last:ident) => {
        move |$last| {
            $function(
                $(::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&$bound)),)*
                $last,
            )
        }
    };
}

/// Converts a 2-argument function into a curried form.
///
/// Given `f(a, b) -> c`, returns a closure that takes `a` and returns
/// another closure that takes `b` and returns `c`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ## Basic currying
///
/// ```
/// use currycomb::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried_add = curry2!(add);
/// assert_eq!(curried_add(5)(3), 8);
/// ```
///
/// ## Partial application
///
/// ```
/// use currycomb::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
///
/// ## Rejected at compile time
///
/// Intermediate arguments must implement [`Clone`]:
///
/// ```compile_fail
/// struct Token;
///
/// fn combine(token: Token, label: &str) -> String {
///     let _ = token;
///     label.to_string()
/// }
///
/// let curried = currycomb::curry2!(combine);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry_step!(function; []; first, second)
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// Given `f(a, b, c) -> d`, returns nested closures that take one
/// argument at a time.
///
/// # Examples
///
/// ```
/// use currycomb::curry3;
///
/// fn volume(width: f64, height: f64, depth: f64) -> f64 {
///     width * height * depth
/// }
///
/// let curried = curry3!(volume);
/// let with_width = curried(2.0);
/// let with_width_height = with_width(3.0);
///
/// assert!((with_width_height(4.0) - 24.0).abs() < f64::EPSILON);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry_step!(function; []; first, second, third)
    }};
}

/// Converts a 4-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use currycomb::curry4;
///
/// fn sum_four(a: i32, b: i32, c: i32, d: i32) -> i32 { a + b + c + d }
///
/// let curried = curry4!(sum_four);
/// assert_eq!(curried(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry_step!(function; []; first, second, third, fourth)
    }};
}

/// Converts a 5-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use currycomb::curry5;
///
/// fn sum_five(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
///     a + b + c + d + e
/// }
///
/// let curried = curry5!(sum_five);
/// assert_eq!(curried(1)(2)(3)(4)(5), 15);
/// ```
#[macro_export]
macro_rules! curry5 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry_step!(function; []; first, second, third, fourth, fifth)
    }};
}

/// Converts a 6-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use currycomb::curry6;
///
/// fn sum_six(a: i32, b: i32, c: i32, d: i32, e: i32, f: i32) -> i32 {
///     a + b + c + d + e + f
/// }
///
/// let curried = curry6!(sum_six);
/// assert_eq!(curried(1)(2)(3)(4)(5)(6), 21);
/// ```
#[macro_export]
macro_rules! curry6 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry_step!(function; []; first, second, third, fourth, fifth, sixth)
    }};
}
