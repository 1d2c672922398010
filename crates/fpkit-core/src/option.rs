//! Combinators over `Option`.
//!
//! Every operation taking a callback has a binary form here and a unary form
//! in [`curried`]. Both produce the same result for the same inputs.

use crate::error::OptionGetError;
use crate::nullish::Nullish;

/// Wrap `a` as present.
pub fn some<A>(a: A) -> Option<A> {
    Some(a)
}

/// The canonical absent value.
pub fn none<A>() -> Option<A> {
    None
}

/// Structural equality: same variant and equal payloads.
pub fn equal<A: PartialEq>(x: &Option<A>, y: &Option<A>) -> bool {
    x == y
}

pub fn is_none<A>(x: &Option<A>) -> bool {
    x.is_none()
}

pub fn is_some<A>(x: &Option<A>) -> bool {
    x.is_some()
}

/// Case callbacks for [`match_with`]. Both arms are required fields.
#[derive(Clone, Copy, Debug)]
pub struct OptionCases<S, N> {
    pub some: S,
    pub none: N,
}

/// Exhaustive case analysis. Calls exactly one arm and returns its result.
///
/// # Examples
/// ```
/// use fpkit_core::option::{self, OptionCases};
///
/// let label = option::match_with(Some(3), OptionCases {
///     some: |n| format!("got {n}"),
///     none: || "nothing".to_string(),
/// });
/// assert_eq!(label, "got 3");
/// ```
pub fn match_with<A, R, S, N>(x: Option<A>, cases: OptionCases<S, N>) -> R
where
    S: FnOnce(A) -> R,
    N: FnOnce() -> R,
{
    match x {
        Some(a) => (cases.some)(a),
        None => (cases.none)(),
    }
}

/// The contained value, or `fallback` when absent.
pub fn get<A>(x: Option<A>, fallback: A) -> A {
    x.unwrap_or(fallback)
}

/// The contained value, or [`OptionGetError`] when absent.
pub fn get_exn<A>(x: Option<A>) -> Result<A, OptionGetError> {
    x.ok_or(OptionGetError)
}

pub fn map<A, B, F>(f: F, x: Option<A>) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    match x {
        Some(a) => Some(f(a)),
        None => None,
    }
}

/// Like [`map`], but `f` returns an `Option` which is not re-wrapped.
///
/// Chained binds short-circuit at the first `None`.
pub fn bind<A, B, F>(f: F, x: Option<A>) -> Option<B>
where
    F: FnOnce(A) -> Option<B>,
{
    match x {
        Some(a) => f(a),
        None => None,
    }
}

/// Lift an untyped, possibly null-ish value into an `Option`.
///
/// # Examples
/// ```
/// use fpkit_core::option;
/// use serde_json::json;
///
/// assert_eq!(option::from_nullish(&json!(null)), None);
/// assert_eq!(option::from_nullish(&json!(1)), Some(&json!(1)));
/// ```
pub fn from_nullish<T: Nullish + ?Sized>(x: &T) -> Option<&T::Value> {
    x.present()
}

/// Unary forms awaiting the option.
pub mod curried {
    /// Predicate testing equality against `x`.
    pub fn equal<A: PartialEq>(x: Option<A>) -> impl Fn(&Option<A>) -> bool {
        move |y: &Option<A>| super::equal(&x, y)
    }

    pub fn map<A, B, F>(f: F) -> impl Fn(Option<A>) -> Option<B>
    where
        F: Fn(A) -> B,
    {
        move |x| super::map(&f, x)
    }

    pub fn bind<A, B, F>(f: F) -> impl Fn(Option<A>) -> Option<B>
    where
        F: Fn(A) -> Option<B>,
    {
        move |x| super::bind(&f, x)
    }
}
