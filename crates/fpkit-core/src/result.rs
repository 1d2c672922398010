//! Combinators over `Result`.
//!
//! Callbacks passed to [`map`] and [`bind`] only ever see `Ok` payloads;
//! an `Err` flows through untouched. Unary forms live in [`curried`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ResultMatchError;

/// Discriminant of a `Result`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultTag {
    Ok,
    Err,
}

impl ResultTag {
    pub fn name(self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::Err => "Err",
        }
    }
}

impl fmt::Display for ResultTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn ok<A, E>(a: A) -> Result<A, E> {
    Ok(a)
}

pub fn err<A, E>(e: E) -> Result<A, E> {
    Err(e)
}

pub fn tag<A, E>(x: &Result<A, E>) -> ResultTag {
    match x {
        Ok(_) => ResultTag::Ok,
        Err(_) => ResultTag::Err,
    }
}

pub fn is_ok<A, E>(x: &Result<A, E>) -> bool {
    x.is_ok()
}

pub fn is_err<A, E>(x: &Result<A, E>) -> bool {
    x.is_err()
}

/// Case callbacks for [`match_with`]. Both arms are required fields.
#[derive(Clone, Copy, Debug)]
pub struct ResultCases<O, E> {
    pub ok: O,
    pub err: E,
}

/// Exhaustive case analysis. Calls exactly one arm and returns its result.
pub fn match_with<A, E, R, OkF, ErrF>(x: Result<A, E>, cases: ResultCases<OkF, ErrF>) -> R
where
    OkF: FnOnce(A) -> R,
    ErrF: FnOnce(E) -> R,
{
    match x {
        Ok(a) => (cases.ok)(a),
        Err(e) => (cases.err)(e),
    }
}

/// The `Ok` payload, or `fallback` for `Err`.
pub fn get<A, E>(x: Result<A, E>, fallback: A) -> A {
    x.unwrap_or(fallback)
}

/// The `Ok` payload, or [`ResultMatchError`] carrying the `Err` payload.
pub fn get_exn<A, E>(x: Result<A, E>) -> Result<A, ResultMatchError<E>> {
    x.map_err(ResultMatchError::new)
}

/// Split results into `(oks, errs)`, keeping order and wrappers.
///
/// # Examples
/// ```
/// use fpkit_core::result;
///
/// let (oks, errs) = result::partition(vec![Ok(10), Err("x"), Ok(30)]);
/// assert_eq!(oks, vec![Ok(10), Ok(30)]);
/// assert_eq!(errs, vec![Err("x")]);
/// ```
pub fn partition<A, E, I>(results: I) -> (Vec<Result<A, E>>, Vec<Result<A, E>>)
where
    I: IntoIterator<Item = Result<A, E>>,
{
    results.into_iter().partition(Result::is_ok)
}

pub fn map<A, B, E, F>(f: F, x: Result<A, E>) -> Result<B, E>
where
    F: FnOnce(A) -> B,
{
    match x {
        Ok(a) => Ok(f(a)),
        Err(e) => Err(e),
    }
}

/// Like [`map`], but `f` returns a `Result` which is not re-wrapped.
pub fn bind<A, B, E, F>(f: F, x: Result<A, E>) -> Result<B, E>
where
    F: FnOnce(A) -> Result<B, E>,
{
    match x {
        Ok(a) => f(a),
        Err(e) => Err(e),
    }
}

pub fn map_err<A, E, G, F>(f: F, x: Result<A, E>) -> Result<A, G>
where
    F: FnOnce(E) -> G,
{
    match x {
        Ok(a) => Ok(a),
        Err(e) => Err(f(e)),
    }
}

/// Run `f` on the `Ok` payload. No-op on `Err`.
pub fn iter<A, E, F>(f: F, x: &Result<A, E>)
where
    F: FnOnce(&A),
{
    if let Ok(a) = x {
        f(a);
    }
}

/// Run `f` on the `Err` payload. No-op on `Ok`.
pub fn iter_err<A, E, F>(f: F, x: &Result<A, E>)
where
    F: FnOnce(&E),
{
    if let Err(e) = x {
        f(e);
    }
}

/// Unary forms awaiting the result.
///
/// The effect forms accept `FnMut` so callbacks may accumulate state.
pub mod curried {
    pub fn map<A, B, E, F>(f: F) -> impl Fn(Result<A, E>) -> Result<B, E>
    where
        F: Fn(A) -> B,
    {
        move |x| super::map(&f, x)
    }

    pub fn bind<A, B, E, F>(f: F) -> impl Fn(Result<A, E>) -> Result<B, E>
    where
        F: Fn(A) -> Result<B, E>,
    {
        move |x| super::bind(&f, x)
    }

    pub fn iter<A, E, F>(mut f: F) -> impl FnMut(&Result<A, E>)
    where
        F: FnMut(&A),
    {
        move |x: &Result<A, E>| super::iter(&mut f, x)
    }

    pub fn iter_err<A, E, F>(mut f: F) -> impl FnMut(&Result<A, E>)
    where
        F: FnMut(&E),
    {
        move |x: &Result<A, E>| super::iter_err(&mut f, x)
    }
}
