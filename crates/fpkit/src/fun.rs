//! Generic function combinators.

/// One link of a pipeline started by [`pipe`].
///
/// Each [`chain`](Pipe::chain) consumes the link and returns a new one, so the
/// value type may change from link to link. Clone a link to branch from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Pipe<A> {
    value: A,
}

/// Start a pipeline at `value`.
///
/// # Examples
/// ```
/// use fpkit::fun::pipe;
///
/// let out = pipe(2).chain(|x| x + 1).chain(|x| x * 3).unwrap();
/// assert_eq!(out, 9);
/// ```
pub fn pipe<A>(value: A) -> Pipe<A> {
    Pipe { value }
}

impl<A> Pipe<A> {
    pub fn chain<B, F>(self, f: F) -> Pipe<B>
    where
        F: FnOnce(A) -> B,
    {
        pipe(f(self.value))
    }

    /// Borrow the current value without ending the pipeline.
    pub fn value(&self) -> &A {
        &self.value
    }

    /// End the pipeline and return its value.
    pub fn unwrap(self) -> A {
        self.value
    }
}

pub fn identity<T>(x: T) -> T {
    x
}

/// Swap the two arguments of `f`.
pub fn flip<A, B, R, F>(f: F) -> impl Fn(B, A) -> R
where
    F: Fn(A, B) -> R,
{
    move |b: B, a: A| f(a, b)
}

/// Reverse the three arguments of `f`.
pub fn flip3<A, B, C, R, F>(f: F) -> impl Fn(C, B, A) -> R
where
    F: Fn(A, B, C) -> R,
{
    move |c: C, b: B, a: A| f(a, b, c)
}

/// The logical complement of `predicate`.
pub fn negate<A: ?Sized, P>(predicate: P) -> impl Fn(&A) -> bool
where
    P: Fn(&A) -> bool,
{
    move |a: &A| !predicate(a)
}
