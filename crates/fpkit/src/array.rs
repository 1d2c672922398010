//! Indexed access that reports absence instead of panicking.
//!
//! A slot is empty when it is out of range, uninitialized (see [`init`]) or
//! holds a nullish value. [`get`] and [`get_exn`] treat all three the same.

use fpkit_core::Nullish;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Expected index to be within range")]
pub struct ArrayRangeError;

impl ArrayRangeError {
    pub const NAME: &'static str = "ArrayRangeError";
}

/// `len` copies of `x`.
pub fn make<T: Clone>(len: usize, x: T) -> Vec<T> {
    vec![x; len]
}

/// `len` uninitialized slots.
pub fn init<T>(len: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(len).collect()
}

pub fn length<T>(x: &[T]) -> usize {
    x.len()
}

/// The value at `i`, or `None` if the slot is empty.
///
/// # Examples
/// ```
/// use fpkit::array;
///
/// assert_eq!(array::get(&["a", "b", "c"], 1), Some("b"));
/// assert_eq!(array::get(&["a", "b", "c"], 10), None);
/// assert_eq!(array::get(&[Some("a"), Some("b"), None], 2), None);
/// ```
pub fn get<T: Nullish>(x: &[T], i: usize) -> Option<&T::Value> {
    x.get(i).and_then(Nullish::present)
}

/// The value at `i`, or [`ArrayRangeError`] if the slot is empty.
///
/// Prefer [`get`] when empty slots are expected.
pub fn get_exn<T: Nullish>(x: &[T], i: usize) -> Result<&T::Value, ArrayRangeError> {
    get(x, i).ok_or_else(|| {
        log::debug!("array slot {i} is empty (length {})", x.len());
        ArrayRangeError
    })
}
