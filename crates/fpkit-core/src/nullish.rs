//! Absence detection shared by every module.
//!
//! A value is *nullish* when observers must treat it as absent: `None`,
//! JSON `null`, or an uninitialized array slot. Anything else is present.
//! `Option`, `Array` and `Dynamic` all decide absence through this trait and
//! nowhere else.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use serde_json::Value as Json;

/// Values that may stand for "no value".
pub trait Nullish {
    /// What observers see when the value is present.
    type Value: ?Sized;

    /// The present value, or `None` if nullish.
    fn present(&self) -> Option<&Self::Value>;

    fn is_nullish(&self) -> bool {
        self.present().is_none()
    }
}

/// Whether `x` must be treated as absent.
///
/// # Examples
/// ```
/// use fpkit_core::is_absent;
/// assert!(is_absent(&None::<i32>));
/// assert!(is_absent(&serde_json::Value::Null));
/// assert!(!is_absent("text"));
/// ```
pub fn is_absent<T: Nullish + ?Sized>(x: &T) -> bool {
    x.is_nullish()
}

impl<T> Nullish for Option<T> {
    type Value = T;

    fn present(&self) -> Option<&T> {
        self.as_ref()
    }
}

impl Nullish for Json {
    type Value = Json;

    fn present(&self) -> Option<&Json> {
        if self.is_null() { None } else { Some(self) }
    }
}

impl<T: Nullish + ?Sized> Nullish for &T {
    type Value = T::Value;

    fn present(&self) -> Option<&T::Value> {
        (**self).present()
    }
}

/// Implement [`Nullish`] for types that are never absent.
///
/// Element types must be `Nullish` to be read through `array::get`. Plain
/// data types opt in with this macro; generic types implement the trait by
/// hand with `type Value = Self`.
///
/// # Examples
/// ```
/// use fpkit_core::{Nullish, always_present};
///
/// struct Point {
///     x: i32,
/// }
///
/// always_present!(Point);
///
/// assert_eq!(Point { x: 1 }.present().map(|p| p.x), Some(1));
/// ```
#[macro_export]
macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Nullish for $ty {
                type Value = $ty;

                fn present(&self) -> ::core::option::Option<&$ty> {
                    ::core::option::Option::Some(self)
                }
            }
        )*
    };
}

always_present!(
    (), str, String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

macro_rules! always_present_generic {
    ($([$($params:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($params)*> Nullish for $ty {
                type Value = $ty;

                fn present(&self) -> Option<&$ty> {
                    Some(self)
                }
            }
        )*
    };
}

always_present_generic!(
    [T] Vec<T>,
    [T] [T],
    [T, const N: usize] [T; N],
    [T: ?Sized] Box<T>,
    [T] VecDeque<T>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
);

macro_rules! tuples_present {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name),+> Nullish for ($($name,)+) {
                type Value = Self;

                fn present(&self) -> Option<&Self> {
                    Some(self)
                }
            }
        )*
    };
}

tuples_present!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);
