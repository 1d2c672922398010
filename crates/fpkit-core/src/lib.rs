#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data model for fpkit.
//!
//! Two layers:
//! - **Absence layer**: [`Nullish`], the single "has no value" predicate
//! - **Variant layer**: combinators over `Option` and `Result`
//!
//! Both variant types are the native two-case enums. The [`option`] and
//! [`result`] modules add the case analysis, fallback and fallible unwrap
//! operations, each in a binary form and a unary `curried` form.

mod error;
mod nullish;
pub mod option;
pub mod result;
mod tagged;

#[cfg(test)]
mod nullish_tests;
#[cfg(test)]
mod tagged_tests;

pub use error::{OptionGetError, ResultMatchError};
pub use nullish::{Nullish, is_absent};
pub use option::OptionCases;
pub use result::{ResultCases, ResultTag};
pub use tagged::TaggedResult;
