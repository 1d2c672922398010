//! fpkit: `Option`, `Result`, pipes and runtime type assertions.
//!
//! # Example
//!
//! ```
//! use fpkit::{array, dynamic, fun, option};
//! use fpkit::dynamic::{FieldKind, field};
//! use serde_json::json;
//!
//! let names = ["ada", "grace"];
//! let shout = option::map(|s: &str| s.to_uppercase(), array::get(&names, 1));
//! assert_eq!(shout.as_deref(), Some("GRACE"));
//!
//! let nine = fun::pipe(2).chain(|x| x + 1).chain(|x| x * 3).unwrap();
//! assert_eq!(nine, 9);
//!
//! let user = json!({ "id": 1, "name": "foo" });
//! let fields = [field("id", FieldKind::Number), field("name", FieldKind::String)];
//! assert!(dynamic::assert_record(&fields, &user).is_ok());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod array;
pub mod dynamic;
pub mod fun;

#[cfg(test)]
mod array_tests;
#[cfg(test)]
mod lib_tests;

pub use fpkit_core::{
    Nullish, OptionCases, OptionGetError, ResultCases, ResultMatchError, ResultTag,
    TaggedResult, always_present, is_absent, option, result,
};

pub use array::ArrayRangeError;
pub use dynamic::{DynamicAssertError, RecordError};
pub use fun::{Pipe, pipe};

/// Failures of the partial (`get_exn`, `assert_*`) operations.
///
/// `ResultMatchError` is generic over its payload and stays separate;
/// convert it with [`ResultMatchError::into_result`] when needed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    OptionGet(#[from] OptionGetError),

    #[error(transparent)]
    ArrayRange(#[from] ArrayRangeError),

    #[error(transparent)]
    DynamicAssert(#[from] DynamicAssertError),

    #[error(transparent)]
    Record(#[from] RecordError),
}

impl Error {
    /// Name of the underlying error kind, e.g. `"ArrayRangeError"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OptionGet(_) => OptionGetError::NAME,
            Self::ArrayRange(_) => ArrayRangeError::NAME,
            Self::DynamicAssert(_) => DynamicAssertError::NAME,
            Self::Record(e) => e.name(),
        }
    }
}

/// Result type for fpkit operations.
pub type Result<T> = std::result::Result<T, Error>;
