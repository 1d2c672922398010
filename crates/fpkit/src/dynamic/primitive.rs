//! Primitive assertions.

use fpkit_core::Nullish;
use serde_json::Value;

use super::kind::Kind;

/// A value did not have the expected kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Expected type {expected}")]
pub struct DynamicAssertError {
    pub expected: Kind,
}

impl DynamicAssertError {
    pub const NAME: &'static str = "DynamicAssertError";

    pub fn new(expected: Kind) -> Self {
        Self { expected }
    }
}

fn mismatch(expected: Kind, found: &Value) -> DynamicAssertError {
    log::debug!("expected {expected}, found {found}");
    DynamicAssertError::new(expected)
}

pub fn assert_string(x: &Value) -> Result<&str, DynamicAssertError> {
    x.as_str().ok_or_else(|| mismatch(Kind::String, x))
}

/// Any JSON number, widened to `f64`.
pub fn assert_number(x: &Value) -> Result<f64, DynamicAssertError> {
    x.as_f64().ok_or_else(|| mismatch(Kind::Number, x))
}

pub fn assert_bool(x: &Value) -> Result<bool, DynamicAssertError> {
    x.as_bool().ok_or_else(|| mismatch(Kind::Bool, x))
}

/// Succeeds only on a nullish value.
pub fn assert_none(x: &Value) -> Result<(), DynamicAssertError> {
    if x.is_nullish() {
        Ok(())
    } else {
        Err(mismatch(Kind::None, x))
    }
}
