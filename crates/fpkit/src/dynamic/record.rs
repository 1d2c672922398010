//! Field-by-field record assertions.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::config::RecordConfig;
use super::kind::FieldKind;
use super::primitive::{DynamicAssertError, assert_bool, assert_number, assert_string};

static NULL: Value = Value::Null;

/// A record field name paired with its declared kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub key: String,
    pub kind: FieldKind,
}

pub fn field(key: impl Into<String>, kind: FieldKind) -> Field {
    Field {
        key: key.into(),
        kind,
    }
}

/// Failure of [`decode_record`].
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    Assert(#[from] DynamicAssertError),

    #[error("record does not match the target shape: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RecordError {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Assert(_) => DynamicAssertError::NAME,
            Self::Decode(_) => "RecordDecodeError",
        }
    }
}

/// Check every field of `obj` against `fields` with the default config.
///
/// Stops at the first mismatch. Missing fields, and every field of a
/// non-object value, read as `null`.
///
/// # Examples
/// ```
/// use fpkit::dynamic::{FieldKind, assert_record, field};
/// use serde_json::json;
///
/// let fields = [field("id", FieldKind::Number), field("name", FieldKind::String)];
/// assert!(assert_record(&fields, &json!({ "id": 1, "name": "foo" })).is_ok());
///
/// let err = assert_record(&fields, &json!({ "id": "10", "name": "foo" })).unwrap_err();
/// assert_eq!(err.to_string(), "Expected type number");
/// ```
pub fn assert_record<'a>(
    fields: &[Field],
    obj: &'a Value,
) -> Result<&'a Value, DynamicAssertError> {
    assert_record_with(&RecordConfig::default(), fields, obj)
}

pub fn assert_record_with<'a>(
    config: &RecordConfig,
    fields: &[Field],
    obj: &'a Value,
) -> Result<&'a Value, DynamicAssertError> {
    for Field { key, kind } in fields {
        let value = obj.get(key.as_str()).unwrap_or(&NULL);
        log::trace!("checking field `{key}` as {kind}");
        match kind {
            FieldKind::String => {
                assert_string(value)?;
            }
            FieldKind::Number => {
                assert_number(value)?;
            }
            FieldKind::Boolean if config.check_booleans => {
                assert_bool(value)?;
            }
            FieldKind::Boolean => {}
        }
    }
    Ok(obj)
}

/// Check `obj` with [`assert_record`], then deserialize it into `T`.
pub fn decode_record<T: DeserializeOwned>(
    fields: &[Field],
    obj: &Value,
) -> Result<T, RecordError> {
    decode_record_with(&RecordConfig::default(), fields, obj)
}

pub fn decode_record_with<T: DeserializeOwned>(
    config: &RecordConfig,
    fields: &[Field],
    obj: &Value,
) -> Result<T, RecordError> {
    let obj = assert_record_with(config, fields, obj)?;
    T::deserialize(obj).map_err(|e| {
        log::debug!("record decode failed: {e}");
        RecordError::Decode(e)
    })
}
