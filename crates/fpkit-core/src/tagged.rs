//! Serialized `{ "t": ..., "val": ... }` shape of a `Result`.
//!
//! Untyped producers exchange results as an object with a `t` discriminant
//! (`"Ok"` or `"Err"`) and a single `val` payload.

use serde::{Deserialize, Serialize};

use crate::result::ResultTag;

/// A `Result` in its tagged wire shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "t", content = "val")]
pub enum TaggedResult<A, E> {
    Ok(A),
    Err(E),
}

impl<A, E> TaggedResult<A, E> {
    pub fn tag(&self) -> ResultTag {
        match self {
            Self::Ok(_) => ResultTag::Ok,
            Self::Err(_) => ResultTag::Err,
        }
    }

    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }
}

impl<A, E> From<Result<A, E>> for TaggedResult<A, E> {
    fn from(x: Result<A, E>) -> Self {
        match x {
            Ok(a) => Self::Ok(a),
            Err(e) => Self::Err(e),
        }
    }
}

impl<A, E> From<TaggedResult<A, E>> for Result<A, E> {
    fn from(x: TaggedResult<A, E>) -> Self {
        match x {
            TaggedResult::Ok(a) => Ok(a),
            TaggedResult::Err(e) => Err(e),
        }
    }
}
