//! Errors raised by the fallible unwrap operations.

use std::convert::Infallible;

use crate::tagged::TaggedResult;

/// `option::get_exn` was called on `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Expected Some(a) but found None")]
pub struct OptionGetError;

impl OptionGetError {
    pub const NAME: &'static str = "OptionGetError";
}

/// `result::get_exn` was called on `Err`.
///
/// `data` is the offending `Err` value itself; [`into_data`](Self::into_data)
/// unwraps its payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Expected a result of type Ok(a) but got Err(b)")]
pub struct ResultMatchError<E> {
    pub data: Result<Infallible, E>,
}

impl<E> ResultMatchError<E> {
    pub const NAME: &'static str = "ResultMatchError";

    /// Wrap the error payload of the offending result.
    pub fn new(payload: E) -> Self {
        Self { data: Err(payload) }
    }

    pub fn payload(&self) -> &E {
        match &self.data {
            Ok(never) => match *never {},
            Err(e) => e,
        }
    }

    pub fn into_data(self) -> E {
        match self.data {
            Ok(never) => match never {},
            Err(e) => e,
        }
    }

    /// Rebuild the offending `Err` value at any `Ok` type.
    pub fn into_result<A>(self) -> Result<A, E> {
        Err(self.into_data())
    }

    /// The offending value in its `{"t":"Err","val":...}` wire shape.
    pub fn to_tagged(&self) -> TaggedResult<(), &E> {
        TaggedResult::Err(self.payload())
    }
}
