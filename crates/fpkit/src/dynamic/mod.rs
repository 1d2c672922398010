//! Runtime type assertions for untrusted values.
//!
//! Untrusted input is a `serde_json::Value`. The `assert_*` functions narrow
//! it to a Rust primitive or fail with [`DynamicAssertError`] naming the
//! expected [`Kind`]. Records are checked field by field against [`Field`]
//! descriptors and may then be decoded into a typed struct.

mod config;
mod kind;
mod primitive;
mod record;


pub use config::RecordConfig;
pub use kind::{FieldKind, Kind};
pub use primitive::{DynamicAssertError, assert_bool, assert_none, assert_number, assert_string};
pub use record::{
    Field, RecordError, assert_record, assert_record_with, decode_record, decode_record_with,
    field,
};
