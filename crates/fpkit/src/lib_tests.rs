use serde_json::json;

use crate::dynamic::{FieldKind, field};
use crate::{Error, array, dynamic, option};

fn first_name(names: &[&str]) -> crate::Result<String> {
    let name = array::get_exn(names, 0)?;
    Ok(name.to_string())
}

fn user_id(value: &serde_json::Value) -> crate::Result<f64> {
    dynamic::assert_record(&[field("id", FieldKind::Number)], value)?;
    Ok(dynamic::assert_number(&value["id"])?)
}

#[test]
fn errors_convert_with_question_mark() {
    assert_eq!(first_name(&["ada"]).unwrap(), "ada");

    let err = first_name(&[]).unwrap_err();
    assert!(matches!(err, Error::ArrayRange(_)));
    assert_eq!(err.name(), "ArrayRangeError");

    assert_eq!(user_id(&json!({ "id": 3 })).unwrap(), 3.0);
    let err = user_id(&json!({ "id": "3" })).unwrap_err();
    assert_eq!(err.name(), "DynamicAssertError");
    insta::assert_snapshot!(err, @"Expected type number");
}

#[test]
fn option_error_converts() {
    let err: Error = option::get_exn(None::<u8>).unwrap_err().into();
    assert_eq!(err.name(), "OptionGetError");
}

#[test]
fn record_error_keeps_its_name() {
    let err: Error = dynamic::decode_record::<u8>(&[], &json!("x"))
        .unwrap_err()
        .into();
    assert_eq!(err.name(), "RecordDecodeError");
}
