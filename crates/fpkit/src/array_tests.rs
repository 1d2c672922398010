use serde_json::json;

use crate::array::{self, ArrayRangeError};

#[test]
fn make_fills_with_value() {
    assert_eq!(array::make(3, "a"), vec!["a", "a", "a"]);
    assert!(array::make(0, 1).is_empty());
}

#[test]
fn init_is_uninitialized() {
    let slots = array::init::<String>(3);
    assert_eq!(array::length(&slots), 3);
    assert!(slots.iter().all(Option::is_none));
}

#[test]
fn length() {
    assert_eq!(array::length(&["a", "b"]), 2);
    assert_eq!(array::length::<u8>(&[]), 0);
}

#[test]
fn get_in_range() {
    assert_eq!(array::get(&["a", "b", "c"], 1), Some("b"));
    assert_eq!(array::get(&[1, 2, 3], 0), Some(&1));
}

#[test]
fn get_empty_slots() {
    assert_eq!(array::get(&["a", "b", "c"], 10), None);
    assert_eq!(array::get(&[Some("a"), Some("b"), None], 2), None);
    assert_eq!(array::get(&array::init::<i32>(4), 0), None);
}

#[test]
fn get_json_nulls() {
    let values = json!(["a", null, 3]);
    let values = values.as_array().unwrap();
    assert_eq!(array::get(values, 0), Some(&json!("a")));
    assert_eq!(array::get(values, 1), None);
    assert_eq!(array::get(values, 2), Some(&json!(3)));
}

#[derive(Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

crate::always_present!(Point);

#[test]
fn get_compound_elements() {
    assert_eq!(array::get(&[(1, 2), (3, 4)], 1), Some(&(3, 4)));
    assert_eq!(array::get(&[[1, 2], [3, 4]], 0), Some(&[1, 2]));
    assert_eq!(array::get(&[Box::new(5)], 0), Some(&Box::new(5)));

    let chunks: [&[u8]; 2] = [b"ab", b"c"];
    assert_eq!(array::get(&chunks, 1), Some(&b"c"[..]));
}

#[test]
fn get_user_struct_elements() {
    let points = [Point { x: 0, y: 1 }, Point { x: 2, y: 3 }];
    assert_eq!(array::get(&points, 1), Some(&Point { x: 2, y: 3 }));
    assert_eq!(array::get(&points, 2), None);
    assert_eq!(array::get_exn(&points, 0), Ok(&Point { x: 0, y: 1 }));
    assert_eq!(array::get_exn(&points, 9), Err(ArrayRangeError));

    let slots = [Some(Point { x: 4, y: 5 }), None];
    assert_eq!(array::get(&slots, 0).map(|p| p.x), Some(4));
    assert_eq!(array::get(&slots, 1), None);
}

#[test]
fn get_exn_in_range() {
    assert_eq!(array::get_exn(&["a", "b"], 1), Ok("b"));
    assert_eq!(array::get_exn(&[Some(1), None], 0), Ok(&1));
}

#[test]
fn get_exn_empty_slots() {
    let empty: [&str; 0] = [];
    assert_eq!(array::get_exn(&empty, 10), Err(ArrayRangeError));
    assert_eq!(array::get_exn(&array::init::<u8>(10), 0), Err(ArrayRangeError));
    assert_eq!(array::get_exn(&[Some("a"), None], 1), Err(ArrayRangeError));
}

#[test]
fn get_exn_error_message() {
    let err = array::get_exn(&array::init::<()>(1), 5).unwrap_err();
    insta::assert_snapshot!(err, @"Expected index to be within range");
    assert_eq!(ArrayRangeError::NAME, "ArrayRangeError");
}
