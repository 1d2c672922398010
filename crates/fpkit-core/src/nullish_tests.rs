use serde_json::json;

use crate::nullish::{Nullish, is_absent};

#[test]
fn option_absence() {
    assert!(is_absent(&None::<u8>));
    assert!(!is_absent(&Some(0u8)));
    assert_eq!(Some(5).present(), Some(&5));
}

#[test]
fn json_null_is_absent() {
    assert!(is_absent(&json!(null)));
    assert!(!is_absent(&json!(0)));
    assert!(!is_absent(&json!("")));
    assert!(!is_absent(&json!(false)));
}

#[test]
fn primitives_always_present() {
    assert!(!is_absent("a"));
    assert!(!is_absent(&String::new()));
    assert!(!is_absent(&0i32));
    assert!(!is_absent(&f64::NAN));
    assert!(!is_absent(&Vec::<u8>::new()));
}

#[test]
fn references_forward() {
    let slot: Option<&str> = None;
    let by_ref = &&slot;
    assert!(by_ref.is_nullish());

    let word = "x";
    assert_eq!((&word).present(), Some("x"));
}

#[test]
fn containers_always_present() {
    use std::collections::{BTreeMap, HashSet};

    assert!(!is_absent(&(1, "a")));
    assert!(!is_absent(&[0u8; 4]));
    assert!(!is_absent(&b"bytes"[..]));
    assert!(!is_absent(&Box::new(None::<i32>)));
    assert!(!is_absent(&BTreeMap::<u8, u8>::new()));
    assert!(!is_absent(&HashSet::<u8>::new()));
    assert!(!is_absent(&()));
}
