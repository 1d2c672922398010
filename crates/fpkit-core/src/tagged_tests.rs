use indoc::indoc;

use crate::result::ResultTag;
use crate::tagged::TaggedResult;

#[test]
fn serializes_tag_and_val() {
    let ok: TaggedResult<i32, String> = Ok(1).into();
    let err: TaggedResult<i32, String> = Err("boom".to_string()).into();

    insta::assert_snapshot!(serde_json::to_string(&ok).unwrap(), @r#"{"t":"Ok","val":1}"#);
    insta::assert_snapshot!(serde_json::to_string(&err).unwrap(), @r#"{"t":"Err","val":"boom"}"#);
}

#[test]
fn deserializes_into_result() {
    let json = indoc! {r#"
        [
            { "t": "Ok", "val": 10 },
            { "t": "Err", "val": "x" },
            { "t": "Ok", "val": 30 }
        ]
    "#};

    let tagged: Vec<TaggedResult<i32, String>> = serde_json::from_str(json).unwrap();
    let tags: Vec<_> = tagged.iter().map(TaggedResult::tag).collect();
    assert_eq!(tags, vec![ResultTag::Ok, ResultTag::Err, ResultTag::Ok]);

    let results: Vec<Result<i32, String>> =
        tagged.into_iter().map(TaggedResult::into_result).collect();
    assert_eq!(results, vec![Ok(10), Err("x".to_string()), Ok(30)]);
}

#[test]
fn rejects_unknown_tag() {
    let res = serde_json::from_str::<TaggedResult<i32, i32>>(r#"{"t":"Maybe","val":1}"#);
    assert!(res.is_err());
}
