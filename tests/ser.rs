use serde_json::json;
use strict_json_parser::parse;

#[test]
fn value_trees_serialize_through_serde() {
    let parsed = parse(r#"{"id": 7, "ratio": 2.5, "tags": ["a", "b"], "gone": null, "ok": true}"#)
        .unwrap();

    let serialized = serde_json::to_value(&parsed).unwrap();

    assert_eq!(
        serialized,
        json!({
            "id": 7,
            "ratio": 2.5,
            "tags": ["a", "b"],
            "gone": null,
            "ok": true,
        })
    );
}

#[test]
fn numbers_keep_their_tier_through_serde() {
    let parsed = parse(r#"[1, 9223372036854775807, 0.5]"#).unwrap();

    let serialized = serde_json::to_value(&parsed).unwrap();

    assert_eq!(serialized[0], json!(1));
    assert_eq!(serialized[1], json!(9223372036854775807i64));
    assert_eq!(serialized[2], json!(0.5));
}

#[test]
fn parsed_documents_deserialize_into_structs() {
    #[derive(serde::Deserialize)]
    struct Config {
        name: String,
        retries: i32,
    }

    let parsed = parse(r#"{"name": "worker", "retries": 3}"#).unwrap();

    let config: Config = serde_json::from_value(serde_json::to_value(parsed).unwrap()).unwrap();

    assert_eq!(config.name, "worker");
    assert_eq!(config.retries, 3);
}
