//! The serialized report shape is a public contract: camelCase keys, the
//! `"type"` failure label, optional `index`, and the transformed `value`.

use pretty_assertions::assert_eq;
use provar_schema::prelude::*;
use serde_json::json;

#[test]
fn passing_report_shape() {
    let report = schema()
        .string()
        .min_length(2)
        .test("ada", "name")
        .unwrap();
    let out = report.to_json();

    assert_eq!(out["passedAll"], json!(true));
    assert_eq!(out["passed"], json!(3));
    assert_eq!(out["failed"], json!(0));
    assert_eq!(out["totalTests"], json!(3));
    assert_eq!(out["errors"], json!([]));
    assert_eq!(out["value"], json!("ada"));

    let first = &out["successes"][0];
    assert_eq!(first["method"], json!("required"));
    assert_eq!(first["name"], json!("name"));
    assert_eq!(first["expect"], json!("value other than undefined"));
    assert_eq!(first["received"], json!("ada"));
    assert!(first.get("index").is_none());
}

#[test]
fn failing_entry_carries_type_and_message() {
    let report = schema().string().test(Value::Absent, "name").unwrap();
    let out = report.to_json();

    let error = &out["errors"][0];
    assert_eq!(error["method"], json!("required"));
    assert_eq!(error["type"], json!("missing value"));
    assert_eq!(error["message"], json!("name is required!"));

    let report = schema().string().test(1.0, "name").unwrap();
    let error = &report.to_json()["errors"][0];
    assert_eq!(error["type"], json!("invalid value"));
    assert_eq!(error["message"], json!("name must be a string type!"));
}

#[test]
fn index_appears_only_on_element_entries() {
    let report = schema()
        .array(schema().string())
        .test(Value::array([Value::from(1.0)]), "tags")
        .unwrap();
    let out = report.to_json();

    assert_eq!(out["errors"][0]["index"], json!(0));
    assert!(out["successes"][0].get("index").is_none());
}

#[test]
fn value_reflects_every_transformation() {
    let report = schema()
        .object()
        .field("port", schema().string().parse_to().number())
        .field("host", schema().string().default("localhost"))
        .test(Value::object([("port", "8080")]), "config")
        .unwrap();
    let out = report.to_json();

    assert_eq!(out["value"], json!({"port": 8080.0, "host": "localhost"}));
}

#[test]
fn time_field_is_human_readable() {
    let report = schema().string().test("x", "v").unwrap();
    let time = report.to_json()["time"].as_str().unwrap().to_owned();
    assert!(time.contains("s "));
    assert!(time.ends_with("ms"));
}

#[test]
fn counters_always_reconcile() {
    let report = schema()
        .string()
        .min_length(10)
        .email()
        .test("short", "v")
        .unwrap();
    assert_eq!(report.total_tests, report.passed + report.failed);
    assert_eq!(report.successes.len() as u32, report.passed);
    assert_eq!(report.errors.len() as u32, report.failed);
    assert_eq!(report.passed_all, report.failed == 0);
}
