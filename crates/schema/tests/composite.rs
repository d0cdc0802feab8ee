//! Object and array recursion: counting rules, index tagging, write-back,
//! and base-schema immutability.

use pretty_assertions::assert_eq;
use provar_schema::prelude::*;

// ============================================================================
// ARRAYS
// ============================================================================

#[test]
fn element_failures_count_but_element_passes_do_not() {
    let s = schema().array(schema().string());
    let report = s
        .test(Value::array([Value::from(1.0), Value::from("x")]), "tags")
        .unwrap();

    // required + array on the parent, plus one failure from element 0; the
    // passing element never touches the parent's counters.
    assert_eq!(report.total_tests, 3);
    assert_eq!(report.passed, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.errors[0].index, Some(0));
    assert_eq!(report.errors[0].name, "tags");
}

#[test]
fn all_passing_elements_leave_only_parent_entries() {
    let s = schema().array(schema().string());
    let report = s.test(Value::array(["any text"]), "tags").unwrap();

    assert!(report.passed_all);
    assert_eq!(report.passed, 2);
    assert_eq!(report.successes[0].method, "required");
    assert_eq!(report.successes[1].method, "array");
}

#[test]
fn nested_array_failures_keep_the_inner_index() {
    let s = schema().array(schema().array(schema().string()));
    let report = s
        .test(
            Value::array([Value::array([Value::from("a"), Value::from(2.0)])]),
            "matrix",
        )
        .unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(report.errors[0].index, Some(1));
}

#[test]
fn element_transformations_are_written_back() {
    let s = schema().array(schema().string().parse_to().number());
    let report = s.test(Value::array(["1", "2"]), "counts").unwrap();

    assert!(report.passed_all);
    assert_eq!(report.value, Value::array([1.0, 2.0]));
}

#[test]
fn item_bounds_apply_to_the_element_count() {
    let s = schema().array(schema().any()).min_items(2);
    let report = s.test(Value::array([1.0]), "pair").unwrap();
    assert!(!report.passed_all);
    assert_eq!(
        report.first_error_message(),
        Some("pair must have at least 2 items!")
    );
}

#[test]
fn non_array_input_fails_the_type_check_without_recursion() {
    let s = schema().array(schema().string());
    let report = s.test("not an array", "tags").unwrap();
    assert_eq!(report.failed, 1);
    assert_eq!(report.errors[0].method, "array");
}

// ============================================================================
// OBJECTS
// ============================================================================

#[test]
fn key_runs_merge_passes_and_failures_into_the_parent() {
    let s = schema()
        .object()
        .field("name", schema().string())
        .field("age", schema().number());
    let report = s
        .test(
            Value::object([("name", Value::from("ada")), ("age", Value::from("old"))]),
            "user",
        )
        .unwrap();

    // parent required + object, name required + string, age required; the
    // age number check fails.
    assert_eq!(report.passed, 5);
    assert_eq!(report.failed, 1);
    assert_eq!(report.errors[0].name, "age");
}

#[test]
fn missing_declared_key_fails_its_own_gate() {
    let s = schema().object().field("email", schema().string().email());
    let report = s.test(Value::object([("other", 1.0)]), "signup").unwrap();

    assert!(!report.passed_all);
    assert_eq!(report.errors[0].name, "email");
    assert_eq!(report.first_error_message(), Some("email is required!"));
}

#[test]
fn key_transformations_are_written_back() {
    let s = schema()
        .object()
        .field("age", schema().string().parse_to().number());
    let report = s.test(Value::object([("age", "36")]), "user").unwrap();

    assert!(report.passed_all);
    assert_eq!(report.value.entry("age"), Some(&Value::Number(36.0)));
}

#[test]
fn absent_not_required_key_is_not_materialized() {
    let s = schema()
        .object()
        .field("bio", schema().string().not_required());
    let report = s.test(Value::object([("name", "ada")]), "user").unwrap();

    assert!(report.passed_all);
    assert_eq!(report.value.entry("bio"), None);
    assert_eq!(report.value.entry("name"), Some(&Value::from("ada")));
}

#[test]
fn objects_nest_inside_arrays_with_index_tagging() {
    let s = schema().array(
        schema()
            .object()
            .field("id", schema().number().positive()),
    );
    let report = s
        .test(
            Value::array([
                Value::object([("id", 1.0)]),
                Value::object([("id", -1.0)]),
            ]),
            "items",
        )
        .unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(report.errors[0].index, Some(1));
    assert_eq!(report.errors[0].name, "id");
}

// ============================================================================
// NULLABILITY AND DERIVATION
// ============================================================================

#[test]
fn nullable_accepts_null_but_not_absent() {
    let s = schema().array(schema().string()).nullable();
    assert!(s.validate(Value::Null));
    assert!(!s.validate(Value::Absent));
}

#[test]
fn not_required_accepts_absent() {
    let s = schema().array(schema().string()).not_required();
    assert!(s.validate(Value::Absent));
}

#[test]
fn deriving_a_variant_never_mutates_the_base() {
    let base = schema().array(schema().any()).min_items(2);
    let relaxed = base.clone().nullable();

    assert!(relaxed.validate(Value::Null));
    // The base still rejects null: the derived nullable never leaked back.
    assert!(!base.validate(Value::Null));
    assert_eq!(base.definition().methods().len(), 2);
}
