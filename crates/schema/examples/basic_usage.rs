//! Validating a signup payload and rendering the report.
//!
//! Run with: cargo run --example basic_usage

use provar_schema::prelude::*;

fn main() {
    let signup = schema()
        .object()
        .field("email", schema().string().email())
        .field("name", schema().string().min_word(2).alias("full name"))
        .field(
            "age",
            schema().string().parse_to().number().positive().integer(),
        )
        .field("bio", schema().string().max_length(160).not_required());

    // A clean payload: the report carries the transformed value, with "age"
    // converted from text to a number.
    let report = signup
        .test(
            Value::object([("email", "ada@lovelace.uk"), ("name", "Ada Lovelace"), ("age", "36")]),
            "signup",
        )
        .expect("no asynchronous hooks in this schema");
    println!("passed: {}", report.passed_all);
    println!("value:  {}", report.value);

    // A broken payload: every check still runs, and the report explains each
    // failure.
    let report = signup
        .test(
            Value::object([("email", "not-an-email"), ("name", "Ada"), ("age", "-1")]),
            "signup",
        )
        .expect("no asynchronous hooks in this schema");
    for error in &report.errors {
        println!("{}: {}", error.name, error.message);
    }

    // Or raise instead of collecting, converting the first failure into an
    // application error.
    let outcome = signup.enforce(
        Value::object([("email", "ada@lovelace.uk"), ("name", "Ada Lovelace")]),
        "signup",
        FailureAction::Raise,
    );
    if let Err(err) = outcome {
        println!("rejected: {err}");
    }
}
