//! Numeric property checks: sign and integer/float refinement.

use crate::checks::Verdict;
use crate::value::Value;

pub(crate) fn positive(value: &Value, name: &str) -> Verdict {
    let ok = match value {
        Value::Number(n) => *n > 0.0,
        Value::BigInt(n) => *n > 0,
        _ => false,
    };
    Verdict::from_bool(ok, "positive value", || format!("{name} must be positive!"))
}

pub(crate) fn negative(value: &Value, name: &str) -> Verdict {
    let ok = match value {
        Value::Number(n) => *n < 0.0,
        Value::BigInt(n) => *n < 0,
        _ => false,
    };
    Verdict::from_bool(ok, "negative value", || format!("{name} must be negative!"))
}

pub(crate) fn integer(value: &Value, name: &str) -> Verdict {
    let ok = match value {
        Value::Number(n) => n.is_finite() && n.fract() == 0.0,
        Value::BigInt(_) => true,
        _ => false,
    };
    Verdict::from_bool(ok, "integer value", || format!("{name} must be an integer!"))
}

pub(crate) fn float(value: &Value, name: &str) -> Verdict {
    let ok = match value {
        Value::Number(n) => n.is_finite() && n.fract() != 0.0,
        _ => false,
    };
    Verdict::from_bool(ok, "float value", || format!("{name} must be a float!"))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_checks_exclude_zero() {
        assert!(!positive(&Value::from(0.0), "v").ok);
        assert!(!negative(&Value::from(0.0), "v").ok);
        assert!(positive(&Value::from(0.1), "v").ok);
        assert!(negative(&Value::from(-0.1), "v").ok);
    }

    #[test]
    fn sign_checks_cover_big_ints() {
        assert!(positive(&Value::from(7i128), "v").ok);
        assert!(negative(&Value::from(-7i128), "v").ok);
        assert!(!positive(&Value::from(0i128), "v").ok);
    }

    #[test]
    fn integer_and_float_are_exclusive() {
        assert!(integer(&Value::from(5.0), "v").ok);
        assert!(!float(&Value::from(5.0), "v").ok);
        assert!(float(&Value::from(5.5), "v").ok);
        assert!(!integer(&Value::from(5.5), "v").ok);
    }

    #[test]
    fn non_finite_numbers_are_neither() {
        assert!(!integer(&Value::from(f64::INFINITY), "v").ok);
        assert!(!float(&Value::from(f64::NAN), "v").ok);
    }

    #[test]
    fn failure_messages_name_the_field() {
        assert_eq!(positive(&Value::from(-1.0), "age").message, "age must be positive!");
        assert_eq!(float(&Value::from(3.0), "rate").message, "rate must be a float!");
    }
}
