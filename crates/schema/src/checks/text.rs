//! Text format checks: word count, email, UUID, pattern, and time tokens.

use std::sync::LazyLock;

use regex::Regex;

use crate::checks::Verdict;
use crate::definition::TimeFormat;
use crate::value::Value;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

fn as_text(value: &Value) -> Option<&str> {
    match value {
        Value::Text(s) => Some(s),
        _ => None,
    }
}

pub(crate) fn min_word(count: usize, value: &Value, name: &str) -> Verdict {
    let ok = as_text(value).is_some_and(|s| s.split_whitespace().count() >= count);
    Verdict::from_bool(ok, format!("value with at least {count} words"), || {
        format!("{name} must have at least {count} words!")
    })
}

pub(crate) fn email(value: &Value, name: &str) -> Verdict {
    let ok = as_text(value).is_some_and(|s| EMAIL_REGEX.is_match(s));
    Verdict::from_bool(ok, "valid email format", || {
        format!("{name} must be a valid email!")
    })
}

pub(crate) fn uuid(value: &Value, name: &str) -> Verdict {
    let ok = as_text(value).is_some_and(is_uuid);
    Verdict::from_bool(ok, "valid UUID format", || {
        format!("{name} must be a valid UUID!")
    })
}

pub(crate) fn regex_match(pattern: &Regex, value: &Value, name: &str) -> Verdict {
    let ok = as_text(value).is_some_and(|s| pattern.is_match(s));
    Verdict::from_bool(ok, format!("value matching pattern /{pattern}/"), || {
        format!("{name} does not match the required pattern!")
    })
}

pub(crate) fn time(format: TimeFormat, value: &Value, name: &str) -> Verdict {
    let ok = as_text(value).is_some_and(|s| is_time(format, s));
    Verdict::from_bool(ok, format!("time in {} format", format.token()), || {
        format!("{name} must be a time in {} format!", format.token())
    })
}

// ============================================================================
// UUID
// ============================================================================

/// Canonical 8-4-4-4-12 hex layout, case-insensitive.
fn is_uuid(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    for (i, b) in bytes.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => {
                if *b != b'-' {
                    return false;
                }
            }
            _ => {
                if !b.is_ascii_hexdigit() {
                    return false;
                }
            }
        }
    }
    true
}

// ============================================================================
// TIME TOKENS
// ============================================================================

/// Parses a two-digit numeric field at the given offset.
fn two_digits(bytes: &[u8], offset: usize) -> Option<u8> {
    if offset + 2 > bytes.len() {
        return None;
    }
    let d1 = bytes[offset].wrapping_sub(b'0');
    let d2 = bytes[offset + 1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Validates `HH:MM`, `HH:MM:SS`, or `HH:MM:SS.MS` against `format`.
///
/// Hours 0..=23, minutes and seconds 0..=59, fractional part 1 to 3 digits.
fn is_time(format: TimeFormat, input: &str) -> bool {
    let bytes = input.as_bytes();

    let Some(hour) = two_digits(bytes, 0) else {
        return false;
    };
    if hour > 23 || bytes.get(2) != Some(&b':') {
        return false;
    }
    let Some(minute) = two_digits(bytes, 3) else {
        return false;
    };
    if minute > 59 {
        return false;
    }

    if format == TimeFormat::HhMm {
        return bytes.len() == 5;
    }

    if bytes.get(5) != Some(&b':') {
        return false;
    }
    let Some(second) = two_digits(bytes, 6) else {
        return false;
    };
    if second > 59 {
        return false;
    }

    if format == TimeFormat::HhMmSs {
        return bytes.len() == 8;
    }

    if bytes.get(8) != Some(&b'.') {
        return false;
    }
    let frac = &bytes[9..];
    (1..=3).contains(&frac.len()) && frac.iter().all(u8::is_ascii_digit)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // --- Words ---

    #[test]
    fn min_word_counts_whitespace_separated_words() {
        assert!(min_word(2, &Value::from("primeiro segundo"), "v").ok);
        assert!(!min_word(3, &Value::from("primeiro segundo"), "v").ok);
        assert!(min_word(2, &Value::from("  spaced   out  "), "v").ok);
    }

    // --- Email ---

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last+tag@sub.example.co", true)]
    #[case("not-an-email", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    fn email_cases(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(email(&Value::from(input), "v").ok, expected, "{input}");
    }

    // --- UUID ---

    #[rstest]
    #[case("550e8400-e29b-41d4-a716-446655440000", true)]
    #[case("550E8400-E29B-41D4-A716-446655440000", true)]
    #[case("550e8400e29b41d4a716446655440000", false)]
    #[case("550e8400-e29b-41d4-a716-44665544000g", false)]
    #[case("550e8400-e29b-41d4-a716", false)]
    fn uuid_cases(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(uuid(&Value::from(input), "v").ok, expected, "{input}");
    }

    // --- Pattern ---

    #[test]
    fn regex_matches_and_reports_pattern() {
        let pattern = Regex::new(r"^\d{3}-\d{4}$").unwrap();
        assert!(regex_match(&pattern, &Value::from("123-4567"), "v").ok);
        let verdict = regex_match(&pattern, &Value::from("1234567"), "v");
        assert!(!verdict.ok);
        assert!(verdict.expect.contains(r"\d{3}"));
    }

    // --- Time ---

    #[rstest]
    #[case(TimeFormat::HhMm, "14:30", true)]
    #[case(TimeFormat::HhMm, "23:59", true)]
    #[case(TimeFormat::HhMm, "24:00", false)]
    #[case(TimeFormat::HhMm, "14:60", false)]
    #[case(TimeFormat::HhMm, "14:30:00", false)]
    #[case(TimeFormat::HhMmSs, "14:30:00", true)]
    #[case(TimeFormat::HhMmSs, "14:30:60", false)]
    #[case(TimeFormat::HhMmSs, "14:30", false)]
    #[case(TimeFormat::HhMmSsMs, "14:30:00.1", true)]
    #[case(TimeFormat::HhMmSsMs, "14:30:00.123", true)]
    #[case(TimeFormat::HhMmSsMs, "14:30:00.1234", false)]
    #[case(TimeFormat::HhMmSsMs, "14:30:00.", false)]
    #[case(TimeFormat::HhMmSsMs, "14:30:00", false)]
    fn time_cases(#[case] format: TimeFormat, #[case] input: &str, #[case] expected: bool) {
        assert_eq!(time(format, &Value::from(input), "v").ok, expected, "{input}");
    }

    #[test]
    fn non_text_values_fail_format_checks() {
        assert!(!email(&Value::from(1.0), "v").ok);
        assert!(!time(TimeFormat::HhMm, &Value::Null, "v").ok);
    }
}
