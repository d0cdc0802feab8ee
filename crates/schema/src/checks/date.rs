//! Calendar date parsing against declared format tokens.
//!
//! Each token fixes the field order and separator; the calendar itself
//! (month at most 12, day at most the days in that month for that year) is
//! checked through `NaiveDate::from_ymd_opt`, so leap years follow the
//! proleptic Gregorian rules.

use chrono::{DateTime, NaiveDate};

use crate::definition::DateFormat;
use crate::value::Value;

/// Field order within a ten-character date string.
#[derive(Clone, Copy)]
enum Order {
    YearFirst { month_middle: bool },
    YearLast { month_first: bool },
}

fn layout(format: DateFormat) -> (Order, char) {
    match format {
        DateFormat::Iso8601 | DateFormat::YyyyMmDd => (Order::YearFirst { month_middle: true }, '-'),
        DateFormat::YyyyDdMm => (Order::YearFirst { month_middle: false }, '-'),
        DateFormat::YyyyMmDdSlash => (Order::YearFirst { month_middle: true }, '/'),
        DateFormat::YyyyDdMmSlash => (Order::YearFirst { month_middle: false }, '/'),
        DateFormat::DdMmYyyy => (Order::YearLast { month_first: false }, '-'),
        DateFormat::MmDdYyyy => (Order::YearLast { month_first: true }, '-'),
        DateFormat::DdMmYyyySlash => (Order::YearLast { month_first: false }, '/'),
        DateFormat::MmDdYyyySlash => (Order::YearLast { month_first: true }, '/'),
    }
}

/// Parses a fixed-width decimal field.
fn field(s: &str, width: usize) -> Option<u32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses `input` as a calendar date in `format`.
///
/// `ISO8601` additionally accepts a full RFC 3339 date-time.
pub(crate) fn parse_date(format: DateFormat, input: &str) -> Option<NaiveDate> {
    if format == DateFormat::Iso8601 && input.contains('T') {
        return DateTime::parse_from_rfc3339(input)
            .ok()
            .map(|dt| dt.date_naive());
    }

    let (order, sep) = layout(format);
    let mut parts = input.split(sep);
    let (a, b, c) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let (year, month, day) = match order {
        Order::YearFirst { month_middle } => {
            let year = field(a, 4)?;
            let (m, d) = if month_middle { (b, c) } else { (c, b) };
            (year, field(m, 2)?, field(d, 2)?)
        }
        Order::YearLast { month_first } => {
            let year = field(c, 4)?;
            let (m, d) = if month_first { (a, b) } else { (b, a) };
            (year, field(m, 2)?, field(d, 2)?)
        }
    };

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// Whether a runtime value satisfies the date kind under `format`.
///
/// A `DateTime` value always qualifies; text must parse as a calendar date
/// in the declared format.
pub(crate) fn is_date(format: DateFormat, value: &Value) -> bool {
    match value {
        Value::DateTime(_) => true,
        Value::Text(s) => parse_date(format, s).is_some(),
        _ => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================
