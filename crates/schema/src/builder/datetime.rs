//! Calendar-date schemas.

use chrono::NaiveDate;

use super::{Schema, shared_modifiers};
use crate::definition::{Definition, Limit, Method};

/// Builder for calendar dates in a declared token format.
///
/// Accepts both date-typed values and text the declared format parses.
///
/// # Examples
///
/// ```
/// use provar_schema::prelude::*;
///
/// let birth = schema().date(DateFormat::YyyyMmDd);
/// assert!(birth.validate("1990-05-17"));
/// assert!(!birth.validate("17/05/1990"));
/// ```
#[derive(Debug, Clone)]
pub struct DateSchema {
    def: Definition,
}

impl DateSchema {
    pub(crate) fn new(def: Definition) -> Self {
        Self { def }
    }

    fn append(self, method: Method) -> Self {
        Self {
            def: self.def.with(method),
        }
    }

    shared_modifiers!();

    /// Requires the date to be on or after `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, bound: NaiveDate) -> Self {
        self.append(Method::Min(Limit::Date(bound)))
    }

    /// Requires the date to be on or before `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, bound: NaiveDate) -> Self {
        self.append(Method::Max(Limit::Date(bound)))
    }
}

impl Schema for DateSchema {
    fn definition(&self) -> &Definition {
        &self.def
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::schema;
    use crate::definition::DateFormat;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn format_token_gates_the_text_layout() {
        let s = schema().date(DateFormat::DdMmYyyySlash);
        assert!(s.validate("17/05/1990"));
        assert!(!s.validate("1990-05-17"));
    }

    #[test]
    fn bounds_compare_calendar_dates() {
        let s = schema()
            .date(DateFormat::YyyyMmDd)
            .min(date(2000, 1, 1))
            .max(date(2020, 12, 31));
        assert!(s.validate("2010-06-15"));
        assert!(!s.validate("1999-12-31"));
        assert!(!s.validate("2021-01-01"));
    }

    #[test]
    fn iso_format_accepts_a_time_part() {
        let s = schema().date(DateFormat::Iso8601);
        assert!(s.validate("2024-02-29T08:15:30Z"));
        assert!(s.validate("2024-02-29"));
        assert!(!s.validate("2023-02-29"));
    }
}
