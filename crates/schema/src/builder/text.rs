//! Text schemas.

use regex::Regex;

use super::{Schema, shared_modifiers};
use crate::definition::{Definition, Limit, Method, TimeFormat};

/// Builder for text values.
///
/// # Examples
///
/// ```
/// use provar_schema::prelude::*;
///
/// let username = schema().string().min_length(3).max_length(16);
/// assert!(username.validate("ada"));
/// assert!(!username.validate("ab"));
/// ```
#[derive(Debug, Clone)]
pub struct StringSchema {
    def: Definition,
}

impl StringSchema {
    pub(crate) fn new(def: Definition) -> Self {
        Self { def }
    }

    fn append(self, method: Method) -> Self {
        Self {
            def: self.def.with(method),
        }
    }

    shared_modifiers!();

    /// Requires at least `count` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(self, count: usize) -> Self {
        self.append(Method::Min(Limit::Count(count)))
    }

    /// Requires at most `count` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(self, count: usize) -> Self {
        self.append(Method::Max(Limit::Count(count)))
    }

    /// Requires at least `count` whitespace-separated words.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_word(self, count: usize) -> Self {
        self.append(Method::MinWord(count))
    }

    /// Requires email-shaped text.
    #[must_use = "builder methods must be chained or built"]
    pub fn email(self) -> Self {
        self.append(Method::Email)
    }

    /// Requires canonical hyphenated UUID text.
    #[must_use = "builder methods must be chained or built"]
    pub fn uuid(self) -> Self {
        self.append(Method::Uuid)
    }

    /// Requires text matching `pattern`.
    ///
    /// The pattern is compiled by the caller, so an invalid pattern is a
    /// compile-it-yourself problem and never a runtime validation error.
    #[must_use = "builder methods must be chained or built"]
    pub fn regex(self, pattern: Regex) -> Self {
        self.append(Method::Regex(pattern))
    }

    /// Requires time-of-day text in the given token format.
    #[must_use = "builder methods must be chained or built"]
    pub fn time(self, format: TimeFormat) -> Self {
        self.append(Method::Time(format))
    }
}

impl Schema for StringSchema {
    fn definition(&self) -> &Definition {
        &self.def
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::schema;

    #[test]
    fn length_bounds_count_characters() {
        let s = schema().string().min_length(2).max_length(4);
        assert!(s.validate("héé"));
        assert!(!s.validate("h"));
        assert!(!s.validate("hello"));
    }

    #[test]
    fn min_word_counts_words() {
        let s = schema().string().min_word(2);
        assert!(s.validate("Ada Lovelace"));
        assert!(!s.validate("Ada"));
    }

    #[test]
    fn email_and_uuid_formats() {
        assert!(schema().string().email().validate("a@b.co"));
        assert!(!schema().string().email().validate("not an email"));
        assert!(
            schema()
                .string()
                .uuid()
                .validate("550e8400-e29b-41d4-a716-446655440000")
        );
    }

    #[test]
    fn regex_matches_compiled_pattern() {
        let s = schema().string().regex(Regex::new(r"^\d{3}$").unwrap());
        assert!(s.validate("123"));
        assert!(!s.validate("12a"));
    }

    #[test]
    fn time_token_formats() {
        assert!(schema().string().time(TimeFormat::HhMm).validate("23:59"));
        assert!(!schema().string().time(TimeFormat::HhMm).validate("24:00"));
        assert!(
            schema()
                .string()
                .time(TimeFormat::HhMmSsMs)
                .validate("08:15:30.250")
        );
    }
}
