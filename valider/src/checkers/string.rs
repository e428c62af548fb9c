// String checks

use crate::errors::FieldSink;
use crate::patterns::{self, EMAIL, EMAIL_REGEX, URL, URL_REGEX};
use crate::{FailureKind, Operand, date};
use regex::Regex;

/// Checks for one string field.
///
/// Every rule except [`required`](Self::required) is skipped while the value
/// is empty.
pub struct StrChecker<'a> {
    value: &'a str,
    sink: FieldSink<'a>,
}

impl<'a> StrChecker<'a> {
    pub(crate) fn new(value: &'a str, sink: FieldSink<'a>) -> Self {
        Self { value, sink }
    }

    /// Fails when the value is empty
    pub fn required(mut self) -> Self {
        if self.value.is_empty() {
            self.sink.fail(FailureKind::Required);
        }
        self
    }

    pub fn equal(mut self, expected: &str) -> Self {
        if !self.value.is_empty() && self.value != expected {
            self.sink.fail_with(FailureKind::NotEqual, expected);
        }
        self
    }

    pub fn not_equal(mut self, forbidden: &str) -> Self {
        if !self.value.is_empty() && self.value == forbidden {
            self.sink.fail_with(FailureKind::Equal, forbidden);
        }
        self
    }

    /// Exact length in bytes
    pub fn len(mut self, len: usize) -> Self {
        if !self.value.is_empty() && self.value.len() != len {
            self.sink.fail_with(FailureKind::LengthMismatch, len);
        }
        self
    }

    /// Inclusive length bounds in bytes
    pub fn range(mut self, min: usize, max: usize) -> Self {
        let len = self.value.len();
        if !self.value.is_empty() && (len < min || len > max) {
            self.sink.fail_with(FailureKind::OutOfRange, Operand::bounds(min, max));
        }
        self
    }

    pub fn one_of(mut self, values: &[&str]) -> Self {
        if !self.value.is_empty() && !values.contains(&self.value) {
            self.sink.fail_with(
                FailureKind::NotInSet,
                Operand::Set(values.iter().map(|v| Operand::from(*v)).collect()),
            );
        }
        self
    }

    /// Value parses under the strftime `layout`
    pub fn date(mut self, layout: &str) -> Self {
        if !self.value.is_empty() {
            date::conforms_to(&self.value, layout, &mut self.sink);
        }
        self
    }

    pub fn email(self) -> Self {
        self.matches_regex(&EMAIL_REGEX, EMAIL)
    }

    pub fn url(self) -> Self {
        self.matches_regex(&URL_REGEX, URL)
    }

    /// Value contains a match of `pattern`. A pattern that does not compile
    /// is recorded as a bad parameter.
    pub fn matches(mut self, pattern: &str) -> Self {
        if self.value.is_empty() {
            return self;
        }
        match patterns::compile(pattern) {
            Ok(regex) => self.matches_regex(&regex, pattern),
            Err(err) => {
                self.sink.bad_parameter(&err);
                self
            }
        }
    }

    fn matches_regex(mut self, regex: &Regex, pattern: &str) -> Self {
        if !self.value.is_empty() && !regex.is_match(self.value) {
            self.sink.fail_with(FailureKind::NotMatched, pattern);
        }
        self
    }
}
