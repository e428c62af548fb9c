// Integer checks

use crate::errors::FieldSink;
use crate::{FailureKind, Operand};

/// Checks for one integer field. Every rule except `required` is skipped
/// while the value is zero.
pub struct IntChecker<'a> {
    value: i64,
    sink: FieldSink<'a>,
}

impl<'a> IntChecker<'a> {
    pub(crate) fn new(value: i64, sink: FieldSink<'a>) -> Self {
        Self { value, sink }
    }

    pub fn required(mut self) -> Self {
        if self.value == 0 {
            self.sink.fail(FailureKind::Required);
        }
        self
    }

    pub fn equal(mut self, expected: i64) -> Self {
        if self.value != 0 && self.value != expected {
            self.sink.fail_with(FailureKind::NotEqual, expected);
        }
        self
    }

    pub fn not_equal(mut self, forbidden: i64) -> Self {
        if self.value != 0 && self.value == forbidden {
            self.sink.fail_with(FailureKind::Equal, forbidden);
        }
        self
    }

    /// Number of characters in the decimal rendering, sign included
    pub fn len(mut self, len: usize) -> Self {
        if self.value != 0 && self.value.to_string().len() != len {
            self.sink.fail_with(FailureKind::LengthMismatch, len);
        }
        self
    }

    /// Inclusive bounds
    pub fn range(mut self, min: i64, max: i64) -> Self {
        if self.value != 0 && (self.value < min || self.value > max) {
            self.sink.fail_with(FailureKind::OutOfRange, Operand::bounds(min, max));
        }
        self
    }

    pub fn one_of(mut self, values: &[i64]) -> Self {
        if self.value != 0 && !values.contains(&self.value) {
            self.sink.fail_with(
                FailureKind::NotInSet,
                Operand::Set(values.iter().map(|v| Operand::from(*v)).collect()),
            );
        }
        self
    }
}
