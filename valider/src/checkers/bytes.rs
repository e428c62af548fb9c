// Byte sequence checks

use crate::errors::FieldSink;
use crate::{FailureKind, Operand};

/// Checks for one byte sequence field. Every rule except `required` is
/// skipped while the sequence is empty.
pub struct BytesChecker<'a> {
    value: &'a [u8],
    sink: FieldSink<'a>,
}

impl<'a> BytesChecker<'a> {
    pub(crate) fn new(value: &'a [u8], sink: FieldSink<'a>) -> Self {
        Self { value, sink }
    }

    pub fn required(mut self) -> Self {
        if self.value.is_empty() {
            self.sink.fail(FailureKind::Required);
        }
        self
    }

    pub fn equal(mut self, expected: &[u8]) -> Self {
        if !self.value.is_empty() && self.value != expected {
            self.sink.fail_with(FailureKind::NotEqual, expected);
        }
        self
    }

    pub fn not_equal(mut self, forbidden: &[u8]) -> Self {
        if !self.value.is_empty() && self.value == forbidden {
            self.sink.fail_with(FailureKind::Equal, forbidden);
        }
        self
    }

    pub fn len(mut self, len: usize) -> Self {
        if !self.value.is_empty() && self.value.len() != len {
            self.sink.fail_with(FailureKind::LengthMismatch, len);
        }
        self
    }

    /// Inclusive length bounds
    pub fn range(mut self, min: usize, max: usize) -> Self {
        let len = self.value.len();
        if !self.value.is_empty() && (len < min || len > max) {
            self.sink.fail_with(FailureKind::OutOfRange, Operand::bounds(min, max));
        }
        self
    }

    pub fn one_of(mut self, values: &[&[u8]]) -> Self {
        if !self.value.is_empty() && !values.contains(&self.value) {
            self.sink.fail_with(
                FailureKind::NotInSet,
                Operand::Set(values.iter().map(|v| Operand::from(*v)).collect()),
            );
        }
        self
    }
}
