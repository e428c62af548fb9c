// Boolean checks

use crate::errors::FieldSink;
use crate::{FailureKind, Operand};

/// Checks for one boolean field. `false` is the zero value: every rule except
/// `required` is skipped while the value is `false`.
pub struct BoolChecker<'a> {
    value: bool,
    sink: FieldSink<'a>,
}

impl<'a> BoolChecker<'a> {
    pub(crate) fn new(value: bool, sink: FieldSink<'a>) -> Self {
        Self { value, sink }
    }

    pub fn required(mut self) -> Self {
        if !self.value {
            self.sink.fail(FailureKind::Required);
        }
        self
    }

    pub fn equal(mut self, expected: bool) -> Self {
        if self.value && !expected {
            self.sink.fail_with(FailureKind::NotEqual, expected);
        }
        self
    }

    pub fn not_equal(mut self, forbidden: bool) -> Self {
        if self.value && forbidden {
            self.sink.fail_with(FailureKind::Equal, forbidden);
        }
        self
    }

    pub fn one_of(mut self, values: &[bool]) -> Self {
        if self.value && !values.contains(&true) {
            self.sink.fail_with(
                FailureKind::NotInSet,
                Operand::Set(values.iter().map(|v| Operand::from(*v)).collect()),
            );
        }
        self
    }
}
