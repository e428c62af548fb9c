// Float checks

use crate::errors::FieldSink;
use crate::{FailureKind, Operand};

/// Checks for one floating point field. Every rule except `required` is
/// skipped while the value is zero.
pub struct FloatChecker<'a> {
    value: f64,
    sink: FieldSink<'a>,
}

impl<'a> FloatChecker<'a> {
    pub(crate) fn new(value: f64, sink: FieldSink<'a>) -> Self {
        Self { value, sink }
    }

    fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    pub fn required(mut self) -> Self {
        if self.is_zero() {
            self.sink.fail(FailureKind::Required);
        }
        self
    }

    pub fn equal(mut self, expected: f64) -> Self {
        if !self.is_zero() && self.value != expected {
            self.sink.fail_with(FailureKind::NotEqual, expected);
        }
        self
    }

    pub fn not_equal(mut self, forbidden: f64) -> Self {
        if !self.is_zero() && self.value == forbidden {
            self.sink.fail_with(FailureKind::Equal, forbidden);
        }
        self
    }

    /// Number of characters in the shortest decimal rendering
    pub fn len(mut self, len: usize) -> Self {
        if !self.is_zero() && self.value.to_string().len() != len {
            self.sink.fail_with(FailureKind::LengthMismatch, len);
        }
        self
    }

    /// Inclusive bounds. NaN is never in range.
    pub fn range(mut self, min: f64, max: f64) -> Self {
        if !self.is_zero() && !(min..=max).contains(&self.value) {
            self.sink.fail_with(FailureKind::OutOfRange, Operand::bounds(min, max));
        }
        self
    }

    pub fn one_of(mut self, values: &[f64]) -> Self {
        if !self.is_zero() && !values.contains(&self.value) {
            self.sink.fail_with(
                FailureKind::NotInSet,
                Operand::Set(values.iter().map(|v| Operand::from(*v)).collect()),
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::{FailureKind, ValidationErrors, Validator};

    fn kinds(errors: &ValidationErrors) -> Vec<FailureKind> {
        errors.get("x").iter().map(|e| e.kind()).collect()
    }

    #[test]
    fn test_required() {
        let mut errors = ValidationErrors::new();
        Validator::new(&mut errors).float(0.0, "x").required();
        Validator::new(&mut errors).float(0.1, "x").required();
        assert_eq!(kinds(&errors), vec![FailureKind::Required]);
    }

    #[test]
    fn test_rules() {
        let mut errors = ValidationErrors::new();
        Validator::new(&mut errors)
            .float(2.5, "x")
            .equal(2.5)
            .not_equal(2.5)
            .len(3)
            .range(0.0, 1.0)
            .one_of(&[2.5, 3.5]);
        assert_eq!(kinds(&errors), vec![FailureKind::Equal, FailureKind::OutOfRange]);
    }

    #[test]
    fn test_nan_is_out_of_range() {
        let mut errors = ValidationErrors::new();
        Validator::new(&mut errors).float(f64::NAN, "x").range(f64::MIN, f64::MAX);
        assert_eq!(kinds(&errors), vec![FailureKind::OutOfRange]);
    }
}
