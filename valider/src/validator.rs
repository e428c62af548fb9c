// Entry point handing out field checkers

use crate::checkers::{
    BoolChecker, BytesChecker, FloatChecker, IntChecker, MapChecker, SliceChecker, StrChecker,
};
use crate::errors::FieldSink;
use crate::{Inspect, ValidationErrors};

/// Validation session writing into a borrowed error sink.
///
/// Each method binds one value to a field name and returns a checker whose
/// rules chain. Only one checker can be alive at a time, because each one
/// holds the sink mutably until it is dropped.
///
/// ```
/// use valider::{ValidationErrors, Validator};
///
/// let mut errors = ValidationErrors::new();
/// let mut v = Validator::new(&mut errors);
///
/// v.string("jo", "name").required().range(3, 32);
/// v.int(17, "age").range(18, 130);
/// v.slice(&vec!["admin", "root"], "roles").one_of(["admin", "user"]);
///
/// assert!(!v.is_valid());
/// assert_eq!(errors.len(), 3);
/// ```
pub struct Validator<'e> {
    errors: &'e mut ValidationErrors,
}

impl<'e> Validator<'e> {
    pub fn new(errors: &'e mut ValidationErrors) -> Self {
        Self { errors }
    }

    pub fn string<'a>(&'a mut self, value: &'a str, field: impl Into<String>) -> StrChecker<'a> {
        StrChecker::new(value, self.sink(field))
    }

    pub fn int(&mut self, value: i64, field: impl Into<String>) -> IntChecker<'_> {
        IntChecker::new(value, self.sink(field))
    }

    pub fn float(&mut self, value: f64, field: impl Into<String>) -> FloatChecker<'_> {
        FloatChecker::new(value, self.sink(field))
    }

    pub fn boolean(&mut self, value: bool, field: impl Into<String>) -> BoolChecker<'_> {
        BoolChecker::new(value, self.sink(field))
    }

    pub fn bytes<'a>(&'a mut self, value: &'a [u8], field: impl Into<String>) -> BytesChecker<'a> {
        BytesChecker::new(value, self.sink(field))
    }

    /// Checker for a sequence of any depth
    pub fn slice<'a>(&'a mut self, value: &'a dyn Inspect, field: impl Into<String>) -> SliceChecker<'a> {
        SliceChecker::new(value, self.sink(field))
    }

    /// Checker for a mapping; recursive rules only look at values
    pub fn map<'a>(&'a mut self, value: &'a dyn Inspect, field: impl Into<String>) -> MapChecker<'a> {
        MapChecker::new(value, self.sink(field))
    }

    /// Failures recorded so far
    pub fn errors(&self) -> &ValidationErrors {
        self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_valid()
    }

    fn sink(&mut self, field: impl Into<String>) -> FieldSink<'_> {
        FieldSink::new(field, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureKind;

    #[test]
    fn test_fields_are_grouped() {
        let mut errors = ValidationErrors::new();
        let mut v = Validator::new(&mut errors);

        v.string("", "name").required();
        v.int(0, "age").required();
        v.int(200, "age").range(0, 130);
        assert!(!v.is_valid());
        assert_eq!(v.errors().len(), 3);

        assert_eq!(errors.get("name").len(), 1);
        assert_eq!(
            errors.get("age").iter().map(|e| e.kind()).collect::<Vec<_>>(),
            vec![FailureKind::Required, FailureKind::OutOfRange]
        );
    }

    #[test]
    fn test_repeated_failures_are_not_merged() {
        let mut errors = ValidationErrors::new();
        let mut v = Validator::new(&mut errors);
        for _ in 0..3 {
            v.string("x", "code").len(2);
        }
        assert_eq!(errors.get("code").len(), 3);
    }

    #[test]
    fn test_sink_survives_the_session() {
        let mut errors = ValidationErrors::new();
        Validator::new(&mut errors).boolean(false, "terms").required();
        Validator::new(&mut errors).float(0.5, "ratio").range(1.0, 2.0);
        assert_eq!(errors.fields().count(), 2);

        errors.clear();
        assert!(errors.is_valid());
    }
}
