// Validation errors

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Rule that a value violated.
///
/// The serialized form is a stable machine code suitable for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Zero or empty value where presence was demanded
    Required,
    /// Value differs from the expected literal
    NotEqual,
    /// Value equals a forbidden literal
    Equal,
    /// Numeric, length or cardinality bound violated
    #[serde(rename = "out_range")]
    OutOfRange,
    /// Value is not a member of the allowed set
    #[serde(rename = "in")]
    NotInSet,
    /// Exact length mismatch
    #[serde(rename = "length")]
    LengthMismatch,
    /// String does not parse under the supplied date layout
    #[serde(rename = "not_date")]
    NotDateFormat,
    /// Mapping is missing a required key
    #[serde(rename = "not_found")]
    NotFoundKey,
    /// String does not match the pattern
    NotMatched,
    /// The value's shape cannot be handled by the rule
    #[serde(rename = "unsupported_type")]
    UnsupportedShape,
    /// Caller misuse: malformed pattern, layout or allowed set
    BadParameter,
}

impl FailureKind {
    /// Machine code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::Required => "required",
            FailureKind::NotEqual => "not_equal",
            FailureKind::Equal => "equal",
            FailureKind::OutOfRange => "out_range",
            FailureKind::NotInSet => "in",
            FailureKind::LengthMismatch => "length",
            FailureKind::NotDateFormat => "not_date",
            FailureKind::NotFoundKey => "not_found",
            FailureKind::NotMatched => "not_matched",
            FailureKind::UnsupportedShape => "unsupported_type",
            FailureKind::BadParameter => "bad_parameter",
        }
    }

    /// Human readable message.
    pub fn message(&self) -> &'static str {
        match self {
            FailureKind::Required => "is required",
            FailureKind::NotEqual => "is not equal to value passed",
            FailureKind::Equal => "is equal to value passed",
            FailureKind::OutOfRange => "is out of range",
            FailureKind::NotInSet => "is not in the values passed",
            FailureKind::LengthMismatch => "does not have the expected length",
            FailureKind::NotDateFormat => "is not a valid datetime",
            FailureKind::NotFoundKey => "not found the key",
            FailureKind::NotMatched => "does not match the pattern",
            FailureKind::UnsupportedShape => "unsupported type",
            FailureKind::BadParameter => "bad parameter",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Operand a rule compared against.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Text(String),
    Integer(i128),
    Float(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    /// Inclusive bounds
    Bounds { min: Box<Operand>, max: Box<Operand> },
    Set(Vec<Operand>),
}

impl Operand {
    pub(crate) fn bounds(min: impl Into<Operand>, max: impl Into<Operand>) -> Self {
        Operand::Bounds {
            min: Box::new(min.into()),
            max: Box::new(max.into()),
        }
    }

    /// Convert to JSON representation
    ///
    /// Integers outside the `i64`/`u64` range are rendered as strings.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;

        match self {
            Operand::Text(text) => Value::String(text.clone()),
            Operand::Integer(n) => i64::try_from(*n)
                .map(Value::from)
                .or_else(|_| u64::try_from(*n).map(Value::from))
                .unwrap_or_else(|_| Value::String(n.to_string())),
            Operand::Float(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Operand::Bool(b) => Value::Bool(*b),
            Operand::Bytes(bytes) => Value::from(bytes.clone()),
            Operand::Bounds { min, max } => serde_json::json!({
                "min": min.to_json(),
                "max": max.to_json(),
            }),
            Operand::Set(items) => Value::Array(items.iter().map(Operand::to_json).collect()),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Text(text) => write!(f, "{:?}", text),
            Operand::Integer(n) => write!(f, "{}", n),
            Operand::Float(n) => write!(f, "{}", n),
            Operand::Bool(b) => write!(f, "{}", b),
            Operand::Bytes(bytes) => write!(f, "{:?}", bytes),
            Operand::Bounds { min, max } => write!(f, "[{}, {}]", min, max),
            Operand::Set(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value.into())
    }
}

impl From<i128> for Operand {
    fn from(value: i128) -> Self {
        Operand::Integer(value)
    }
}

impl From<usize> for Operand {
    fn from(value: usize) -> Self {
        // usize always fits in i128
        Operand::Integer(value as i128)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Bool(value)
    }
}

impl From<&[u8]> for Operand {
    fn from(value: &[u8]) -> Self {
        Operand::Bytes(value.to_vec())
    }
}

/// One violated rule.
///
/// Immutable once created; only the sink that holds it can drop it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    kind: FailureKind,
    should_be: Option<Operand>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(kind: FailureKind) -> Self {
        Self {
            kind,
            should_be: None,
        }
    }

    /// Set the operand the value was compared against
    pub fn with_operand(mut self, operand: impl Into<Operand>) -> Self {
        self.should_be = Some(operand.into());
        self
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Operand the value was compared against, if the rule has one
    pub fn should_be(&self) -> Option<&Operand> {
        self.should_be.as_ref()
    }

    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.kind,
            "message": self.message(),
            "should_be": self.should_be.as_ref().map(Operand::to_json),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.should_be {
            Some(operand) => write!(f, "{} (should be {})", self.message(), operand),
            None => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failures of one validation session, grouped by field.
///
/// Append-only: a field is present iff at least one failure was recorded for
/// it. Failures for a field keep their insertion order; nothing is ever
/// deduplicated.
///
/// The sink is not synchronized. Use one sink per concurrent unit of work.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    fields: HashMap<String, Vec<ValidationError>>,
}

impl ValidationErrors {
    /// Create an empty error sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure for `field`
    pub fn add(&mut self, field: &str, error: ValidationError) {
        match self.fields.get_mut(field) {
            Some(errors) => errors.push(error),
            None => {
                self.fields.insert(field.to_string(), vec![error]);
            }
        }
    }

    /// Check whether no failure was recorded at all
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(Vec::is_empty)
    }

    /// Check whether no failure was recorded for `field`
    pub fn is_field_valid(&self, field: &str) -> bool {
        self.get(field).is_empty()
    }

    /// Failures for a specific field, in the order they were recorded
    pub fn get(&self, field: &str) -> &[ValidationError] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names of the fields with at least one failure
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValidationError])> {
        self.fields
            .iter()
            .map(|(field, errors)| (field.as_str(), errors.as_slice()))
    }

    /// Total number of failures across all fields
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.is_valid()
    }

    /// Forget every recorded failure
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Convert to JSON representation
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Value {
        let fields = self
            .fields
            .iter()
            .map(|(field, errors)| {
                (
                    field.clone(),
                    serde_json::Value::Array(errors.iter().map(ValidationError::to_json).collect()),
                )
            })
            .collect::<serde_json::Map<_, _>>();

        serde_json::json!({ "errors": fields })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, errors) in &self.fields {
            for error in errors {
                writeln!(f, "{}: {}", field, error)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Caller misuse detected while preparing a rule's parameters.
#[derive(Debug, Error)]
pub enum ParameterError {
    /// Pattern failed to compile
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Date layout contains an unknown specifier
    #[error("invalid date layout: {0:?}")]
    InvalidLayout(String),

    /// Scalar family of the value and of the allowed set differ
    #[error("{found} value checked against a {expected} allowed set")]
    FamilyMismatch {
        expected: crate::Family,
        found: crate::Family,
    },

    /// Allowed-set member does not belong to the declared family
    #[error("allowed set member of type {found} is not a {expected}")]
    MalformedMember {
        expected: crate::Family,
        found: &'static str,
    },
}

/// Failure sink bound to one field name.
///
/// Every checker writes through one of these, so all recorded failures are
/// logged the same way.
pub(crate) struct FieldSink<'e> {
    field: String,
    errors: &'e mut ValidationErrors,
}

impl<'e> FieldSink<'e> {
    pub(crate) fn new(field: impl Into<String>, errors: &'e mut ValidationErrors) -> Self {
        Self {
            field: field.into(),
            errors,
        }
    }

    pub(crate) fn field(&self) -> &str {
        &self.field
    }

    pub(crate) fn fail(&mut self, kind: FailureKind) {
        self.record(ValidationError::new(kind));
    }

    pub(crate) fn fail_with(&mut self, kind: FailureKind, operand: impl Into<Operand>) {
        self.record(ValidationError::new(kind).with_operand(operand));
    }

    pub(crate) fn bad_parameter(&mut self, err: &ParameterError) {
        warn!(field = %self.field, error = %err, "bad validation parameter");
        self.errors.add(
            &self.field,
            ValidationError::new(FailureKind::BadParameter).with_operand(err.to_string()),
        );
    }

    fn record(&mut self, error: ValidationError) {
        debug!(field = %self.field, code = error.code(), "validation failure recorded");
        self.errors.add(&self.field, error);
    }
}
