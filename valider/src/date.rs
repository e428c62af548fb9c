// Date layouts and date-format checks

use crate::errors::FieldSink;
use crate::walk::{self, Leaf};
use crate::{FailureKind, Inspect, ParameterError, ValidationErrors};
use chrono::format::{self, Item, ParseErrorKind, ParseResult, Parsed, StrftimeItems};
use tracing::trace;

/// Validated strftime layout.
///
/// A layout may name any subset of date and time fields: `%Y-%m` and
/// `%H:%M` are as valid as a full timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLayout {
    format: String,
}

impl DateLayout {
    /// `2024-01-15`
    pub const DATE: &'static str = "%Y-%m-%d";
    /// `15:04:05`
    pub const TIME: &'static str = "%H:%M:%S";
    /// `2024-01-15 15:04:05`
    pub const DATETIME: &'static str = "%Y-%m-%d %H:%M:%S";
    /// `2024-01-15T15:04:05+01:00`, fractional seconds optional
    pub const RFC3339: &'static str = "%Y-%m-%dT%H:%M:%S%.f%:z";

    /// Validate a strftime layout.
    pub fn new(format: impl Into<String>) -> Result<Self, ParameterError> {
        let format = format.into();
        if format.is_empty() || StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(ParameterError::InvalidLayout(format));
        }
        Ok(Self { format })
    }

    pub fn as_str(&self) -> &str {
        &self.format
    }

    /// Check whether `value` parses completely under this layout.
    ///
    /// The parsed fields must agree with each other. Whenever they pin down a
    /// calendar date or a time of day, that date or time must exist, so
    /// `2023-02-29` never conforms to `%Y-%m-%d`.
    pub fn matches(&self, value: &str) -> bool {
        let mut parsed = Parsed::new();
        if format::parse(&mut parsed, value, StrftimeItems::new(&self.format)).is_err() {
            return false;
        }
        resolves(parsed.to_naive_date()) && resolves(parsed.to_naive_time())
    }
}

/// A partial layout leaves the date or time underdetermined, which is fine;
/// anything else that fails to resolve is an impossible value.
fn resolves<T>(result: ParseResult<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => err.kind() == ParseErrorKind::NotEnough,
    }
}

/// Check that every leaf of `subject` is a string conforming to `layout`.
///
/// Sequences and mapping values are walked to any depth. Failures are
/// appended to `errors` under `field`; any leaf that is not a string records
/// `UnsupportedShape`. Empty containers are vacuously valid.
///
/// ```
/// use valider::{check_date_format, DateLayout, FailureKind, ValidationErrors};
///
/// let layout = DateLayout::new(DateLayout::DATE).unwrap();
/// let mut errors = ValidationErrors::new();
///
/// check_date_format(&["2024-01-15", "2024-13-40"], &layout, "days", &mut errors);
///
/// assert_eq!(errors.get("days").len(), 1);
/// assert_eq!(errors.get("days")[0].kind(), FailureKind::NotDateFormat);
/// ```
pub fn check_date_format(
    subject: &dyn Inspect,
    layout: &DateLayout,
    field: &str,
    errors: &mut ValidationErrors,
) {
    let mut sink = FieldSink::new(field, errors);
    conforms(subject, layout, &mut sink);
}

pub(crate) fn conforms(subject: &dyn Inspect, layout: &DateLayout, sink: &mut FieldSink<'_>) {
    trace!(field = sink.field(), layout = layout.as_str(), "checking date format");

    walk::for_each_leaf(subject, |leaf| match leaf {
        Leaf::String(value) => {
            if !layout.matches(&value) {
                sink.fail_with(FailureKind::NotDateFormat, layout.as_str());
            }
        }
        other @ (Leaf::Integer(_) | Leaf::Other(_) | Leaf::Nil) => {
            sink.fail_with(FailureKind::UnsupportedShape, other.name());
        }
    });
}

/// Validate `layout` and run [`conforms`], recording a bad parameter when the
/// layout itself is malformed.
pub(crate) fn conforms_to(subject: &dyn Inspect, layout: &str, sink: &mut FieldSink<'_>) {
    match DateLayout::new(layout) {
        Ok(layout) => conforms(subject, &layout, sink),
        Err(err) => sink.bad_parameter(&err),
    }
}
