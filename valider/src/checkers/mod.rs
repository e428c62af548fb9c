// Field checkers returned by `Validator`

mod boolean;
mod bytes;
mod float;
mod int;
mod map;
mod slice;
mod string;

pub use boolean::BoolChecker;
pub use bytes::BytesChecker;
pub use float::FloatChecker;
pub use int::IntChecker;
pub use map::MapChecker;
pub use slice::SliceChecker;
pub use string::StrChecker;

use crate::errors::FieldSink;
use crate::{FailureKind, Inspect, Operand, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Sequence,
    Mapping,
}

/// Number of entries when `value` is the expected container; `Nil` counts as
/// empty. Any other shape records `UnsupportedShape` and yields `None`.
fn cardinality(value: &dyn Inspect, expected: Container, sink: &mut FieldSink<'_>) -> Option<usize> {
    match (value.shape(), expected) {
        (Shape::Sequence(items), Container::Sequence) => Some(items.len()),
        (Shape::Mapping(entries), Container::Mapping) => Some(entries.len()),
        (Shape::Nil, _) => Some(0),
        (other, _) => {
            sink.fail_with(FailureKind::UnsupportedShape, other.name());
            None
        }
    }
}

/// Check whether `value` is the expected container and holds something to
/// recurse into. `Nil` is vacuous; any other shape records `UnsupportedShape`.
fn is_traversable(value: &dyn Inspect, expected: Container, sink: &mut FieldSink<'_>) -> bool {
    match (value.shape(), expected) {
        (Shape::Sequence(_), Container::Sequence) | (Shape::Mapping(_), Container::Mapping) => true,
        (Shape::Nil, _) => false,
        (other, _) => {
            sink.fail_with(FailureKind::UnsupportedShape, other.name());
            false
        }
    }
}

fn required(value: &dyn Inspect, expected: Container, sink: &mut FieldSink<'_>) {
    if cardinality(value, expected, sink) == Some(0) {
        sink.fail(FailureKind::Required);
    }
}

fn exact_len(value: &dyn Inspect, expected: Container, len: usize, sink: &mut FieldSink<'_>) {
    if let Some(actual) = cardinality(value, expected, sink)
        && actual != len
    {
        sink.fail_with(FailureKind::LengthMismatch, len);
    }
}

fn len_range(value: &dyn Inspect, expected: Container, min: usize, max: usize, sink: &mut FieldSink<'_>) {
    if let Some(actual) = cardinality(value, expected, sink)
        && (actual < min || actual > max)
    {
        sink.fail_with(FailureKind::OutOfRange, Operand::bounds(min, max));
    }
}
