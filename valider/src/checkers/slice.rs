// Sequence checks

use super::{Container, exact_len, is_traversable, len_range, required};
use crate::errors::FieldSink;
use crate::{AllowedSet, Inspect, containment, date};

/// Checks for one sequence field.
///
/// Cardinality rules are never skipped; a nil subject counts as empty.
/// Membership and date rules recurse into every element, however deeply
/// nested. A subject that is not a sequence records `UnsupportedShape` once
/// per rule.
pub struct SliceChecker<'a> {
    value: &'a dyn Inspect,
    sink: FieldSink<'a>,
}

impl<'a> SliceChecker<'a> {
    pub(crate) fn new(value: &'a dyn Inspect, sink: FieldSink<'a>) -> Self {
        Self { value, sink }
    }

    /// Fails when the sequence is empty or nil
    pub fn required(mut self) -> Self {
        required(self.value, Container::Sequence, &mut self.sink);
        self
    }

    /// Exact number of elements
    pub fn len(mut self, len: usize) -> Self {
        exact_len(self.value, Container::Sequence, len, &mut self.sink);
        self
    }

    /// Inclusive bounds on the number of elements
    pub fn range(mut self, min: usize, max: usize) -> Self {
        len_range(self.value, Container::Sequence, min, max, &mut self.sink);
        self
    }

    /// Every leaf, at any depth, is a member of `allowed`
    pub fn one_of<'s>(mut self, allowed: impl Into<AllowedSet<'s>>) -> Self {
        if is_traversable(self.value, Container::Sequence, &mut self.sink) {
            containment::contains(self.value, &allowed.into(), &mut self.sink);
        }
        self
    }

    /// Every leaf, at any depth, is a string parsing under `layout`
    pub fn date(mut self, layout: &str) -> Self {
        if is_traversable(self.value, Container::Sequence, &mut self.sink) {
            date::conforms_to(self.value, layout, &mut self.sink);
        }
        self
    }
}
