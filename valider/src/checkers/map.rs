// Mapping checks

use super::{Container, cardinality, exact_len, is_traversable, len_range, required};
use crate::errors::FieldSink;
use crate::{AllowedSet, FailureKind, Inspect, Shape, containment, date};

/// Checks for one mapping field.
///
/// Cardinality rules count entries and are never skipped; a nil subject
/// counts as empty. Membership and date rules look at values only, recursing
/// into nested containers. A subject that is not a mapping records
/// `UnsupportedShape` once per rule.
pub struct MapChecker<'a> {
    value: &'a dyn Inspect,
    sink: FieldSink<'a>,
}

impl<'a> MapChecker<'a> {
    pub(crate) fn new(value: &'a dyn Inspect, sink: FieldSink<'a>) -> Self {
        Self { value, sink }
    }

    /// Fails when the mapping has no entries or is nil
    pub fn required(mut self) -> Self {
        required(self.value, Container::Mapping, &mut self.sink);
        self
    }

    /// Exact number of entries
    pub fn len(mut self, len: usize) -> Self {
        exact_len(self.value, Container::Mapping, len, &mut self.sink);
        self
    }

    /// Inclusive bounds on the number of entries
    pub fn range(mut self, min: usize, max: usize) -> Self {
        len_range(self.value, Container::Mapping, min, max, &mut self.sink);
        self
    }

    /// One `NotFoundKey` per key in `keys` the mapping does not contain
    pub fn required_keys(mut self, keys: &[&str]) -> Self {
        if cardinality(self.value, Container::Mapping, &mut self.sink).is_none() {
            return self;
        }
        for key in keys {
            let present = match self.value.shape() {
                Shape::Mapping(entries) => entries.contains_key(key),
                _ => false,
            };
            if !present {
                self.sink.fail_with(FailureKind::NotFoundKey, *key);
            }
        }
        self
    }

    /// Every leaf under the mapping's values is a member of `allowed`
    pub fn one_of<'s>(mut self, allowed: impl Into<AllowedSet<'s>>) -> Self {
        if is_traversable(self.value, Container::Mapping, &mut self.sink) {
            containment::contains(self.value, &allowed.into(), &mut self.sink);
        }
        self
    }

    /// Every leaf under the mapping's values is a string parsing under `layout`
    pub fn date(mut self, layout: &str) -> Self {
        if is_traversable(self.value, Container::Mapping, &mut self.sink) {
            date::conforms_to(self.value, layout, &mut self.sink);
        }
        self
    }
}
