// Depth-first traversal over nested values

use crate::value::{Elements, Inspect, Shape};
use std::borrow::Cow;

/// Scalar reached at the bottom of a traversal.
#[derive(Debug)]
pub(crate) enum Leaf<'a> {
    String(Cow<'a, str>),
    Integer(i128),
    Other(&'static str),
    Nil,
}

impl Leaf<'_> {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Leaf::String(_) => "string",
            Leaf::Integer(_) => "integer",
            Leaf::Other(name) => *name,
            Leaf::Nil => "nil",
        }
    }
}

/// Visit every leaf under `root` in pre-order.
///
/// Containers are expanded through an explicit work-list, so nesting depth is
/// bounded by heap memory rather than by the call stack.
///
/// Sequence elements are visited in index order, mapping values in the
/// mapping's enumeration order; mapping keys are never visited. Empty
/// containers contribute no leaves.
pub(crate) fn for_each_leaf<'a, F>(root: &'a dyn Inspect, mut visit: F)
where
    F: FnMut(Leaf<'a>),
{
    let mut pending: Vec<Elements<'a>> = Vec::new();
    expand(root.shape(), &mut pending, &mut visit);

    while let Some(top) = pending.last_mut() {
        match top.next() {
            Some(node) => expand(node.shape(), &mut pending, &mut visit),
            None => {
                pending.pop();
            }
        }
    }
}

fn expand<'a, F>(shape: Shape<'a>, pending: &mut Vec<Elements<'a>>, visit: &mut F)
where
    F: FnMut(Leaf<'a>),
{
    match shape {
        Shape::Sequence(items) => pending.push(items),
        Shape::Mapping(entries) => pending.push(entries.into_values()),
        Shape::String(s) => visit(Leaf::String(s)),
        Shape::Integer(n) => visit(Leaf::Integer(n)),
        Shape::Other(name) => visit(Leaf::Other(name)),
        Shape::Nil => visit(Leaf::Nil),
    }
}
