// Runtime classification of caller data

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Read-only view over a value of unknown shape.
///
/// Recursive checks look at caller data only through this trait. Each visited
/// node is classified once, through [`Inspect::shape`], into exactly one
/// [`Shape`].
///
/// References, `Box`, `Rc`, `Arc` and `Option` are looked through at any
/// depth: `Some(Some("x"))` and `&&"x"` both classify as the string `"x"`,
/// and only an absent value at the bottom is `Nil`.
///
/// ```
/// use valider::{Inspect, Shape};
///
/// assert!(matches!(42i32.shape(), Shape::Integer(42)));
/// assert!(matches!("hola".shape(), Shape::String(_)));
/// assert!(matches!(vec![vec![1i8]].shape(), Shape::Sequence(_)));
/// assert!(matches!(None::<String>.shape(), Shape::Nil));
/// assert!(matches!(1.5f64.shape(), Shape::Other("float")));
/// ```
pub trait Inspect {
    /// Classify this value.
    fn shape(&self) -> Shape<'_>;
}

/// Classification of one value.
pub enum Shape<'a> {
    /// Ordered, finite collection
    Sequence(Elements<'a>),
    /// Finite key/value collection; enumeration order is unspecified
    Mapping(Entries<'a>),
    /// String-like scalar
    String(Cow<'a, str>),
    /// Signed integer of any width
    Integer(i128),
    /// Scalar no recursive check supports (floats, booleans, unsigned integers)
    Other(&'static str),
    /// Absent value
    Nil,
}

impl Shape<'_> {
    /// Short name used in failure operands and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Sequence(_) => "sequence",
            Shape::Mapping(_) => "mapping",
            Shape::String(_) => "string",
            Shape::Integer(_) => "integer",
            Shape::Other(name) => *name,
            Shape::Nil => "nil",
        }
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Sequence(items) => write!(f, "Sequence(len = {})", items.len()),
            Shape::Mapping(entries) => write!(f, "Mapping(len = {})", entries.len()),
            Shape::String(s) => f.debug_tuple("String").field(s).finish(),
            Shape::Integer(n) => f.debug_tuple("Integer").field(n).finish(),
            Shape::Other(name) => f.debug_tuple("Other").field(name).finish(),
            Shape::Nil => f.write_str("Nil"),
        }
    }
}

/// Elements of a [`Shape::Sequence`].
pub struct Elements<'a>(Box<dyn ExactSizeIterator<Item = &'a dyn Inspect> + 'a>);

impl<'a> Elements<'a> {
    pub fn new<I>(iter: I) -> Self
    where
        I: ExactSizeIterator<Item = &'a dyn Inspect> + 'a,
    {
        Self(Box::new(iter))
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a dyn Inspect;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Elements<'_> {}

/// Entries of a [`Shape::Mapping`].
pub struct Entries<'a>(Box<dyn ExactSizeIterator<Item = (&'a dyn Inspect, &'a dyn Inspect)> + 'a>);

impl<'a> Entries<'a> {
    pub fn new<I>(iter: I) -> Self
    where
        I: ExactSizeIterator<Item = (&'a dyn Inspect, &'a dyn Inspect)> + 'a,
    {
        Self(Box::new(iter))
    }

    /// Values only, in the mapping's enumeration order.
    pub fn into_values(self) -> Elements<'a> {
        Elements::new(self.0.map(|(_, value)| value))
    }

    /// Check whether some key classifies as the string `key`.
    pub fn contains_key(self, key: &str) -> bool {
        self.0
            .into_iter()
            .any(|(candidate, _)| matches!(candidate.shape(), Shape::String(s) if s == key))
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a dyn Inspect, &'a dyn Inspect);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}

// Pointers and wrappers

impl<T: Inspect + ?Sized> Inspect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => value.shape(),
            None => Shape::Nil,
        }
    }
}

impl Inspect for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Nil
    }
}

// String family

impl Inspect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::String(Cow::Borrowed(self))
    }
}

impl Inspect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::String(Cow::Borrowed(self.as_str()))
    }
}

impl Inspect for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::String(Cow::Borrowed(self.as_ref()))
    }
}

impl Inspect for char {
    fn shape(&self) -> Shape<'_> {
        Shape::String(Cow::Owned(self.to_string()))
    }
}

// Integer family

macro_rules! inspect_signed {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Integer(i128::from(*self))
                }
            }
        )*
    };
}

inspect_signed!(i8, i16, i32, i64, i128);

impl Inspect for isize {
    fn shape(&self) -> Shape<'_> {
        // isize is at most 64 bits wide on every supported target
        Shape::Integer(*self as i128)
    }
}

// Reserved scalars

macro_rules! inspect_other {
    ($name:literal => $($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Other($name)
                }
            }
        )*
    };
}

inspect_other!("unsigned integer" => u8, u16, u32, u64, u128, usize);
inspect_other!("float" => f32, f64);
inspect_other!("bool" => bool);

// Sequences

fn elements<'a, T, I>(iter: I) -> Elements<'a>
where
    T: Inspect + 'a,
    I: ExactSizeIterator<Item = &'a T> + 'a,
{
    Elements::new(iter.map(|item| item as &dyn Inspect))
}

impl<T: Inspect> Inspect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(elements(self.iter()))
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(elements(self.iter()))
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(elements(self.iter()))
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(elements(self.iter()))
    }
}

impl<T: Inspect, S> Inspect for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(elements(self.iter()))
    }
}

impl<T: Inspect> Inspect for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(elements(self.iter()))
    }
}

// Mappings

fn entries<'a, K, V, I>(iter: I) -> Entries<'a>
where
    K: Inspect + 'a,
    V: Inspect + 'a,
    I: ExactSizeIterator<Item = (&'a K, &'a V)> + 'a,
{
    Entries::new(iter.map(|(key, value)| (key as &dyn Inspect, value as &dyn Inspect)))
}

impl<K: Inspect, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(entries(self.iter()))
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(entries(self.iter()))
    }
}

#[cfg(feature = "json")]
impl Inspect for serde_json::Value {
    fn shape(&self) -> Shape<'_> {
        use serde_json::Value;

        match self {
            Value::Null => Shape::Nil,
            Value::Bool(_) => Shape::Other("bool"),
            Value::Number(n) => match n.as_i64() {
                Some(n) => Shape::Integer(n.into()),
                None if n.is_u64() => Shape::Other("unsigned integer"),
                None => Shape::Other("float"),
            },
            Value::String(s) => Shape::String(Cow::Borrowed(s.as_str())),
            Value::Array(items) => Shape::Sequence(elements(items.iter())),
            Value::Object(map) => map.shape(),
        }
    }
}

#[cfg(feature = "json")]
impl Inspect for serde_json::Map<String, serde_json::Value> {
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(entries(self.iter()))
    }
}
