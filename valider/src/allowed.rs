// Allowed sets for membership checks

use crate::{Inspect, Operand, ParameterError, Shape};
use std::borrow::Cow;
use std::fmt;

/// Scalar family an allowed set is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    String,
    Integer,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::String => f.write_str("string"),
            Family::Integer => f.write_str("integer"),
        }
    }
}

enum Member<'a> {
    Str(Cow<'a, str>),
    Int(i128),
    /// Dynamic element, unwrapped once when compared
    Wrapped(&'a dyn Inspect),
}

/// Flat set of allowed scalars of one [`Family`].
///
/// ```
/// use valider::{AllowedSet, Family};
///
/// let roles = AllowedSet::strings(["admin", "user"]);
/// assert_eq!(roles.family(), Family::String);
///
/// let codes = AllowedSet::from([200i64, 404]);
/// assert_eq!(codes.len(), 2);
/// ```
pub struct AllowedSet<'a> {
    family: Family,
    members: Vec<Member<'a>>,
}

impl<'a> AllowedSet<'a> {
    /// String-family set
    pub fn strings<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cow<'a, str>>,
    {
        Self {
            family: Family::String,
            members: values.into_iter().map(|v| Member::Str(v.into())).collect(),
        }
    }

    /// Integer-family set; any signed width is accepted
    pub fn integers<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<i128>,
    {
        Self {
            family: Family::Integer,
            members: values.into_iter().map(|v| Member::Int(v.into())).collect(),
        }
    }

    /// Set of dynamic elements declared to be of `family`.
    ///
    /// Each element is classified when compared; one that does not classify as
    /// `family` is reported as a bad parameter and skipped.
    pub fn wrapped<I>(family: Family, values: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn Inspect>,
    {
        Self {
            family,
            members: values.into_iter().map(Member::Wrapped).collect(),
        }
    }

    /// Set built from JSON values declared to be of `family`.
    #[cfg(feature = "json")]
    pub fn from_json(family: Family, values: &'a [serde_json::Value]) -> Self {
        Self::wrapped(family, values.iter().map(|v| v as &dyn Inspect))
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// String members, each unwrapped once.
    pub(crate) fn strings_iter(&self) -> impl Iterator<Item = Result<Cow<'_, str>, ParameterError>> {
        self.members.iter().map(|member| match member {
            Member::Str(s) => Ok(Cow::Borrowed(s.as_ref())),
            Member::Int(_) => Err(ParameterError::MalformedMember {
                expected: Family::String,
                found: "integer",
            }),
            Member::Wrapped(value) => match value.shape() {
                Shape::String(s) => Ok(s),
                other => Err(ParameterError::MalformedMember {
                    expected: Family::String,
                    found: other.name(),
                }),
            },
        })
    }

    /// Integer members, each unwrapped once and normalised to `i128`.
    pub(crate) fn integers_iter(&self) -> impl Iterator<Item = Result<i128, ParameterError>> {
        self.members.iter().map(|member| match member {
            Member::Int(n) => Ok(*n),
            Member::Str(_) => Err(ParameterError::MalformedMember {
                expected: Family::Integer,
                found: "string",
            }),
            Member::Wrapped(value) => match value.shape() {
                Shape::Integer(n) => Ok(n),
                other => Err(ParameterError::MalformedMember {
                    expected: Family::Integer,
                    found: other.name(),
                }),
            },
        })
    }

    /// The whole set as a failure operand.
    pub(crate) fn to_operand(&self) -> Operand {
        Operand::Set(
            self.members
                .iter()
                .map(|member| match member {
                    Member::Str(s) => Operand::Text(s.to_string()),
                    Member::Int(n) => Operand::Integer(*n),
                    Member::Wrapped(value) => match value.shape() {
                        Shape::String(s) => Operand::Text(s.into_owned()),
                        Shape::Integer(n) => Operand::Integer(n),
                        other => Operand::Text(format!("<{}>", other.name())),
                    },
                })
                .collect(),
        )
    }
}

impl fmt::Debug for AllowedSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllowedSet")
            .field("family", &self.family)
            .field("members", &self.to_operand())
            .finish()
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for AllowedSet<'a> {
    fn from(values: [&'a str; N]) -> Self {
        Self::strings(values)
    }
}

impl<'a> From<&'a [&'a str]> for AllowedSet<'a> {
    fn from(values: &'a [&'a str]) -> Self {
        Self::strings(values.iter().copied())
    }
}

impl<'a> From<&'a [String]> for AllowedSet<'a> {
    fn from(values: &'a [String]) -> Self {
        Self::strings(values)
    }
}

impl<'a> From<Vec<&'a str>> for AllowedSet<'a> {
    fn from(values: Vec<&'a str>) -> Self {
        Self::strings(values)
    }
}

impl From<Vec<String>> for AllowedSet<'_> {
    fn from(values: Vec<String>) -> Self {
        Self::strings(values)
    }
}

macro_rules! allowed_integers {
    ($($ty:ty),*) => {
        $(
            impl<const N: usize> From<[$ty; N]> for AllowedSet<'_> {
                fn from(values: [$ty; N]) -> Self {
                    Self::integers(values)
                }
            }

            impl From<&[$ty]> for AllowedSet<'_> {
                fn from(values: &[$ty]) -> Self {
                    Self::integers(values.iter().copied())
                }
            }

            impl From<Vec<$ty>> for AllowedSet<'_> {
                fn from(values: Vec<$ty>) -> Self {
                    Self::integers(values)
                }
            }
        )*
    };
}

allowed_integers!(i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_iter() {
        let set = AllowedSet::strings(vec!["a".to_string(), "b".to_string()]);
        let members: Vec<_> = set.strings_iter().map(|m| m.unwrap().into_owned()).collect();
        assert_eq!(members, vec!["a", "b"]);
    }

    #[test]
    fn test_mixed_widths_normalize() {
        let narrow = AllowedSet::from([1i8, 2, 3]);
        let wide = AllowedSet::from(vec![1i64, 2, 3]);

        let narrow: Vec<_> = narrow.integers_iter().map(Result::unwrap).collect();
        let wide: Vec<_> = wide.integers_iter().map(Result::unwrap).collect();
        assert_eq!(narrow, wide);
    }

    #[test]
    fn test_wrapped_members_unwrap_once() {
        let a = "hola";
        let b = 3i32;
        let set = AllowedSet::wrapped(Family::String, [&a as &dyn Inspect, &b as &dyn Inspect]);

        let members: Vec<_> = set.strings_iter().collect();
        assert_eq!(members[0].as_ref().unwrap(), "hola");
        assert!(matches!(
            members[1],
            Err(ParameterError::MalformedMember { found: "integer", .. })
        ));
    }

    #[test]
    fn test_operand() {
        let set = AllowedSet::from(["x", "y"]);
        assert_eq!(set.to_operand(), Operand::Set(vec!["x".into(), "y".into()]));
    }
}
