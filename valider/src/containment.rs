// Recursive membership checks

use crate::errors::FieldSink;
use crate::walk::{self, Leaf};
use crate::{AllowedSet, FailureKind, Family, Inspect, ParameterError, ValidationErrors};
use tracing::trace;

/// Check that every leaf of `subject` is a member of `allowed`.
///
/// A subject may be a scalar or an arbitrarily nested tree of sequences and
/// mappings; only mapping values are compared, never keys. Failures are
/// appended to `errors` under `field`:
///
/// - a string leaf needs a [`Family::String`] set, an integer leaf a
///   [`Family::Integer`] set; any other pairing is a bad parameter, never a
///   membership miss;
/// - a leaf that matches no member records exactly one `NotInSet`;
/// - floats, booleans, unsigned integers and nil leaves are unsupported.
///
/// Empty containers are vacuously valid.
///
/// ```
/// use valider::{check_in, AllowedSet, FailureKind, ValidationErrors};
///
/// let mut errors = ValidationErrors::new();
/// let greetings = vec![vec!["hola"], vec!["adios", "hi"]];
///
/// check_in(&greetings, &AllowedSet::from(["hola", "adios"]), "greetings", &mut errors);
///
/// let failures = errors.get("greetings");
/// assert_eq!(failures.len(), 1);
/// assert_eq!(failures[0].kind(), FailureKind::NotInSet);
/// ```
pub fn check_in(
    subject: &dyn Inspect,
    allowed: &AllowedSet<'_>,
    field: &str,
    errors: &mut ValidationErrors,
) {
    let mut sink = FieldSink::new(field, errors);
    contains(subject, allowed, &mut sink);
}

pub(crate) fn contains(subject: &dyn Inspect, allowed: &AllowedSet<'_>, sink: &mut FieldSink<'_>) {
    trace!(
        field = sink.field(),
        family = %allowed.family(),
        members = allowed.len(),
        "checking membership"
    );

    walk::for_each_leaf(subject, |leaf| match leaf {
        Leaf::String(value) => {
            if !family_matches(Family::String, allowed, sink) {
                return;
            }
            let mut found = false;
            for member in allowed.strings_iter() {
                match member {
                    Ok(candidate) => found |= candidate == value,
                    Err(err) => sink.bad_parameter(&err),
                }
            }
            if !found {
                sink.fail_with(FailureKind::NotInSet, allowed.to_operand());
            }
        }
        Leaf::Integer(value) => {
            if !family_matches(Family::Integer, allowed, sink) {
                return;
            }
            let mut found = false;
            for member in allowed.integers_iter() {
                match member {
                    Ok(candidate) => found |= candidate == value,
                    Err(err) => sink.bad_parameter(&err),
                }
            }
            if !found {
                sink.fail_with(FailureKind::NotInSet, allowed.to_operand());
            }
        }
        unsupported @ (Leaf::Other(_) | Leaf::Nil) => {
            sink.fail_with(FailureKind::UnsupportedShape, unsupported.name());
        }
    });
}

fn family_matches(leaf: Family, allowed: &AllowedSet<'_>, sink: &mut FieldSink<'_>) -> bool {
    if allowed.family() == leaf {
        return true;
    }
    sink.bad_parameter(&ParameterError::FamilyMismatch {
        expected: allowed.family(),
        found: leaf,
    });
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn kinds(errors: &ValidationErrors, field: &str) -> Vec<FailureKind> {
        errors.get(field).iter().map(|e| e.kind()).collect()
    }

    #[test]
    fn test_flat_sequence() {
        let mut errors = ValidationErrors::new();
        check_in(&["hola", "adios"], &AllowedSet::from(["hi", "bye"]), "In", &mut errors);
        assert_eq!(kinds(&errors, "In"), vec![FailureKind::NotInSet; 2]);

        let mut errors = ValidationErrors::new();
        check_in(&["hola", "adios"], &AllowedSet::from(["hola", "adios"]), "In", &mut errors);
        assert!(errors.is_valid());
    }

    #[test]
    fn test_nested_sequence() {
        let mut errors = ValidationErrors::new();
        check_in(&vec![vec!["hola"]], &AllowedSet::from(["hola", "adios"]), "In", &mut errors);
        assert!(errors.is_valid());
    }

    #[test]
    fn test_sequence_of_mappings() {
        let allowed = AllowedSet::from(["hola", "adios"]);

        let mut errors = ValidationErrors::new();
        let subject = vec![HashMap::from([("hola", "adioss"), ("adios", "hola")])];
        check_in(&subject, &allowed, "In", &mut errors);
        assert_eq!(kinds(&errors, "In"), vec![FailureKind::NotInSet]);

        // keys are never checked
        let mut errors = ValidationErrors::new();
        let subject = vec![HashMap::from([("holaa", "adios"), ("adioss", "hola")])];
        check_in(&subject, &allowed, "In", &mut errors);
        assert!(errors.is_valid());
    }

    #[test]
    fn test_integer_widths_compare_equal() {
        let mut errors = ValidationErrors::new();
        check_in(&vec![1i32, 2, 3], &AllowedSet::from([1i64, 2, 3]), "codes", &mut errors);
        check_in(&vec![vec![3i8]], &AllowedSet::from([3i16]), "codes", &mut errors);
        assert!(errors.is_valid());
    }

    #[test]
    fn test_family_mismatch_is_bad_parameter() {
        let mut errors = ValidationErrors::new();
        check_in(&vec![7i32], &AllowedSet::from(["7"]), "f", &mut errors);
        check_in(&vec!["7"], &AllowedSet::from([7i64]), "f", &mut errors);
        assert_eq!(kinds(&errors, "f"), vec![FailureKind::BadParameter; 2]);
    }

    #[test]
    fn test_unsupported_leaves() {
        let mut errors = ValidationErrors::new();
        let subject: Vec<Option<f64>> = vec![Some(1.5), None];
        check_in(&subject, &AllowedSet::from(["x"]), "f", &mut errors);
        assert_eq!(kinds(&errors, "f"), vec![FailureKind::UnsupportedShape; 2]);
        assert_eq!(
            errors.get("f")[0].should_be(),
            Some(&crate::Operand::Text("float".to_string()))
        );
    }

    #[test]
    fn test_malformed_member_keeps_scanning() {
        let a = "hola";
        let b = 1.5f64;
        let c = "adios";
        let allowed = AllowedSet::wrapped(
            Family::String,
            [&a as &dyn Inspect, &b as &dyn Inspect, &c as &dyn Inspect],
        );

        let mut errors = ValidationErrors::new();
        check_in(&vec!["adios"], &allowed, "f", &mut errors);
        assert_eq!(kinds(&errors, "f"), vec![FailureKind::BadParameter]);

        let mut errors = ValidationErrors::new();
        check_in(&vec!["nope"], &allowed, "f", &mut errors);
        assert_eq!(
            kinds(&errors, "f"),
            vec![FailureKind::BadParameter, FailureKind::NotInSet]
        );
    }

    #[test]
    fn test_scalar_subject() {
        let mut errors = ValidationErrors::new();
        check_in(&"admin", &AllowedSet::from(["admin"]), "role", &mut errors);
        check_in(&"root", &AllowedSet::from(["admin"]), "role", &mut errors);
        assert_eq!(kinds(&errors, "role"), vec![FailureKind::NotInSet]);
    }

    #[test]
    fn test_empty_subjects_are_vacuous() {
        let mut errors = ValidationErrors::new();
        check_in(&Vec::<String>::new(), &AllowedSet::from(["x"]), "f", &mut errors);
        check_in(&HashMap::<String, i32>::new(), &AllowedSet::from([1i32]), "f", &mut errors);
        assert!(errors.is_valid());
    }

    #[test]
    fn test_empty_allowed_set_rejects_every_leaf() {
        let mut errors = ValidationErrors::new();
        check_in(&["a", "b"], &AllowedSet::strings(Vec::<&str>::new()), "f", &mut errors);
        assert_eq!(kinds(&errors, "f"), vec![FailureKind::NotInSet; 2]);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_subject_and_set() {
        let subject = serde_json::json!({"a": ["x", "y"], "b": {"c": "z"}});
        let members = vec![serde_json::json!("x"), serde_json::json!("y")];

        let mut errors = ValidationErrors::new();
        check_in(&subject, &AllowedSet::from_json(Family::String, &members), "f", &mut errors);
        assert_eq!(kinds(&errors, "f"), vec![FailureKind::NotInSet]);
    }
}
