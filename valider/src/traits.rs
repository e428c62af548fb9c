// Validation traits

use crate::{ValidationErrors, Validator};

/// Trait for types that describe their own checks
pub trait Validate {
    /// Run every check for this value through `validator`
    fn validate(&self, validator: &mut Validator<'_>);

    /// Validate into a fresh sink and return it if anything failed
    fn validated(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.validate(&mut Validator::new(&mut errors));

        if errors.is_valid() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureKind;
    use std::collections::HashMap;

    struct Signup {
        email: String,
        age: i64,
        tags: Vec<String>,
        meta: HashMap<String, String>,
    }

    impl Validate for Signup {
        fn validate(&self, v: &mut Validator<'_>) {
            v.string(&self.email, "email").required().email();
            v.int(self.age, "age").required().range(18, 130);
            v.slice(&self.tags, "tags").range(0, 3).one_of(["rust", "go"]);
            v.map(&self.meta, "meta").required_keys(&["source"]);
        }
    }

    #[test]
    fn test_validated_ok() {
        let signup = Signup {
            email: "ana@example.com".to_string(),
            age: 30,
            tags: vec!["rust".to_string()],
            meta: HashMap::from([("source".to_string(), "ad".to_string())]),
        };
        assert!(signup.validated().is_ok());
    }

    #[test]
    fn test_validated_err() {
        let signup = Signup {
            email: String::new(),
            age: 12,
            tags: vec!["java".to_string()],
            meta: HashMap::new(),
        };
        let errors = signup.validated().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("email")[0].kind(), FailureKind::Required);
        assert_eq!(errors.get("meta")[0].kind(), FailureKind::NotFoundKey);
    }
}
