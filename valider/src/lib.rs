//! Field-level validation with recursive membership and date checks
//!
//! A [`Validator`] borrows a [`ValidationErrors`] sink and hands out one
//! checker per field. Checker rules chain, and every failure is appended to
//! the sink under the field name; nothing is returned early and nothing
//! panics. A record is valid when its sink is empty.
//!
//! Scalar rules are optional unless present: apart from `required`, a rule
//! applied to an empty string, a zero number or `false` records nothing.
//!
//! # Examples
//!
//! ## Scalar fields
//!
//! ```
//! use valider::{FailureKind, ValidationErrors, Validator};
//!
//! let mut errors = ValidationErrors::new();
//! let mut v = Validator::new(&mut errors);
//!
//! v.string("john@example", "email").required().email();
//! v.string("", "nickname").range(3, 16);
//! v.int(42, "age").range(18, 130);
//!
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.get("email")[0].kind(), FailureKind::NotMatched);
//! ```
//!
//! ## Nested containers
//!
//! Membership and date rules walk every element of a sequence, and every
//! value of a mapping, however deeply nested.
//!
//! ```
//! use std::collections::HashMap;
//! use valider::{FailureKind, ValidationErrors, Validator};
//!
//! let mut errors = ValidationErrors::new();
//! let mut v = Validator::new(&mut errors);
//!
//! let greetings = vec![HashMap::from([("hola", "adioss"), ("adios", "hola")])];
//! v.slice(&greetings, "greetings").one_of(["hola", "adios"]);
//!
//! let schedule = HashMap::from([("start", vec!["2024-01-15"]), ("end", vec!["2024-13-40"])]);
//! v.map(&schedule, "schedule").required_keys(&["start", "end"]).date("%Y-%m-%d");
//!
//! assert_eq!(errors.get("greetings")[0].kind(), FailureKind::NotInSet);
//! assert_eq!(errors.get("schedule")[0].kind(), FailureKind::NotDateFormat);
//! ```
//!
//! ## Validating a type
//!
//! ```
//! use valider::{Validate, Validator};
//!
//! struct Invite {
//!     code: String,
//!     seats: i64,
//! }
//!
//! impl Validate for Invite {
//!     fn validate(&self, v: &mut Validator<'_>) {
//!         v.string(&self.code, "code").required().len(8);
//!         v.int(self.seats, "seats").range(1, 10);
//!     }
//! }
//!
//! let invite = Invite { code: "ABCD1234".to_string(), seats: 12 };
//! let errors = invite.validated().unwrap_err();
//! assert_eq!(errors.to_string(), "seats: is out of range (should be [1, 10])\n");
//! ```

mod allowed;
mod checkers;
mod containment;
mod date;
mod errors;
pub mod patterns;
mod traits;
mod validator;
mod value;
mod walk;

pub use allowed::{AllowedSet, Family};
pub use checkers::{
    BoolChecker, BytesChecker, FloatChecker, IntChecker, MapChecker, SliceChecker, StrChecker,
};
pub use containment::check_in;
pub use date::{DateLayout, check_date_format};
pub use errors::{FailureKind, Operand, ParameterError, ValidationError, ValidationErrors};
pub use traits::Validate;
pub use validator::Validator;
pub use value::{Elements, Entries, Inspect, Shape};
