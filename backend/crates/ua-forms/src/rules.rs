use crate::{FormValues, Violation};

use std::sync::LazyLock;

use regex::Regex;
use ua_core::Field;

pub const MIN_PASSWORD_LENGTH: usize = 6;

// HTML5 "valid email address" shape; single-label domains such as `localhost` pass.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Check that a value has the shape of an email address
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// A single declarative constraint on a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty
    Required,
    /// Value must look like an email address
    Email,
    /// Value must have at least this many UTF-16 code units, the length a
    /// browser reports for the same input
    MinLength(usize),
    /// Value must equal another field of the same form exactly
    Equals(Field),
}

impl Rule {
    /// Evaluate the rule for `field`. Pure: no I/O, no state.
    pub fn check<V: FormValues>(&self, field: Field, values: &V) -> Option<Violation> {
        let value = values.value(field);
        match *self {
            Self::Required => value.is_empty().then_some(Violation::Required(field)),
            Self::Email => (!is_email(value)).then_some(Violation::InvalidEmail),
            Self::MinLength(min) => {
                (value.encode_utf16().count() < min).then_some(Violation::TooShort { field, min })
            }
            Self::Equals(other) => (value != values.value(other)).then_some(Violation::Mismatch),
        }
    }
}
