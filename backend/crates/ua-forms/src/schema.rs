use crate::rules::MIN_PASSWORD_LENGTH;
use crate::{FormValues, Rule, Violation};

use std::collections::BTreeMap;

use ua_core::Field;

/// Violations keyed by field; at most one per field
pub type FieldErrors = BTreeMap<Field, Violation>;

/// Ordered rules for one field. The first violated rule wins.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: Field,
    pub rules: &'static [Rule],
}

const EMAIL_RULES: FieldRules = FieldRules {
    field: Field::Email,
    rules: &[Rule::Required, Rule::Email],
};

const PASSWORD_RULES: FieldRules = FieldRules {
    field: Field::Password,
    rules: &[Rule::Required, Rule::MinLength(MIN_PASSWORD_LENGTH)],
};

pub static LOGIN_SCHEMA: &[FieldRules] = &[EMAIL_RULES, PASSWORD_RULES];

pub static REGISTER_SCHEMA: &[FieldRules] = &[
    FieldRules {
        field: Field::Name,
        rules: &[Rule::Required],
    },
    EMAIL_RULES,
    PASSWORD_RULES,
    FieldRules {
        field: Field::ConfirmPassword,
        rules: &[Rule::Required, Rule::Equals(Field::Password)],
    },
];

/// First violated rule for a single field, if any
pub fn validate_field<V: FormValues>(entry: &FieldRules, values: &V) -> Option<Violation> {
    entry
        .rules
        .iter()
        .find_map(|rule| rule.check(entry.field, values))
}

/// Evaluate every field of a schema independently
pub fn validate<V: FormValues>(schema: &[FieldRules], values: &V) -> FieldErrors {
    schema
        .iter()
        .filter_map(|entry| validate_field(entry, values).map(|v| (entry.field, v)))
        .collect()
}
