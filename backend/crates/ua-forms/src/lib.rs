//! Client-side form layer: declarative per-field rules, touched-state
//! tracking and submission gating for the login and registration forms.

mod form_state;
mod form_values;
mod rules;
mod schema;
mod submission;
mod violation;

#[cfg(test)]
mod tests;

pub use form_state::{FormState, LoginForm, RegisterForm};
pub use form_values::FormValues;
pub use rules::{MIN_PASSWORD_LENGTH, Rule, is_email};
pub use schema::{FieldErrors, FieldRules, LOGIN_SCHEMA, REGISTER_SCHEMA, validate, validate_field};
pub use submission::{Notice, REGISTRATION_SUCCESS, Submission};
pub use violation::Violation;
