use crate::FieldErrors;

use serde::Serialize;
use ua_core::{AuthFailure, OperationResult, User};

pub const REGISTRATION_SUCCESS: &str = "registration successful!";

/// Outcome of one submit attempt.
///
/// Serializes as `{"errors": {...}}`, `{"error": "..."}` or `{"user": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Submission {
    /// Local validation failed; nothing was sent
    #[serde(rename = "errors")]
    Blocked(FieldErrors),

    #[serde(rename = "error")]
    Failed(AuthFailure),

    #[serde(rename = "user")]
    Succeeded(User),
}

impl Submission {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

impl From<OperationResult> for Submission {
    fn from(result: OperationResult) -> Self {
        match result {
            OperationResult::User(user) => Self::Succeeded(user),
            OperationResult::Error(failure) => Self::Failed(failure),
        }
    }
}

/// The single inline message shown after a submission reaches the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    Error(String),
    Success(String),
}
