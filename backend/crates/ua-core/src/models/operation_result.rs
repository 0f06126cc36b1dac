use crate::{AuthFailure, User};

use serde::Serialize;

/// Outcome of a core operation.
///
/// Serializes as `{"user": {...}}` or `{"error": "<message>"}`. Exactly one
/// side is ever populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationResult {
    User(User),
    Error(AuthFailure),
}

impl OperationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::User(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::User(user) => Some(user),
            Self::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<AuthFailure> {
        match self {
            Self::User(_) => None,
            Self::Error(failure) => Some(*failure),
        }
    }

    pub fn into_result(self) -> Result<User, AuthFailure> {
        match self {
            Self::User(user) => Ok(user),
            Self::Error(failure) => Err(failure),
        }
    }
}

impl From<Result<User, AuthFailure>> for OperationResult {
    fn from(result: Result<User, AuthFailure>) -> Self {
        match result {
            Ok(user) => Self::User(user),
            Err(failure) => Self::Error(failure),
        }
    }
}
