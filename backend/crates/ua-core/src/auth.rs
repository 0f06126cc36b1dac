//! Login matching and the seam between the form layer and the remote store.

use crate::{AuthFailure, LoginRequest, OperationResult, RegisterRequest, User};

use async_trait::async_trait;

/// The two operations the presentation layer can submit.
///
/// Implementations must never return an error to the caller: every failure
/// is folded into [`OperationResult::Error`].
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> OperationResult;

    async fn register(&self, request: &RegisterRequest) -> OperationResult;
}

/// Scan a user listing for the login request.
///
/// First record with an exactly equal email wins (case-sensitive, no
/// trimming). Checks run in order: existence, password, activation.
///
/// Passwords are compared in plaintext because that is what the remote store
/// holds.
pub fn authenticate(users: Vec<User>, request: &LoginRequest) -> Result<User, AuthFailure> {
    let user = users
        .into_iter()
        .find(|u| u.email == request.email)
        .ok_or(AuthFailure::NotFound)?;

    if user.password != request.password {
        return Err(AuthFailure::InvalidCredentials);
    }

    if !user.is_active() {
        return Err(AuthFailure::AccountDisabled);
    }

    Ok(user)
}
