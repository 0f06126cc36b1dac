use crate::{AuthFailure, Operation};

#[test]
fn test_auth_failure_messages() {
    assert_eq!(
        AuthFailure::NotFound.to_string(),
        "user not found, please register."
    );
    assert_eq!(
        AuthFailure::InvalidCredentials.to_string(),
        "incorrect password, try again."
    );
    assert_eq!(
        AuthFailure::AccountDisabled.to_string(),
        "account disabled, contact support."
    );
    assert_eq!(
        AuthFailure::Transport(Operation::Login).to_string(),
        "login failed, try again."
    );
    assert_eq!(
        AuthFailure::Transport(Operation::Register).to_string(),
        "registration failed, try again."
    );
}
