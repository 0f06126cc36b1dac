use crate::tests::stored_user;
use crate::{AuthFailure, OperationResult};

#[test]
fn test_success_serializes_user_only() {
    let result = OperationResult::User(stored_user(1, "a@x.com", "secret1", true));
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["user"]["email"], "a@x.com");
    assert!(value.get("error").is_none());
}

#[test]
fn test_failure_serializes_message_only() {
    let result = OperationResult::Error(AuthFailure::NotFound);
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["error"], "user not found, please register.");
    assert!(value.get("user").is_none());
}

#[test]
fn test_from_result_round_trips() {
    let ok: OperationResult = Ok(stored_user(2, "b@x.com", "pw1234", true)).into();
    assert!(ok.is_success());
    assert_eq!(ok.user().map(|u| u.id), Some(2));
    assert_eq!(ok.error(), None);

    let failed: OperationResult = Err(AuthFailure::AccountDisabled).into();
    assert!(!failed.is_success());
    assert!(failed.user().is_none());
    assert_eq!(
        failed.into_result().unwrap_err(),
        AuthFailure::AccountDisabled
    );
}
