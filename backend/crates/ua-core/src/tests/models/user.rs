use crate::User;

use serde_json::json;

#[test]
fn test_user_deserializes_store_record() {
    let user: User = serde_json::from_value(json!({
        "id": 3,
        "name": "Ana",
        "email": "ana@x.com",
        "password": "secret1",
        "activate": true,
        "createdAt": "2024-05-01T10:00:00.000Z",
        "updatedAt": "2024-05-02T10:00:00.000Z"
    }))
    .unwrap();

    assert_eq!(user.id, 3);
    assert_eq!(user.password, "secret1");
    assert!(user.is_active());
    assert_eq!(user.created_at, "2024-05-01T10:00:00.000Z");
    assert_eq!(user.updated_at, "2024-05-02T10:00:00.000Z");
}

#[test]
fn test_user_missing_timestamps_default_to_empty() {
    let user: User = serde_json::from_value(json!({
        "id": 1,
        "name": "Ana",
        "email": "ana@x.com",
        "password": "secret1",
        "activate": false
    }))
    .unwrap();

    assert!(user.created_at.is_empty());
    assert!(!user.is_active());
}

#[test]
fn test_user_missing_password_and_activate_default() {
    let user: User = serde_json::from_value(json!({
        "id": 9,
        "name": "Ana",
        "email": "ana@x.com"
    }))
    .unwrap();

    assert!(user.password.is_empty());
    assert!(!user.is_active());
}

#[test]
fn test_user_serialization_omits_password() {
    let user = crate::tests::stored_user(1, "ana@x.com", "secret1", true);
    let value = serde_json::to_value(&user).unwrap();

    assert!(value.get("password").is_none());
    assert_eq!(value["email"], "ana@x.com");
    assert_eq!(value["createdAt"], "2024-01-01T00:00:00.000Z");
}

#[test]
fn test_user_debug_redacts_password() {
    let user = crate::tests::stored_user(1, "ana@x.com", "secret1", true);
    let debug = format!("{:?}", user);

    assert!(!debug.contains("secret1"));
    assert!(debug.contains("<redacted>"));
}
