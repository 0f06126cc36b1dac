use crate::{NewUser, RegisterRequest};

#[test]
fn test_to_new_user_strips_confirmation() {
    let request = RegisterRequest::new("A", "a@x.com", "secret1", "secret1");

    assert_eq!(
        request.to_new_user(),
        NewUser {
            name: "A",
            email: "a@x.com",
            password: "secret1",
        }
    );

    let body = serde_json::to_value(request.to_new_user()).unwrap();
    assert_eq!(body.as_object().unwrap().len(), 3);
    assert!(body.get("confirmPassword").is_none());
}
