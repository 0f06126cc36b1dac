mod models;

use crate::User;

/// Build a stored record the way the remote store returns it
pub(crate) fn stored_user(id: i64, email: &str, password: &str, activate: bool) -> User {
    User {
        id,
        name: format!("user-{id}"),
        email: email.to_string(),
        password: password.to_string(),
        activate,
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        updated_at: "2024-01-01T00:00:00.000Z".to_string(),
    }
}
