use crate::NewUser;

use serde::{Deserialize, Serialize};

/// Values collected by the registration form.
///
/// `confirm_password` only exists to be checked against `password` by the
/// form layer. It is dropped by [`RegisterRequest::to_new_user`] and never
/// reaches the remote store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Build the creation payload, stripping the confirmation field
    pub fn to_new_user(&self) -> NewUser<'_> {
        NewUser {
            name: &self.name,
            email: &self.email,
            password: &self.password,
        }
    }
}
