//! User record as held by the remote user store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user record owned by the remote store.
///
/// The client only ever holds one of these for the duration of a single
/// request/response cycle. The password is stored and compared in plaintext
/// by the store; it is accepted on the way in but never serialized back out
/// and never shown in `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier
    pub id: i64,
    pub name: String,
    /// Unique by convention only; the client never enforces it
    pub email: String,
    /// Empty when the store leaves it out, which never matches a login
    #[serde(default, skip_serializing)]
    pub password: String,
    /// Gates whether a matched, password-correct user may log in. Missing
    /// means disabled.
    #[serde(default)]
    pub activate: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl User {
    /// Check if the account may log in
    pub fn is_active(&self) -> bool {
        self.activate
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("activate", &self.activate)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
