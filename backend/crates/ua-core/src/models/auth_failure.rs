use crate::Operation;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Every way a login or registration can fail, as seen by the presentation
/// layer. The `Display` text is the exact message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    #[error("user not found, please register.")]
    NotFound,

    #[error("incorrect password, try again.")]
    InvalidCredentials,

    #[error("account disabled, contact support.")]
    AccountDisabled,

    /// Network error, non-2xx status or malformed body. Duplicate-email
    /// rejections from the store land here too.
    #[error("{0} failed, try again.")]
    Transport(Operation),
}

impl Serialize for AuthFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
