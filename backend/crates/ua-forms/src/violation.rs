use ua_core::Field;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Reason a single field is rejected. `Display` is the helper text shown
/// under the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("{} is required", .0.label())]
    Required(Field),

    #[error("enter a valid email")]
    InvalidEmail,

    #[error("{} must be at least {min} characters", .field.label())]
    TooShort { field: Field, min: usize },

    #[error("passwords do not match")]
    Mismatch,
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
