pub mod auth;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use auth::{AuthService, authenticate};
pub use error::{CoreError, Result};
pub use models::auth_failure::AuthFailure;
pub use models::field::Field;
pub use models::login_request::LoginRequest;
pub use models::new_user::NewUser;
pub use models::operation::Operation;
pub use models::operation_result::OperationResult;
pub use models::page::Page;
pub use models::register_request::RegisterRequest;
pub use models::user::User;
