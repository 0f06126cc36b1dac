pub mod auth_failure;
pub mod field;
pub mod login_request;
pub mod new_user;
pub mod operation;
pub mod operation_result;
pub mod page;
pub mod register_request;
pub mod user;
