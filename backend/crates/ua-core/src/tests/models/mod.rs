mod auth_failure;
mod field;
mod operation_result;
mod page;
mod register_request;
mod user;
