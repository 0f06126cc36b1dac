use serde::Serialize;

/// Body of `POST /users`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}
