use crate::{FieldRules, LOGIN_SCHEMA, REGISTER_SCHEMA};

use futures::future::BoxFuture;
use ua_core::{AuthService, Field, LoginRequest, OperationResult, Page, RegisterRequest};

/// Values behind one form: which fields it has, how they are validated and
/// which remote operation a valid submission triggers.
pub trait FormValues: Default + Send + Sync {
    /// Page hosting this form
    const PAGE: Page;

    /// Ordered validation rules, one entry per field
    fn schema() -> &'static [FieldRules];

    /// Current value of `field`. Fields the form does not have read as empty.
    fn value(&self, field: Field) -> &str;

    /// Mutable access to a field, `None` if the form does not have it
    fn value_mut(&mut self, field: Field) -> Option<&mut String>;

    /// Send the values to the remote store
    fn dispatch<'a>(&'a self, service: &'a dyn AuthService) -> BoxFuture<'a, OperationResult>;

    fn has_field(field: Field) -> bool {
        Self::schema().iter().any(|entry| entry.field == field)
    }
}

impl FormValues for LoginRequest {
    const PAGE: Page = Page::Login;

    fn schema() -> &'static [FieldRules] {
        LOGIN_SCHEMA
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Name | Field::ConfirmPassword => "",
        }
    }

    fn value_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::Name | Field::ConfirmPassword => None,
        }
    }

    fn dispatch<'a>(&'a self, service: &'a dyn AuthService) -> BoxFuture<'a, OperationResult> {
        service.login(self)
    }
}

impl FormValues for RegisterRequest {
    const PAGE: Page = Page::Register;

    fn schema() -> &'static [FieldRules] {
        REGISTER_SCHEMA
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    fn value_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
        }
    }

    fn dispatch<'a>(&'a self, service: &'a dyn AuthService) -> BoxFuture<'a, OperationResult> {
        service.register(self)
    }
}
