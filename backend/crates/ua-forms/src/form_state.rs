use crate::{FieldErrors, FormValues, Notice, REGISTRATION_SUCCESS, Submission, validate};

use std::collections::BTreeSet;
use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use ua_core::{AuthService, CoreError, Field, LoginRequest, Page, RegisterRequest};

pub type LoginForm = FormState<LoginRequest>;
pub type RegisterForm = FormState<RegisterRequest>;

/// Live state of one form.
///
/// Each field moves from untouched to touched on its first interaction and
/// never back. Errors are computed from the current values on every call;
/// only touched fields expose them.
#[derive(Debug, Clone)]
pub struct FormState<V: FormValues> {
    values: V,
    touched: BTreeSet<Field>,
    notice: Option<Notice>,
    page: Page,
}

impl<V: FormValues> Default for FormState<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: FormValues> FormState<V> {
    pub fn new() -> Self {
        Self::with_values(V::default())
    }

    /// Start from pre-filled values. Nothing is touched yet.
    pub fn with_values(values: V) -> Self {
        Self {
            values,
            touched: BTreeSet::new(),
            notice: None,
            page: V::PAGE,
        }
    }

    pub fn values(&self) -> &V {
        &self.values
    }

    /// Change a field's value, marking it touched
    #[track_caller]
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> ua_core::Result<()> {
        let Some(slot) = self.values.value_mut(field) else {
            return Err(CoreError::InvalidField {
                value: field.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };
        *slot = value.into();
        self.touched.insert(field);
        Ok(())
    }

    /// Mark a field touched without changing it (focus left the field)
    pub fn blur(&mut self, field: Field) {
        if V::has_field(field) {
            self.touched.insert(field);
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Violations for every field, touched or not
    pub fn errors(&self) -> FieldErrors {
        validate(V::schema(), &self.values)
    }

    /// Violations the user should see right now
    pub fn visible_errors(&self) -> FieldErrors {
        let mut errors = self.errors();
        errors.retain(|field, _| self.is_touched(*field));
        errors
    }

    /// Helper text under a field, if any
    pub fn error_text(&self, field: Field) -> Option<String> {
        self.visible_errors().get(&field).map(ToString::to_string)
    }

    pub fn can_submit(&self) -> bool {
        self.errors().is_empty()
    }

    /// Inline message from the last submission that reached the store
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Page the user should be on after the last submission
    pub fn page(&self) -> Page {
        self.page
    }

    /// Validate and, if every field passes, send the values to `service`.
    ///
    /// All fields become touched so their errors show. A blocked submission
    /// makes no remote call. The previous notice is cleared on every attempt.
    pub async fn submit(&mut self, service: &dyn AuthService) -> Submission {
        self.notice = None;
        self.touched.extend(V::schema().iter().map(|entry| entry.field));

        let errors = self.errors();
        if !errors.is_empty() {
            debug!("{} form blocked: {} invalid field(s)", V::PAGE, errors.len());
            return Submission::Blocked(errors);
        }

        let submission = Submission::from(self.values.dispatch(service).await);

        match &submission {
            Submission::Succeeded(_) => {
                if V::PAGE == Page::Register {
                    self.notice = Some(Notice::Success(REGISTRATION_SUCCESS.to_string()));
                }
                self.page = V::PAGE.on_success();
            }
            Submission::Failed(failure) => {
                self.notice = Some(Notice::Error(failure.to_string()));
            }
            Submission::Blocked(_) => {}
        }

        submission
    }
}
