
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use ua_core::{AuthService, LoginRequest, OperationResult, RegisterRequest, User};

/// In-process stand-in for the remote store that records every call
pub(crate) struct RecordingService {
    pub(crate) result: OperationResult,
    pub(crate) logins: AtomicUsize,
    pub(crate) registrations: AtomicUsize,
}

impl RecordingService {
    pub(crate) fn returning(result: OperationResult) -> Self {
        Self {
            result,
            logins: AtomicUsize::new(0),
            registrations: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.logins.load(Ordering::SeqCst) + self.registrations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthService for RecordingService {
    async fn login(&self, _request: &LoginRequest) -> OperationResult {
        self.logins.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    async fn register(&self, _request: &RegisterRequest) -> OperationResult {
        self.registrations.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

pub(crate) fn user(email: &str, password: &str) -> User {
    User {
        id: 1,
        name: "A".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        activate: true,
        created_at: String::new(),
        updated_at: String::new(),
    }
}
