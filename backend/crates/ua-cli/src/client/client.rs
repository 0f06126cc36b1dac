use crate::{CliClientResult, ClientError};

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use ua_config::{ApiConfig, ConfigErrorResult};
use ua_core::{
    AuthFailure, AuthService, LoginRequest, NewUser, Operation, OperationResult, RegisterRequest,
    User, authenticate,
};

/// Maximum number of body bytes echoed into a status error
const MAX_ERROR_BODY_LEN: usize = 200;

/// HTTP client for the remote user store (`/users`)
pub struct Client {
    pub base_url: String,
    /// Ask the store for inactive accounts as well (`?activate=all`)
    pub include_inactive: bool,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - User store URL (e.g., "http://127.0.0.1:3001")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            include_inactive: true,
            client: ReqwestClient::new(),
        }
    }

    /// Create a client from the `[api]` config section
    pub fn from_config(config: &ApiConfig) -> ConfigErrorResult<Self> {
        let mut client = Self::new(config.base_url()?);
        client.include_inactive = config.include_inactive;
        Ok(client)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client.request(method, &url)
    }

    /// Execute request, treating any non-2xx status as a failure
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let mut body = body;
            if body.len() > MAX_ERROR_BODY_LEN {
                let mut cut = MAX_ERROR_BODY_LEN;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(ClientError::status(status.as_u16(), body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// List every user record the store will return
    pub async fn list_users(&self) -> CliClientResult<Vec<User>> {
        let path = if self.include_inactive {
            "/users?activate=all"
        } else {
            "/users"
        };
        let req = self.request(Method::GET, path);
        self.execute(req).await
    }

    /// Create a user record
    pub async fn create_user(&self, user: &NewUser<'_>) -> CliClientResult<User> {
        let req = self.request(Method::POST, "/users").json(user);
        self.execute(req).await
    }
}

#[async_trait]
impl AuthService for Client {
    /// Fetch the full listing and scan it for the requested email.
    async fn login(&self, request: &LoginRequest) -> OperationResult {
        match self.list_users().await {
            Ok(users) => {
                debug!("Scanning {} user record(s)", users.len());
                authenticate(users, request).into()
            }
            Err(e) => {
                warn!("Login request failed: {}", e);
                OperationResult::Error(AuthFailure::Transport(Operation::Login))
            }
        }
    }

    /// Create the account. Duplicate emails are the store's concern.
    async fn register(&self, request: &RegisterRequest) -> OperationResult {
        match self.create_user(&request.to_new_user()).await {
            Ok(user) => OperationResult::User(user),
            Err(e) => {
                warn!("Registration request failed: {}", e);
                OperationResult::Error(AuthFailure::Transport(Operation::Register))
            }
        }
    }
}
