use crate::{ConfigError, ConfigErrorResult, DEFAULT_INCLUDE_INACTIVE};

use serde::Deserialize;
use url::Url;

/// Where the remote user store lives and how it is queried
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the user store. Deployment-specific, so there is no default.
    pub base_url: Option<String>,
    /// List inactive accounts too (`GET /users?activate=all`) so disabled
    /// users get a distinct message instead of "not found"
    pub include_inactive: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            include_inactive: DEFAULT_INCLUDE_INACTIVE,
        }
    }
}

impl ApiConfig {
    /// Base URL, required by anything that talks to the store
    pub fn base_url(&self) -> ConfigErrorResult<&str> {
        self.base_url
            .as_deref()
            .ok_or_else(|| ConfigError::api("api.base_url is not set (UA_API_BASE_URL)"))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(ref raw) = self.base_url else {
            return Ok(());
        };

        let url = Url::parse(raw)
            .map_err(|e| ConfigError::api(format!("api.base_url {raw:?} is not a URL: {e}")))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::api(format!(
                "api.base_url must use http or https, got {other}"
            ))),
        }
    }
}
