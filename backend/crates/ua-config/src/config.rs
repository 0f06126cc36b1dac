use crate::{ApiConfig, ConfigError, ConfigErrorResult, LoggingConfig, ServerConfig};

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Read `.env` from the working directory if present
    /// 2. Check for UA_CONFIG_DIR env var, else use ./.ua/
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply UA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        let config_path = Self::config_dir()?.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: UA_CONFIG_DIR env var > ./.ua/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("UA_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".ua"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.server.validate()?;
        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (include inactive: {})",
            self.api.base_url.as_deref().unwrap_or("<unset>"),
            self.api.include_inactive
        );
        info!(
            "  server: {}:{} serving {} (entry page {})",
            self.server.host, self.server.port, self.server.static_dir, self.server.index_file
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_option_string("UA_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_bool("UA_API_INCLUDE_INACTIVE", &mut self.api.include_inactive);

        // Server
        Self::apply_env_string("UA_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("UA_SERVER_PORT", &mut self.server.port);
        Self::apply_env_string("UA_SERVER_STATIC_DIR", &mut self.server.static_dir);
        Self::apply_env_string("UA_SERVER_INDEX_FILE", &mut self.server.index_file);

        // Logging
        Self::apply_env_parse("UA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("UA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("UA_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("UA_LOG_DIR", &mut self.logging.dir);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
