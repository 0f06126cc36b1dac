use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_INDEX_FILE, DEFAULT_PORT,
    DEFAULT_STATIC_DIR, MIN_PORT,
};

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

/// Static bundle server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the built application bundle
    pub static_dir: String,
    /// Entry page inside `static_dir`, served for every unmatched route
    pub index_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            static_dir: String::from(DEFAULT_STATIC_DIR),
            index_file: String::from(DEFAULT_INDEX_FILE),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign" - OS picks an available port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::config(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.static_dir.trim().is_empty() {
            return Err(ConfigError::server("server.static_dir cannot be empty"));
        }

        let mut components = Path::new(&self.index_file).components();
        let bare_name = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !bare_name {
            return Err(ConfigError::server(format!(
                "server.index_file must be a bare file name, got {:?}",
                self.index_file
            )));
        }

        Ok(())
    }

    /// Path of the entry page
    pub fn index_path(&self) -> PathBuf {
        Path::new(&self.static_dir).join(&self.index_file)
    }
}
