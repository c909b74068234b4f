use crate::{
    ActivityConfig, AuthConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError,
    ConfigErrorResult, DatabaseConfig, LoggingConfig, ServerConfig, WebSocketConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub websocket: WebSocketConfig,
    pub activity: ActivityConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. WKS_CONFIG_DIR env var, else ./.worksync/
    /// 2. Create the config directory if missing
    /// 3. config.toml if present, else defaults
    /// 4. WKS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

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

    /// Priority: WKS_CONFIG_DIR env var > ./.worksync/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all sections. Call after load() to fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.websocket.validate()?;
        self.activity.validate()?;
        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {} (max {} connections)",
            self.server.bind_addr(),
            self.server.max_connections
        );
        info!("  database: {}", self.database.path);
        info!(
            "  auth: {} (secret {})",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "unset"
            }
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );
        info!("  websocket: buffer={}", self.websocket.send_buffer_size);
        info!(
            "  activity: page={} (max {})",
            self.activity.default_page_size, self.activity.max_page_size
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("WKS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("WKS_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "WKS_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // Database
        Self::apply_env_string("WKS_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("WKS_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("WKS_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);

        // Logging
        Self::apply_env_parse("WKS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("WKS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("WKS_LOG_FILE", &mut self.logging.file);

        // WebSocket
        Self::apply_env_parse(
            "WKS_WS_SEND_BUFFER_SIZE",
            &mut self.websocket.send_buffer_size,
        );

        // Activity
        Self::apply_env_parse(
            "WKS_ACTIVITY_DEFAULT_PAGE_SIZE",
            &mut self.activity.default_page_size,
        );
        Self::apply_env_parse(
            "WKS_ACTIVITY_MAX_PAGE_SIZE",
            &mut self.activity.max_page_size,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
