mod activity_config;
mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod websocket_config;

#[cfg(test)]
mod tests;

pub use activity_config::ActivityConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use websocket_config::WebSocketConfig;

const CONFIG_DIR_ENV: &str = "WKS_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".worksync";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3001;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 10000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100000;

const DEFAULT_DATABASE_FILENAME: &str = "worksync.db";

const DEFAULT_AUTH_ENABLED: bool = false;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

const DEFAULT_ACTIVITY_PAGE_SIZE: i64 = 50;
const MAX_ACTIVITY_PAGE_SIZE: i64 = 200;
