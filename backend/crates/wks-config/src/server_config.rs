use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT,
    MAX_MAX_CONNECTIONS, MIN_MAX_CONNECTIONS, MIN_PORT,
};

use std::ops::RangeInclusive;

use serde::Deserialize;

const CONNECTION_CAP_RANGE: RangeInclusive<usize> = MIN_MAX_CONNECTIONS..=MAX_MAX_CONNECTIONS;

/// Listener address and the server-wide WebSocket cap
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    /// 0 lets the OS pick
    pub port: u16,
    pub max_connections: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let privileged = self.port != 0 && self.port < MIN_PORT;
        if privileged {
            return Err(ConfigError::config(format!(
                "server.port {} is privileged; use 0 or a port from {MIN_PORT}",
                self.port
            )));
        }

        if !CONNECTION_CAP_RANGE.contains(&self.max_connections) {
            return Err(ConfigError::config(format!(
                "server.max_connections {} outside {MIN_MAX_CONNECTIONS}..={MAX_MAX_CONNECTIONS}",
                self.max_connections
            )));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
