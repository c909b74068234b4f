use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, MIN_JWT_SECRET_LENGTH};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// When disabled the handshake token is taken as a bare user id
    pub enabled: bool,
    /// HS256 secret for handshake tokens
    pub jwt_secret: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        match &self.jwt_secret {
            None => Err(ConfigError::auth(
                "auth.enabled requires auth.jwt_secret to be set",
            )),
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} bytes, got {}",
                    MIN_JWT_SECRET_LENGTH,
                    secret.len()
                )))
            }
            Some(_) => Ok(()),
        }
    }
}
