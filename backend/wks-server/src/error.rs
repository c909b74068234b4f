use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] wks_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] wks_db::DbError),

    #[error("Failed to install metrics recorder: {message}")]
    Metrics { message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
