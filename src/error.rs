use crate::config::ConfigError;
use thiserror::Error;

/// Errors that stop the application from starting
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to create the drawing surface: {0}")]
    Surface(#[from] eframe::Error),
}

/// Result type for application startup
pub type AppResult<T> = Result<T, AppError>;
