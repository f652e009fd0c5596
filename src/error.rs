//! Unified error types for the service.

use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Settings loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Lifecycle transition error.
    #[error("lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Lifecycle transition errors.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// Startup was invoked while the application is already running.
    #[error("startup invoked while already running")]
    AlreadyRunning,
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
