// third-party imports
use config::ConfigError;
use thiserror::Error;
use wildcard::CompileError;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] CompileError),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("the page database is empty, update it first")]
    EmptyDatabase,
    #[error("unsupported platform {platform:?}")]
    UnsupportedPlatform { platform: String },
    #[error("\"common\" is not a platform")]
    CommonIsNotPlatform,
    #[error("page {name:?} is not available")]
    PageNotFound { name: String },
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
