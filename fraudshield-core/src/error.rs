//! Shell error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShellError>;
