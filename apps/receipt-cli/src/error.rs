//! CLI error type.
//!
//! Every failure the binary can hit funnels into [`CliError`]; `main` prints
//! it and exits non-zero.

use thiserror::Error;

use crate::config::ConfigError;
use salestax_core::{CoreError, ValidationError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to encode receipt: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Core(CoreError::from(err))
    }
}

pub type CliResult<T> = Result<T, CliError>;
