// Common error types for the project generator

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The destination project directory exists and `force` was not set
    #[error("Directory '{}' already exists. Use --force to overwrite.", .0.display())]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Version control error: {0}")]
    VersionControlError(String),

    #[error("Prompt error: {0}")]
    PromptError(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Error shaped for the terminal: a message plus the process exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_generator_error(err: &GeneratorError) -> Self {
        let message = match err {
            GeneratorError::AlreadyExists(_) => err.to_string(),
            GeneratorError::IoError(io) => format!("Filesystem operation failed: {io}"),
            other => other.to_string(),
        };

        Self { message, exit_code: 1 }
    }

    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
    }
}
