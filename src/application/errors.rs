//! Application layer error types

use std::path::PathBuf;
use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Generation error: {0}")]
    GenerationError(#[from] crate::generation::GenerationError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Directory already exists: {}", .0.display())]
    DirectoryExists(PathBuf),

    #[error("Output error: {0}")]
    OutputError(String),
}

/// Validation errors for requests
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Destination directory cannot be empty")]
    EmptyDestination,

    #[error("Destination '{0}' has no usable directory name")]
    InvalidDestination(String),
}
