//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur while producing file contents
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Cannot derive a package name from directory '{0}'")]
    InvalidDirectoryName(String),
}
