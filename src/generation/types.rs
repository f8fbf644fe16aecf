//! Core types for the generation domain

use std::path::PathBuf;

/// Permission bits for the Makefile and source stub
pub const EXECUTABLE_MODE: u32 = 0o744;
/// Permission bits for the module descriptor
pub const REGULAR_MODE: u32 = 0o644;

/// A generated file, relative to the project directory until written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
    pub permissions: Option<u32>,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            permissions: None,
        }
    }

    pub fn with_permissions(mut self, mode: u32) -> Self {
        self.permissions = Some(mode);
        self
    }
}
