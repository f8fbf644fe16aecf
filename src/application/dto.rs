//! Request and response types for the scaffold use case

use std::ffi::OsStr;
use std::path::PathBuf;

use crate::application::ValidationError;
use crate::generation::OptionSet;

/// Everything needed to scaffold one project, collected before rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub destination: PathBuf,
    pub options: OptionSet,
    pub module_path: Option<String>,
}

impl ScaffoldRequest {
    pub fn new(destination: impl Into<PathBuf>, options: OptionSet) -> Self {
        Self {
            destination: destination.into(),
            options,
            module_path: None,
        }
    }

    pub fn with_module_path(mut self, module_path: impl Into<String>) -> Self {
        self.module_path = Some(module_path.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.destination.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDestination);
        }
        self.dir_name()?;
        Ok(())
    }

    /// Final component of the destination, used to name library packages
    pub fn dir_name(&self) -> Result<&OsStr, ValidationError> {
        self.destination.file_name().ok_or_else(|| {
            ValidationError::InvalidDestination(self.destination.display().to_string())
        })
    }
}

/// Outcome of a successful scaffold
#[derive(Debug, Clone)]
pub struct ScaffoldResponse {
    pub output_path: PathBuf,
    pub files: Vec<PathBuf>,
    pub targets: Vec<String>,
}
