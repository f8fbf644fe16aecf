//! Port interfaces for the application layer

use std::path::Path;

use crate::application::ApplicationError;
use crate::generation::Artifact;

/// Service for writing generated artifacts to the output destination
pub trait OutputService {
    /// Create a fresh directory; an existing one is an error
    fn create_directory(&self, path: &Path) -> Result<(), ApplicationError>;

    /// Write all artifacts, in order
    fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<(), ApplicationError>;
}
