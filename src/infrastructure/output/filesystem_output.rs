//! Filesystem-based output service implementation

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, error};

use crate::application::{ApplicationError, OutputService};
use crate::generation::Artifact;

/// Output service that writes artifacts to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

impl OutputService for FileSystemOutputService {
    fn create_directory(&self, path: &Path) -> Result<(), ApplicationError> {
        // Non-recursive: a missing parent is an error, as is an existing target
        fs::create_dir(path).map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                ApplicationError::DirectoryExists(path.to_path_buf())
            } else {
                error!(path = %path.display(), error = %e, "Failed to create output directory");
                ApplicationError::OutputError(format!(
                    "Failed to create directory {}: {}",
                    path.display(),
                    e
                ))
            }
        })?;
        debug!(path = %path.display(), "Created output directory");
        Ok(())
    }

    fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<(), ApplicationError> {
        for artifact in artifacts {
            // create_new: never overwrite anything already on disk
            let mut file = fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&artifact.path)
                .map_err(|e| {
                    ApplicationError::OutputError(format!(
                        "Failed to create file {}: {}",
                        artifact.path.display(),
                        e
                    ))
                })?;

            file.write_all(artifact.content.as_bytes()).map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to write file {}: {}",
                    artifact.path.display(),
                    e
                ))
            })?;

            file.flush().map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to flush file {}: {}",
                    artifact.path.display(),
                    e
                ))
            })?;

            // Set permissions if specified (Unix only)
            #[cfg(unix)]
            if let Some(mode) = artifact.permissions {
                use std::os::unix::fs::PermissionsExt;
                let permissions = fs::Permissions::from_mode(mode);
                fs::set_permissions(&artifact.path, permissions).map_err(|e| {
                    ApplicationError::OutputError(format!(
                        "Failed to set permissions on {}: {}",
                        artifact.path.display(),
                        e
                    ))
                })?;
            }

            debug!(path = %artifact.path.display(), bytes = artifact.content.len(), "Wrote file");
        }

        Ok(())
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
