//! Use case for scaffolding a new project directory

use std::sync::Arc;
use tracing::{debug, info};

use crate::application::{ApplicationError, OutputService, ScaffoldRequest, ScaffoldResponse};
use crate::generation::{Artifact, CompanionRenderer, EXECUTABLE_MODE, makefile, phony_targets};

/// Use case for scaffolding a project: render everything, then write it out
pub struct ScaffoldProjectUseCase {
    companions: CompanionRenderer,
    output_service: Arc<dyn OutputService>,
}

impl ScaffoldProjectUseCase {
    pub fn new(output_service: Arc<dyn OutputService>) -> Result<Self, ApplicationError> {
        Ok(Self {
            companions: CompanionRenderer::new()?,
            output_service,
        })
    }

    pub fn execute(&self, request: ScaffoldRequest) -> Result<ScaffoldResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;
        let dir_name = request.dir_name()?;

        // 2. Render all contents before touching the filesystem
        let makefile_text = makefile::render(&request.options);
        let targets: Vec<String> = phony_targets(&makefile_text)
            .into_iter()
            .map(str::to_string)
            .collect();
        let enabled: Vec<&str> = request
            .options
            .enabled()
            .map(|name| name.as_str())
            .collect();
        debug!(?enabled, ?targets, "Rendered Makefile");

        let mut artifacts = vec![
            Artifact::new(makefile::FILE_NAME, makefile_text).with_permissions(EXECUTABLE_MODE),
        ];
        artifacts.extend(self.companions.render(
            dir_name,
            &request.options,
            request.module_path.as_deref(),
        )?);

        // 3. Create the fresh output directory
        self.output_service.create_directory(&request.destination)?;

        // 4. Prepend output directory to artifact paths and write
        for artifact in &mut artifacts {
            artifact.path = request.destination.join(&artifact.path);
        }
        self.output_service.write_artifacts(&artifacts)?;

        info!(
            path = %request.destination.display(),
            files = artifacts.len(),
            "Scaffolded project"
        );

        Ok(ScaffoldResponse {
            output_path: request.destination,
            files: artifacts.into_iter().map(|a| a.path).collect(),
            targets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ValidationError;
    use crate::generation::{GenerationError, OptionName, OptionSet};
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    /// Records calls instead of touching the filesystem
    #[derive(Default)]
    struct RecordingOutput {
        created: RefCell<Vec<PathBuf>>,
        written: RefCell<Vec<Artifact>>,
        existing: Vec<PathBuf>,
    }

    impl OutputService for RecordingOutput {
        fn create_directory(&self, path: &Path) -> Result<(), ApplicationError> {
            if self.existing.iter().any(|p| p == path) {
                return Err(ApplicationError::DirectoryExists(path.to_path_buf()));
            }
            self.created.borrow_mut().push(path.to_path_buf());
            Ok(())
        }

        fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<(), ApplicationError> {
            self.written.borrow_mut().extend_from_slice(artifacts);
            Ok(())
        }
    }

    fn use_case(output: &Arc<RecordingOutput>) -> ScaffoldProjectUseCase {
        ScaffoldProjectUseCase::new(output.clone()).unwrap()
    }

    #[test]
    fn test_execute_test_and_cover() {
        let output = Arc::new(RecordingOutput::default());
        let options = OptionSet::new()
            .with(OptionName::Test)
            .with(OptionName::Cover);

        let response = use_case(&output)
            .execute(ScaffoldRequest::new("demo", options))
            .unwrap();

        assert_eq!(*output.created.borrow(), vec![PathBuf::from("demo")]);
        let written = output.written.borrow();
        let paths: Vec<_> = written.iter().map(|a| a.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("demo/Makefile"),
                PathBuf::from("demo/main.go")
            ]
        );
        assert!(written[0].content.contains("\t@go test -cover ./...\n"));
        assert!(written[1].content.contains("func main() {"));
        assert_eq!(response.files, paths);
        assert!(response.targets.contains(&"test".to_string()));
        assert!(response.targets.contains(&"run".to_string()));
    }

    #[test]
    fn test_execute_library_with_module() {
        let output = Arc::new(RecordingOutput::default());
        let options = OptionSet::new().with(OptionName::Library);
        let request =
            ScaffoldRequest::new("work/mylib", options).with_module_path("example.com/mylib");

        let response = use_case(&output).execute(request).unwrap();

        let written = output.written.borrow();
        assert_eq!(written.len(), 3);
        assert_eq!(written[1].path, Path::new("work/mylib/mylib.go"));
        assert!(written[1].content.starts_with("package mylib"));
        assert_eq!(written[2].path, Path::new("work/mylib/go.mod"));
        assert!(written[2].content.contains("module example.com/mylib"));
        assert!(!response.targets.contains(&"run".to_string()));
    }

    #[test]
    fn test_existing_directory_writes_nothing() {
        let output = Arc::new(RecordingOutput {
            existing: vec![PathBuf::from("demo")],
            ..Default::default()
        });

        let err = use_case(&output)
            .execute(ScaffoldRequest::new("demo", OptionSet::new()))
            .unwrap_err();

        assert!(matches!(err, ApplicationError::DirectoryExists(ref p) if p == Path::new("demo")));
        assert!(output.written.borrow().is_empty());
    }

    #[test]
    fn test_invalid_destination_creates_nothing() {
        let output = Arc::new(RecordingOutput::default());

        let err = use_case(&output)
            .execute(ScaffoldRequest::new("", OptionSet::new()))
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::ValidationError(ValidationError::EmptyDestination)
        ));

        let err = use_case(&output)
            .execute(ScaffoldRequest::new("..", OptionSet::new()))
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::ValidationError(ValidationError::InvalidDestination(_))
        ));

        assert!(output.created.borrow().is_empty());
    }

    #[test]
    fn test_unusable_package_name_fails_before_mkdir() {
        let output = Arc::new(RecordingOutput::default());
        let request = ScaffoldRequest::new("---", OptionSet::new().with(OptionName::Library));

        let err = use_case(&output).execute(request).unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::GenerationError(GenerationError::InvalidDirectoryName(_))
        ));
        assert!(output.created.borrow().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_directory_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let output = Arc::new(RecordingOutput::default());
        let destination = OsStr::from_bytes(b"proj\xff");

        let request = ScaffoldRequest::new(destination, OptionSet::new());
        assert!(request.validate().is_ok());
        use_case(&output).execute(request).unwrap();
        assert_eq!(*output.created.borrow(), vec![PathBuf::from(destination)]);
        assert_eq!(
            output.written.borrow()[1].path,
            Path::new(destination).join("main.go")
        );

        // library mode needs the name as a package identifier
        let library = OptionSet::new().with(OptionName::Library);
        let err = use_case(&output)
            .execute(ScaffoldRequest::new(destination, library))
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::GenerationError(GenerationError::InvalidDirectoryName(_))
        ));
        assert_eq!(output.created.borrow().len(), 1);
    }
}
