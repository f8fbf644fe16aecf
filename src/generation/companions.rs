//! Source stub and module descriptor written next to the Makefile

use serde::Serialize;
use std::ffi::OsStr;
use tera::{Context, Tera};
use tracing::debug;

use crate::generation::sanitizers::sanitize_package_name;
use crate::generation::{Artifact, EXECUTABLE_MODE, GenerationError, OptionSet, REGULAR_MODE};

pub const MAIN_FILE_NAME: &str = "main.go";
pub const MODULE_FILE_NAME: &str = "go.mod";
/// `go` directive written into the module descriptor
pub const GO_VERSION: &str = "1.13";

const MAIN_STUB: &str = "package main\n\nfunc main() {\n}\n";
const PACKAGE_STUB: &str = "package {{ package_name }}\n";
const MODULE_DESCRIPTOR: &str = "module {{ module_path }}\n\ngo {{ go_version }}\n";

#[derive(Debug, Serialize)]
struct CompanionContext<'a> {
    package_name: Option<String>,
    module_path: Option<&'a str>,
    go_version: &'static str,
}

/// Renders the files that accompany the Makefile
pub struct CompanionRenderer {
    tera: Tera,
}

impl CompanionRenderer {
    pub fn new() -> Result<Self, GenerationError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (MAIN_FILE_NAME, MAIN_STUB),
            ("package.go", PACKAGE_STUB),
            (MODULE_FILE_NAME, MODULE_DESCRIPTOR),
        ])
        .map_err(|e| GenerationError::RenderError(format!("Failed to add template: {}", e)))?;
        Ok(Self { tera })
    }

    /// Build the stub source file and, when a module path is given, the
    /// module descriptor.
    ///
    /// `dir_name` is the final component of the destination directory. In
    /// library mode it names both the stub file and its package, so it must
    /// be UTF-8; executable mode never looks at it.
    pub fn render(
        &self,
        dir_name: &OsStr,
        options: &OptionSet,
        module_path: Option<&str>,
    ) -> Result<Vec<Artifact>, GenerationError> {
        let module_path = module_path.filter(|path| !path.is_empty());
        let package = if options.library {
            let invalid =
                || GenerationError::InvalidDirectoryName(dir_name.to_string_lossy().into_owned());
            let file_stem = dir_name.to_str().ok_or_else(invalid)?;
            let package_name = sanitize_package_name(file_stem).ok_or_else(invalid)?;
            Some((file_stem, package_name))
        } else {
            None
        };

        let context = Context::from_serialize(CompanionContext {
            package_name: package.as_ref().map(|(_, name)| name.clone()),
            module_path,
            go_version: GO_VERSION,
        })
        .map_err(|e| GenerationError::RenderError(format!("Failed to build context: {}", e)))?;

        let mut artifacts = Vec::with_capacity(2);

        let stub = match package {
            Some((file_stem, package_name)) => {
                debug!(package = %package_name, "Rendering package stub");
                Artifact::new(
                    format!("{file_stem}.go"),
                    self.render_template("package.go", &context)?,
                )
            }
            None => Artifact::new(
                MAIN_FILE_NAME,
                self.render_template(MAIN_FILE_NAME, &context)?,
            ),
        };
        artifacts.push(stub.with_permissions(EXECUTABLE_MODE));

        if let Some(module_path) = module_path {
            debug!(module = %module_path, "Rendering module descriptor");
            artifacts.push(
                Artifact::new(
                    MODULE_FILE_NAME,
                    self.render_template(MODULE_FILE_NAME, &context)?,
                )
                .with_permissions(REGULAR_MODE),
            );
        }

        Ok(artifacts)
    }

    fn render_template(&self, name: &str, context: &Context) -> Result<String, GenerationError> {
        self.tera.render(name, context).map_err(|e| {
            GenerationError::RenderError(format!("Failed to render template '{}': {}", name, e))
        })
    }
}
