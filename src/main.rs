//! maker CLI entrypoint
//! Parses command-line flags and dispatches to the scaffold use case.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use maker::application::{ScaffoldProjectUseCase, ScaffoldRequest};
use maker::generation::OptionSet;
use maker::infrastructure::FileSystemOutputService;
use std::path::PathBuf;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "maker")]
#[command(
    author,
    version,
    about = "Scaffold a Go project with a flag-driven Makefile",
    long_about = None
)]
struct Cli {
    /// Adds test to makefile
    #[arg(long)]
    test: bool,
    /// Adds bench to makefile
    #[arg(long)]
    bench: bool,
    /// Adds shadow to makefile
    #[arg(long)]
    shadow: bool,
    /// Adds cover to makefile
    #[arg(long)]
    cover: bool,
    /// Adds cover HTML to makefile
    #[arg(long = "coverHTML")]
    cover_html: bool,
    /// Adds CPU profiling to makefile
    #[arg(long = "cpuProfile")]
    cpu_profile: bool,
    /// Adds Memory profiling to makefile
    #[arg(long = "memProfile")]
    mem_profile: bool,
    /// Adds race checking to makefile
    #[arg(long)]
    race: bool,
    /// Adds race checking tests to makefile
    #[arg(long = "testRace")]
    test_race: bool,
    /// Scaffold a package instead of an executable
    #[arg(long)]
    library: bool,
    /// Module path; writes a go.mod when given
    #[arg(long = "mod", value_name = "MODULE_PATH")]
    module_path: Option<String>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
    /// Directory to create; must not exist yet
    #[arg(value_name = "DIRNAME")]
    dir_name: PathBuf,
}

impl Cli {
    fn options(&self) -> OptionSet {
        OptionSet {
            test: self.test,
            bench: self.bench,
            shadow: self.shadow,
            cover: self.cover,
            cover_html: self.cover_html,
            cpu_profile: self.cpu_profile,
            mem_profile: self.mem_profile,
            race: self.race,
            test_race: self.test_race,
            library: self.library,
        }
    }

    fn into_request(self) -> ScaffoldRequest {
        let options = self.options();
        let request = ScaffoldRequest::new(self.dir_name, options);
        match self.module_path {
            Some(module_path) => request.with_module_path(module_path),
            None => request,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("maker=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let request = cli.into_request();
    debug!(?request, "Parsed command line");
    let destination = request.destination.clone();

    let use_case = ScaffoldProjectUseCase::new(Arc::new(FileSystemOutputService::new()))
        .context("Failed to initialize templates")?;
    let response = use_case
        .execute(request)
        .with_context(|| format!("Failed to scaffold {}", destination.display()))?;

    info!(
        output_path = %response.output_path.display(),
        targets = %response.targets.join(" "),
        "Successfully scaffolded project"
    );
    Ok(())
}
