//! `tsalias`: pre-build hook that compiles a TypeScript project and rewrites
//! path aliases in its output into relative imports.
//!
//! Exits non-zero on any fatal condition so the enclosing build pipeline
//! stops instead of shipping output with unresolved aliases.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, info_span};

use tsalias_core::{BuildHook, CliOverrides, PipelineError, TsaliasConfig, TsaliasErrorCode};

/// Rewrite compiler path aliases in build output into relative imports.
#[derive(Debug, Parser)]
#[command(name = "tsalias", version, about)]
struct Cli {
    /// Project root containing package.json and the compiler config
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Compiled output directory, relative to the root
    #[arg(long)]
    build_dir: Option<String>,

    /// Compiler config declaring `paths`, relative to the root
    #[arg(long)]
    tsconfig: Option<String>,

    /// Extension of files to rewrite, without the dot
    #[arg(long)]
    extension: Option<String>,

    /// Worker threads (1 = sequential, 0 = one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Descend into symlinked directories
    #[arg(long)]
    follow_links: bool,

    /// Rewrite an existing output tree without running the build command
    #[arg(long)]
    skip_compile: bool,

    /// Command that produces the output tree
    #[arg(long)]
    build_command: Option<String>,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            build_dir: self.build_dir.clone(),
            tsconfig: self.tsconfig.clone(),
            extension: self.extension.clone(),
            threads: self.threads,
            follow_links: self.follow_links.then_some(true),
            compile_enabled: self.skip_compile.then_some(false),
            build_command: self.build_command.clone(),
        }
    }
}

fn main() -> ExitCode {
    tsalias_core::tracing::init_tracing();
    let cli = Cli::parse();

    let namespace = runtime_namespace(&cli.root);
    let span = info_span!("build", hook = %format!("{namespace}-build-hook"));
    let _guard = span.enter();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<PipelineError>() {
                Some(pipeline) => error!("Pre-app-build hook failed: {}", pipeline.coded_string()),
                None => error!("Pre-app-build hook failed: {err:#}"),
            }
            error!("Debug info:");
            match std::env::current_dir() {
                Ok(cwd) => error!("   Working directory: {}", cwd.display()),
                Err(_) => error!("   Working directory: <unavailable>"),
            }
            error!("   Project root: {}", cli.root.display());
            error!("   tsalias version: {}", env!("CARGO_PKG_VERSION"));
            ExitCode::FAILURE
        }
    }
}

/// Namespace that names the hook span. Loads `<root>/.env` first; variables
/// already in the environment take precedence and a missing file is ignored.
fn runtime_namespace(root: &Path) -> String {
    let _ = dotenv::from_path(root.join(".env"));
    std::env::var("AIO_runtime_namespace").unwrap_or_else(|_| "extension".to_string())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = TsaliasConfig::load(&cli.root, Some(&cli.overrides()))
        .map_err(PipelineError::from)?;

    info!("Pre-app-build: rebuilding and rewriting path aliases...");
    let hook = BuildHook::with_tracing(config);
    let summary = hook.run(&cli.root)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("serializing run summary")?;
        println!("{json}");
    }

    info!(
        changed = summary.files_changed,
        scanned = summary.files_scanned,
        "Pre-app-build hook completed successfully!"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Serializes tests that touch `AIO_runtime_namespace`.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const NAMESPACE_VAR: &str = "AIO_runtime_namespace";

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_map_to_overrides() {
        let cli = Cli::parse_from([
            "tsalias",
            "--skip-compile",
            "--follow-links",
            "--threads",
            "4",
            "--build-dir",
            "dist",
        ]);
        let overrides = cli.overrides();
        assert_eq!(overrides.compile_enabled, Some(false));
        assert_eq!(overrides.follow_links, Some(true));
        assert_eq!(overrides.threads, Some(4));
        assert_eq!(overrides.build_dir.as_deref(), Some("dist"));
        assert_eq!(overrides.extension, None);
    }

    #[test]
    fn test_absent_flags_leave_config_alone() {
        let overrides = Cli::parse_from(["tsalias"]).overrides();
        assert_eq!(overrides.compile_enabled, None);
        assert_eq!(overrides.follow_links, None);
    }

    #[test]
    fn test_namespace_comes_from_project_env_file() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(NAMESPACE_VAR);

        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(".env"), "AIO_runtime_namespace=acme\n").unwrap();

        assert_eq!(runtime_namespace(dir.path()), "acme");
        std::env::remove_var(NAMESPACE_VAR);
    }

    #[test]
    fn test_missing_env_file_falls_back_to_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(NAMESPACE_VAR);

        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(runtime_namespace(dir.path()), "extension");
    }

    #[test]
    fn test_shell_environment_beats_env_file() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(NAMESPACE_VAR, "shell");

        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(".env"), "AIO_runtime_namespace=acme\n").unwrap();

        assert_eq!(runtime_namespace(dir.path()), "shell");
        std::env::remove_var(NAMESPACE_VAR);
    }
}
