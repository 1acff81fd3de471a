//! Compile step - produces the output tree before aliases are rewritten.

use std::path::Path;
use std::process::{Command, ExitStatus};

use serde::Deserialize;
use tracing::debug;

use crate::errors::CompileError;

const PACKAGE_JSON: &str = "package.json";

#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    scripts: std::collections::HashMap<String, serde_json::Value>,
}

/// Validates the project and runs its build command.
#[derive(Debug, Clone)]
pub struct BuildCompiler {
    command: String,
}

impl BuildCompiler {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Validate the project, then run the build command with inherited stdio.
    pub fn compile(&self, project_root: &Path) -> Result<(), CompileError> {
        debug!("Starting TypeScript compilation...");

        self.validate_project_root(project_root)?;
        self.validate_build_configuration(project_root)?;

        debug!("Running {}...", self.command);
        self.execute(project_root)?;

        debug!("TypeScript compilation completed!");
        Ok(())
    }

    /// `package.json` must exist in the project root.
    pub fn validate_project_root(&self, project_root: &Path) -> Result<(), CompileError> {
        if !project_root.join(PACKAGE_JSON).is_file() {
            return Err(CompileError::ProjectRootInvalid {
                path: project_root.display().to_string(),
            });
        }
        debug!("Project root validated: {}", project_root.display());
        Ok(())
    }

    /// For `npm run <script>` commands, `<script>` must be declared in
    /// `package.json`. Other commands are not checked.
    pub fn validate_build_configuration(&self, project_root: &Path) -> Result<(), CompileError> {
        let Some(script) = self.npm_script() else {
            return Ok(());
        };

        let path = project_root.join(PACKAGE_JSON);
        let content = std::fs::read_to_string(&path).map_err(|e| CompileError::InvalidPackageJson {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let package: PackageJson =
            serde_json::from_str(&content).map_err(|e| CompileError::InvalidPackageJson {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        if !package.scripts.contains_key(script) {
            return Err(CompileError::ScriptNotFound {
                command: self.command.clone(),
            });
        }
        debug!("Build configuration validated");
        Ok(())
    }

    /// Run the command through the platform shell in `project_root`.
    pub fn execute(&self, project_root: &Path) -> Result<(), CompileError> {
        let status = shell_command(&self.command)
            .current_dir(project_root)
            .status()
            .map_err(|source| CompileError::Spawn {
                command: self.command.clone(),
                source,
            })?;
        check_status(&self.command, status)?;
        debug!("Build command executed successfully");
        Ok(())
    }

    /// Script name when the command is `npm run <script>` with nothing after it.
    fn npm_script(&self) -> Option<&str> {
        let mut parts = self.command.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("npm"), Some("run") | Some("run-script"), Some(script), None) => Some(script),
            _ => None,
        }
    }
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

fn check_status(command: &str, status: ExitStatus) -> Result<(), CompileError> {
    if status.success() {
        Ok(())
    } else {
        Err(CompileError::CommandFailed {
            command: command.to_string(),
            status: status.to_string(),
        })
    }
}
