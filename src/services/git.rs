use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::process::Command;
use serde::{Deserialize, Serialize};
use crate::utils::error::GeneratorError;

pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit from python-project-generator";

/// The three commands run to initialize a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GitStep {
    Init,
    StageAll,
    Commit,
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::StageAll => write!(f, "add"),
            Self::Commit => write!(f, "commit"),
        }
    }
}

/// Result of repository initialization. Never an error for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GitOutcome {
    Initialized,
    Skipped,
    Failed { step: GitStep, reason: String },
}

impl GitOutcome {
    pub fn is_initialized(&self) -> bool {
        matches!(self, Self::Initialized)
    }
}

/// Runs `git init`, `git add .` and an initial commit inside a project
#[derive(Debug, Clone)]
pub struct GitInitializer {
    program: OsString,
    commit_message: String,
}

impl Default for GitInitializer {
    fn default() -> Self {
        Self::with_program("git")
    }
}

impl GitInitializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different executable in place of `git`
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }

    pub fn commit_message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }

    /// Initialize a repository in `project_root`, stopping at the first failed step.
    ///
    /// Failures are logged and reported in the outcome.
    pub fn initialize(&self, project_root: &Path) -> GitOutcome {
        tracing::info!("Initializing git repository");

        let steps: [(GitStep, Vec<&str>); 3] = [
            (GitStep::Init, vec!["init"]),
            (GitStep::StageAll, vec!["add", "."]),
            (GitStep::Commit, vec!["commit", "-m", self.commit_message.as_str()]),
        ];

        for (step, args) in steps {
            if let Err(e) = self.run(project_root, &args) {
                tracing::warn!(%step, error = %e, "Git initialization failed, continuing without a repository");
                return GitOutcome::Failed { step, reason: e.to_string() };
            }
        }

        tracing::info!("Git repository initialized");
        GitOutcome::Initialized
    }

    fn run(&self, project_root: &Path, args: &[&str]) -> Result<(), GeneratorError> {
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(project_root)
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => GeneratorError::VersionControlError(format!(
                    "'{}' not found",
                    self.program.to_string_lossy()
                )),
                _ => GeneratorError::VersionControlError(e.to_string()),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(GeneratorError::VersionControlError(format!(
            "'{} {}' exited with {}: {}",
            self.program.to_string_lossy(),
            args.join(" "),
            output.status,
            stderr.trim()
        )))
    }
}
