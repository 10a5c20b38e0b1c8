use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::utils::validation::sanitize_project_name;

/// Metadata describing the project to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    /// Sanitized package name, always a valid Python identifier
    project_name: String,
    /// One-line project description
    pub description: String,
    /// Author's full name
    pub author_name: String,
    /// Author's email address
    pub author_email: String,
    /// GitHub account that will host the repository
    pub github_username: String,
    /// Directory the project directory is created in
    output_dir: PathBuf,
}

impl ProjectSpec {
    /// Create a spec, sanitizing the raw project name.
    ///
    /// A relative `output_dir` is resolved against the current directory.
    pub fn new(
        raw_name: &str,
        description: impl Into<String>,
        author_name: impl Into<String>,
        author_email: impl Into<String>,
        github_username: impl Into<String>,
        output_dir: impl AsRef<Path>,
    ) -> Self {
        let output_dir = output_dir.as_ref();
        let output_dir = std::path::absolute(output_dir)
            .unwrap_or_else(|_| output_dir.to_path_buf());

        Self {
            project_name: sanitize_project_name(raw_name),
            description: description.into(),
            author_name: author_name.into(),
            author_email: author_email.into(),
            github_username: github_username.into(),
            output_dir,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Root of the generated project: `output_dir/project_name`
    pub fn project_path(&self) -> PathBuf {
        self.output_dir.join(&self.project_name)
    }
}
