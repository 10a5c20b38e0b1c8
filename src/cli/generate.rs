use std::io;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::cli::prompt::Prompter;
use crate::models::project_spec::ProjectSpec;
use crate::services::generator::{default_template_root, GenerateOptions, GeneratedProject, ProjectGenerator};
use crate::utils::config::ConfigParser;
use crate::utils::error::{GeneratorError, Result};

/// Generate a new Python project, interactively or from flags
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub github_username: Option<String>,
    pub output: PathBuf,
    pub template: Option<PathBuf>,
    pub force: bool,
    pub no_git: bool,
    pub json: bool,
}

/// JSON response format for the generate command
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub status: String,
    pub project_name: String,
    pub project_path: String,
    pub git_initialized: bool,
    pub unrendered_files: Vec<String>,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn run(&self) -> Result<()> {
        let spec = match self.spec_from_flags()? {
            Some(spec) => spec,
            None => {
                let defaults = ConfigParser::load_user_defaults()?;
                let stdin = io::stdin();
                let stdout = io::stdout();
                match Prompter::new(stdin.lock(), stdout.lock()).collect_spec(&defaults, &self.output)? {
                    Some(spec) => spec,
                    None => return Ok(()),
                }
            }
        };

        let template_root = self.template.clone().unwrap_or_else(default_template_root);
        let generator = ProjectGenerator::new(spec).template_root(template_root);
        let project = generator.generate(GenerateOptions {
            force: self.force,
            init_git: !self.no_git,
        })?;

        self.report(generator.spec(), &project)
    }

    /// Build the project settings from flags; `None` means interactive mode
    fn spec_from_flags(&self) -> Result<Option<ProjectSpec>> {
        let Some(name) = &self.name else {
            return Ok(None);
        };

        let required = |value: &Option<String>, flag: &str| {
            value.clone().ok_or_else(|| GeneratorError::ValidationError(format!(
                "In non-interactive mode, all of --name, --description, --author, --email, and --github-username are required (missing {flag})"
            )))
        };

        Ok(Some(ProjectSpec::new(
            name,
            required(&self.description, "--description")?,
            required(&self.author, "--author")?,
            required(&self.email, "--email")?,
            required(&self.github_username, "--github-username")?,
            &self.output,
        )))
    }

    fn report(&self, spec: &ProjectSpec, project: &GeneratedProject) -> Result<()> {
        let unrendered_files: Vec<String> = project
            .render_failures
            .iter()
            .map(|failure| failure.path.display().to_string())
            .collect();

        if self.json {
            let response = GenerateResponse {
                status: "success".to_string(),
                project_name: spec.project_name().to_string(),
                project_path: project.path.display().to_string(),
                git_initialized: project.git.is_initialized(),
                unrendered_files,
            };

            let json_output = serde_json::to_string_pretty(&response)
                .map_err(|e| GeneratorError::ValidationError(format!("Failed to serialize JSON response: {}", e)))?;

            println!("{}", json_output);
        } else {
            println!("Created project {} at {}", spec.project_name(), project.path.display());
            if !unrendered_files.is_empty() {
                println!("{} file(s) were copied without placeholder substitution", unrendered_files.len());
            }
        }

        Ok(())
    }
}
