use std::fs;
use std::path::{Path, PathBuf};
use crate::models::placeholder::PlaceholderMap;
use crate::models::placement::PlacementRules;
use crate::models::project_spec::ProjectSpec;
use crate::services::git::{GitInitializer, GitOutcome};
use crate::services::materializer::{RenderFailure, TemplateMaterializer};
use crate::services::structure::create_project_structure;
use crate::utils::error::{GeneratorError, Result};

/// Template tree shipped with the crate
pub fn default_template_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Switches for a single `generate` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Delete an existing project directory instead of failing
    pub force: bool,
    /// Run git init/add/commit in the new project
    pub init_git: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { force: false, init_git: true }
    }
}

/// A project tree written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    pub path: PathBuf,
    /// Template files left unrendered
    pub render_failures: Vec<RenderFailure>,
    pub git: GitOutcome,
}

/// Generate a new Python project from a template tree
#[derive(Debug, Clone)]
pub struct ProjectGenerator {
    spec: ProjectSpec,
    template_root: PathBuf,
    rules: PlacementRules,
    git: GitInitializer,
}

impl ProjectGenerator {
    pub fn new(spec: ProjectSpec) -> Self {
        Self {
            spec,
            template_root: default_template_root(),
            rules: PlacementRules::default(),
            git: GitInitializer::default(),
        }
    }

    pub fn template_root(mut self, template_root: impl Into<PathBuf>) -> Self {
        self.template_root = template_root.into();
        self
    }

    pub fn placement_rules(mut self, rules: PlacementRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn git(mut self, git: GitInitializer) -> Self {
        self.git = git;
        self
    }

    pub fn spec(&self) -> &ProjectSpec {
        &self.spec
    }

    /// Generate the project at `output_dir/project_name`.
    ///
    /// Fails with [`GeneratorError::AlreadyExists`] before touching the
    /// filesystem when the directory exists and `force` is off. With `force`
    /// the existing directory is removed entirely first.
    pub fn generate(&self, options: GenerateOptions) -> Result<GeneratedProject> {
        let project_path = self.spec.project_path();

        if project_path.exists() {
            if !options.force {
                return Err(GeneratorError::AlreadyExists(project_path));
            }
            tracing::info!(path = %project_path.display(), "Removing existing project directory");
            if project_path.is_dir() {
                fs::remove_dir_all(&project_path)?;
            } else {
                fs::remove_file(&project_path)?;
            }
        }

        fs::create_dir_all(&project_path)?;
        tracing::info!(path = %project_path.display(), "Creating project structure");

        let map = PlaceholderMap::from_spec(&self.spec);
        for placeholder in map.token_shaped_values() {
            tracing::warn!(
                %placeholder,
                "Value contains a placeholder token; substitution result depends on placeholder order"
            );
        }

        tracing::info!(template_root = %self.template_root.display(), "Copying template files");
        let summary = TemplateMaterializer::with_rules(&map, self.rules.clone())
            .materialize(&self.template_root, &project_path);

        tracing::info!("Creating project directories");
        create_project_structure(&project_path, self.spec.project_name(), &map)?;

        let git = if options.init_git {
            self.git.initialize(&project_path)
        } else {
            GitOutcome::Skipped
        };

        Ok(GeneratedProject {
            path: project_path,
            render_failures: summary.render_failures,
            git,
        })
    }
}
