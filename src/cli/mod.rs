// CLI module for command-line interface

pub mod generate;
pub mod prompt;
pub mod validate;

use std::path::PathBuf;
use clap::Parser;
use crate::utils::error::Result;
use crate::utils::logging::Verbosity;

use self::generate::GenerateCommand;

/// Main CLI structure
#[derive(Debug, Parser)]
#[command(name = "python-project-generator")]
#[command(about = "Generate production-ready Python projects")]
#[command(long_about = r#"Generate a new Python package project from a template tree.

The project is created at <OUTPUT>/<NAME>, where NAME is normalized into a
valid Python package name. Template files are copied and their
{{PROJECT_NAME}}-style placeholders substituted; the package, test module
and entry point are written on top.

Examples:
  python-project-generator
      Interactive mode (prompts for details)

  python-project-generator --name my-project --description "My project" \
      --author "Jane Doe" --email jane@example.com --github-username jdoe
      Non-interactive mode

  python-project-generator -n demo -d Demo -a Dev -e dev@example.com -g dev \
      --output /path/to/projects --no-git
      Specify output directory and skip git initialization"#)]
#[command(version)]
pub struct Cli {
    /// Project name (e.g., my_awesome_project); omit for interactive mode
    #[arg(short, long, env = "PYGEN_NAME",
          requires_all = ["description", "author", "email", "github_username"])]
    pub name: Option<String>,

    /// Project description
    #[arg(short, long, env = "PYGEN_DESCRIPTION")]
    pub description: Option<String>,

    /// Author name
    #[arg(short, long, env = "PYGEN_AUTHOR")]
    pub author: Option<String>,

    /// Author email
    #[arg(short, long, env = "PYGEN_EMAIL")]
    pub email: Option<String>,

    /// GitHub username
    #[arg(short, long, env = "PYGEN_GITHUB_USERNAME")]
    pub github_username: Option<String>,

    /// Output directory
    #[arg(short, long, env = "PYGEN_OUTPUT", default_value = ".")]
    pub output: PathBuf,

    /// Template directory (default: the bundled templates)
    #[arg(short, long, env = "PYGEN_TEMPLATE_DIR")]
    pub template: Option<PathBuf>,

    /// Force overwrite if project directory exists
    #[arg(short, long)]
    pub force: bool,

    /// Skip git initialization
    #[arg(long)]
    pub no_git: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,

    /// Show debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute the parsed command line
    pub fn execute(cli: Cli) -> Result<()> {
        let cmd = GenerateCommand {
            name: cli.name,
            description: cli.description,
            author: cli.author,
            email: cli.email,
            github_username: cli.github_username,
            output: cli.output,
            template: cli.template,
            force: cli.force,
            no_git: cli.no_git,
            json: cli.json,
        };
        cmd.run()
    }
}
