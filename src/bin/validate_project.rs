// Validate that a generated project has the expected layout

use std::path::PathBuf;
use std::process;
use anyhow::Context;
use clap::Parser;
use python_project_generator::cli::validate::ValidateCommand;
use python_project_generator::utils::logging::{self, Verbosity};

/// Check a Python project directory against the required layout
#[derive(Debug, Parser)]
#[command(name = "validate-project")]
#[command(version)]
struct Args {
    /// Project root to check
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(Verbosity::Normal);

    let cmd = ValidateCommand { path: args.path, json: args.json };
    let report = cmd
        .run()
        .with_context(|| format!("Could not validate {}", cmd.path.display()))?;

    process::exit(report.exit_code());
}
