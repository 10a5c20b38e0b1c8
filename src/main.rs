// Python Project Generator
// Main CLI entry point

use clap::Parser;
use std::process;
use python_project_generator::cli::{Cli, CliDispatcher};
use python_project_generator::utils::error::UserError;
use python_project_generator::utils::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbosity());

    let result = CliDispatcher::execute(cli);

    if let Err(err) = result {
        let user_error = UserError::from_generator_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
