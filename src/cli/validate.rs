use std::path::PathBuf;
use crate::models::manifest::ValidationReport;
use crate::services::validator::validate_project;
use crate::utils::error::{GeneratorError, Result};

/// Check a project directory against the required layout
#[derive(Debug, Clone)]
pub struct ValidateCommand {
    pub path: PathBuf,
    pub json: bool,
}

impl ValidateCommand {
    /// Print the report and return it so the caller can pick the exit code
    pub fn run(&self) -> Result<ValidationReport> {
        if !self.path.is_dir() {
            return Err(GeneratorError::ValidationError(format!(
                "'{}' is not a directory",
                self.path.display()
            )));
        }

        let report = validate_project(&self.path);

        if self.json {
            let json_output = serde_json::to_string_pretty(&report)
                .map_err(|e| GeneratorError::ValidationError(format!("Failed to serialize JSON response: {}", e)))?;
            println!("{}", json_output);
        } else {
            println!("{}", report.render());
        }

        Ok(report)
    }
}
