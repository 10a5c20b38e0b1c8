use std::io::{BufRead, Write};
use std::path::Path;
use crate::models::project_spec::ProjectSpec;
use crate::utils::config::UserDefaults;
use crate::utils::error::{GeneratorError, Result};
use crate::utils::validation::sanitize_project_name;

const RULE_WIDTH: usize = 70;

/// Interactive question/answer sequence collecting project metadata
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for every field, echo a summary and ask for confirmation.
    ///
    /// Returns `Ok(None)` when the user declines.
    pub fn collect_spec(
        &mut self,
        defaults: &UserDefaults,
        output_dir: &Path,
    ) -> Result<Option<ProjectSpec>> {
        let rule = "=".repeat(RULE_WIDTH);
        self.say(&rule)?;
        self.say("Python Project Generator")?;
        self.say(&rule)?;
        self.say("")?;

        let project_name = self.ask("Project name (e.g., my-awesome-project)", None)?;
        if project_name.is_empty() {
            return Err(GeneratorError::PromptError("Project name is required".to_string()));
        }

        let description = self.ask("Project description", Some(&defaults.description))?;
        let author_name = self.ask("Author name", Some(&defaults.author_name))?;
        let author_email = self.ask("Author email", Some(&defaults.author_email))?;
        let github_username = self.ask("GitHub username", Some(&defaults.github_username))?;

        let divider = "-".repeat(RULE_WIDTH);
        self.say("")?;
        self.say("Summary:")?;
        self.say(&divider)?;
        self.say(&format!(
            "Project name: {} (package: {})",
            project_name,
            sanitize_project_name(&project_name)
        ))?;
        self.say(&format!("Description: {description}"))?;
        self.say(&format!("Author: {author_name} <{author_email}>"))?;
        self.say(&format!("GitHub: {github_username}"))?;
        self.say(&divider)?;

        let confirm = self.ask("\nProceed with these values? (y/n)", None)?;
        if !confirm.eq_ignore_ascii_case("y") {
            self.say("Aborted.")?;
            return Ok(None);
        }

        Ok(Some(ProjectSpec::new(
            &project_name,
            description,
            author_name,
            author_email,
            github_username,
            output_dir,
        )))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Ask one question; an empty answer takes the default when there is one
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(default) => write!(self.output, "{question} [{default}]: ")?,
            None => write!(self.output, "{question}: ")?,
        }
        self.output.flush()?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer)?;
        if read == 0 && default.is_none() {
            return Err(GeneratorError::PromptError(
                "Input ended before all questions were answered".to_string(),
            ));
        }

        let answer = answer.trim();
        Ok(match default {
            Some(default) if answer.is_empty() => default.to_string(),
            _ => answer.to_string(),
        })
    }
}
