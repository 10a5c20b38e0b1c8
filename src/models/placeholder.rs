use std::collections::BTreeMap;
use std::fmt;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use crate::models::project_spec::ProjectSpec;

/// Placeholder tokens recognised in template text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Placeholder {
    ProjectName,
    ProjectDescription,
    AuthorName,
    AuthorEmail,
    GithubUsername,
    CurrentYear,
}

impl Placeholder {
    /// Every placeholder, in substitution order
    pub const ALL: [Self; 6] = [
        Self::ProjectName,
        Self::ProjectDescription,
        Self::AuthorName,
        Self::AuthorEmail,
        Self::GithubUsername,
        Self::CurrentYear,
    ];

    /// Literal token as it appears in template files
    pub fn token(&self) -> &'static str {
        match self {
            Self::ProjectName => "{{PROJECT_NAME}}",
            Self::ProjectDescription => "{{PROJECT_DESCRIPTION}}",
            Self::AuthorName => "{{AUTHOR_NAME}}",
            Self::AuthorEmail => "{{AUTHOR_EMAIL}}",
            Self::GithubUsername => "{{GITHUB_USERNAME}}",
            Self::CurrentYear => "{{CURRENT_YEAR}}",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Mapping from placeholder to replacement value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    values: BTreeMap<Placeholder, String>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full map for a spec, stamping the current local year
    pub fn from_spec(spec: &ProjectSpec) -> Self {
        Self::from_spec_with_year(spec, chrono::Local::now().year())
    }

    pub fn from_spec_with_year(spec: &ProjectSpec, year: i32) -> Self {
        let mut map = Self::new();
        map.insert(Placeholder::ProjectName, spec.project_name());
        map.insert(Placeholder::ProjectDescription, spec.description.as_str());
        map.insert(Placeholder::AuthorName, spec.author_name.as_str());
        map.insert(Placeholder::AuthorEmail, spec.author_email.as_str());
        map.insert(Placeholder::GithubUsername, spec.github_username.as_str());
        map.insert(Placeholder::CurrentYear, year.to_string());
        map
    }

    pub fn insert(&mut self, placeholder: Placeholder, value: impl Into<String>) {
        self.values.insert(placeholder, value.into());
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }

    /// Entries in substitution order
    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> {
        self.values.iter().map(|(placeholder, value)| (*placeholder, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Placeholders whose value itself contains a token.
    ///
    /// Substitution of such values depends on placeholder order.
    pub fn token_shaped_values(&self) -> Vec<Placeholder> {
        self.values
            .iter()
            .filter(|(_, value)| Placeholder::ALL.iter().any(|p| value.contains(p.token())))
            .map(|(placeholder, _)| *placeholder)
            .collect()
    }
}
