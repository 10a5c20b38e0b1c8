use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Where a template file lands in the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Keep the file's relative path
    Mirror,
    /// Drop every directory and place the file at the project root
    Flatten,
}

/// A placement applied to every template file below a marker directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRule {
    pub marker: &'static str,
    pub placement: Placement,
}

impl PlacementRule {
    pub const fn flatten(marker: &'static str) -> Self {
        Self { marker, placement: Placement::Flatten }
    }

    /// A rule matches when one of the file's parent directories is named `marker`
    pub fn matches(&self, relative_path: &Path) -> bool {
        relative_path
            .parent()
            .into_iter()
            .flat_map(Path::components)
            .any(|component| matches!(component, Component::Normal(name) if name == OsStr::new(self.marker)))
    }
}

/// Markdown files are staged in `md_files/` and belong at the project root
pub const DEFAULT_PLACEMENT_RULES: &[PlacementRule] = &[PlacementRule::flatten("md_files")];

/// Ordered rule table; the first matching rule wins, otherwise the path is mirrored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRules {
    rules: Vec<PlacementRule>,
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEMENT_RULES.to_vec())
    }
}

impl PlacementRules {
    pub fn new(rules: Vec<PlacementRule>) -> Self {
        Self { rules }
    }

    pub fn placement_for(&self, relative_path: &Path) -> Placement {
        self.rules
            .iter()
            .find(|rule| rule.matches(relative_path))
            .map_or(Placement::Mirror, |rule| rule.placement)
    }

    /// Path of a template file relative to the destination root
    pub fn destination(&self, relative_path: &Path) -> PathBuf {
        match self.placement_for(relative_path) {
            Placement::Mirror => relative_path.to_path_buf(),
            Placement::Flatten => relative_path
                .file_name()
                .map_or_else(|| relative_path.to_path_buf(), PathBuf::from),
        }
    }
}
