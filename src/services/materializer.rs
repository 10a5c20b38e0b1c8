use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use crate::models::placeholder::PlaceholderMap;
use crate::models::placement::PlacementRules;
use crate::services::renderer::render;
use crate::utils::fs_utils::copy_file;

/// A template file that was copied but could not be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    /// Destination path of the affected file
    pub path: PathBuf,
    pub reason: String,
}

/// What a materialization pass produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeSummary {
    /// Destination paths of every file copied, in traversal order
    pub copied: Vec<PathBuf>,
    pub render_failures: Vec<RenderFailure>,
}

/// Copies a template tree into a project directory and renders placeholders
#[derive(Debug, Clone)]
pub struct TemplateMaterializer<'a> {
    map: &'a PlaceholderMap,
    rules: PlacementRules,
}

impl<'a> TemplateMaterializer<'a> {
    pub fn new(map: &'a PlaceholderMap) -> Self {
        Self::with_rules(map, PlacementRules::default())
    }

    pub fn with_rules(map: &'a PlaceholderMap, rules: PlacementRules) -> Self {
        Self { map, rules }
    }

    /// Copy and render every file below `template_root` into `dest_root`.
    ///
    /// Failures are isolated per file: a file that cannot be copied is
    /// skipped, a file that cannot be rendered keeps its copied bytes.
    /// Neither aborts the pass. A missing template root copies nothing.
    pub fn materialize(&self, template_root: &Path, dest_root: &Path) -> MaterializeSummary {
        let mut summary = MaterializeSummary::default();

        if !template_root.is_dir() {
            tracing::warn!(
                template_root = %template_root.display(),
                "Template directory not found, skipping template files"
            );
            return summary;
        }

        let walker = WalkDir::new(template_root)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "Could not read template entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(template_root) else {
                continue;
            };
            let dest_path = dest_root.join(self.rules.destination(relative));

            if let Err(e) = copy_file(entry.path(), &dest_path) {
                tracing::warn!(
                    source = %entry.path().display(),
                    error = %e,
                    "Could not copy template file"
                );
                summary.render_failures.push(RenderFailure {
                    path: dest_path,
                    reason: format!("copy failed: {e}"),
                });
                continue;
            }
            tracing::debug!(path = %dest_path.display(), "Copied template file");

            if let Err(reason) = self.render_in_place(&dest_path) {
                tracing::warn!(path = %dest_path.display(), %reason, "Could not process file");
                summary.render_failures.push(RenderFailure {
                    path: dest_path.clone(),
                    reason,
                });
            }
            summary.copied.push(dest_path);
        }

        summary
    }

    fn render_in_place(&self, path: &Path) -> Result<(), String> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => "not valid UTF-8 text".to_string(),
            _ => e.to_string(),
        })?;

        let rendered = render(&content, self.map);
        if rendered != content {
            fs::write(path, rendered).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}
