use std::path::{Path, PathBuf};
use crate::models::placeholder::PlaceholderMap;
use crate::services::renderer::render;
use crate::utils::error::Result;
use crate::utils::fs_utils::{ensure_directory_exists, write_file};

/// Version stamped into the generated package
pub const INITIAL_VERSION: &str = "0.1.0";

const MAIN_MODULE: &str = r#""""Main module for the application."""

import logging

logger = logging.getLogger(__name__)


def hello_world() -> str:
    """Return a greeting message."""
    return "Hello, World!"


def main() -> None:
    """Main entry point."""
    logger.info(hello_world())


if __name__ == "__main__":
    logging.basicConfig(level=logging.INFO)
    main()
"#;

const PACKAGE_INIT: &str = r#""""{{PROJECT_NAME}} package.

{{PROJECT_DESCRIPTION}}
"""

__version__ = "0.1.0"
"#;

const TEST_MODULE: &str = r#""""Tests for main module."""

from {{PROJECT_NAME}}.main import hello_world


def test_hello_world():
    """Test the hello_world function."""
    assert hello_world() == "Hello, World!"


def test_hello_world_not_empty():
    """Test that hello_world returns a non-empty string."""
    result = hello_world()
    assert isinstance(result, str)
    assert len(result) > 0
"#;

const ENTRY_POINT: &str = r#""""Main entry point for {{PROJECT_NAME}}"""

import sys

from {{PROJECT_NAME}}.main import main

if __name__ == "__main__":
    sys.exit(main())
"#;

/// A file whose body is written directly rather than copied from the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the project root
    pub path: PathBuf,
    pub contents: String,
}

/// Directories every project has, relative to the project root
pub fn project_directories(project_name: &str) -> Vec<PathBuf> {
    vec![
        Path::new("src").join(project_name),
        PathBuf::from("tests"),
        PathBuf::from("docs"),
        PathBuf::from("scripts"),
    ]
}

/// Bodies of the synthesized package, test and entry-point files
pub fn generated_files(project_name: &str, map: &PlaceholderMap) -> Vec<GeneratedFile> {
    let package_dir = Path::new("src").join(project_name);

    [
        (package_dir.join("main.py"), MAIN_MODULE),
        (package_dir.join("__init__.py"), PACKAGE_INIT),
        (PathBuf::from("tests/test_main.py"), TEST_MODULE),
        (PathBuf::from("tests/__init__.py"), ""),
        (PathBuf::from("__main__.py"), ENTRY_POINT),
    ]
    .into_iter()
    .map(|(path, body)| GeneratedFile {
        path,
        contents: render(body, map),
    })
    .collect()
}

/// Create the canonical directories and write the synthesized files.
///
/// Synthesized files overwrite template files at the same path.
pub fn create_project_structure(
    project_root: &Path,
    project_name: &str,
    map: &PlaceholderMap,
) -> Result<Vec<PathBuf>> {
    for dir in project_directories(project_name) {
        ensure_directory_exists(&project_root.join(dir))?;
    }

    let mut written = Vec::new();
    for file in generated_files(project_name, map) {
        let dest = project_root.join(&file.path);
        write_file(&dest, &file.contents)?;
        tracing::debug!(path = %dest.display(), "Wrote generated file");
        written.push(dest);
    }

    Ok(written)
}
