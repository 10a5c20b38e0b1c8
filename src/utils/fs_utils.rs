// File system utilities

use std::fs;
use std::path::Path;

pub fn ensure_directory_exists(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Copy a file, creating parent directories. Permission bits travel with
/// the copy; timestamps are not preserved.
pub fn copy_file(source: &Path, dest: &Path) -> std::io::Result<u64> {
    if let Some(parent) = dest.parent() {
        ensure_directory_exists(parent)?;
    }
    fs::copy(source, dest)
}

/// Write a file, creating parent directories
pub fn write_file(dest: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = dest.parent() {
        ensure_directory_exists(parent)?;
    }
    fs::write(dest, content)
}
