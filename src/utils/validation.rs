// Project name sanitization for generated Python packages

use regex::Regex;
use std::sync::LazyLock;

/// Prefix applied when a sanitized name would start with a digit
pub const DIGIT_PREFIX: &str = "project_";

/// Name used when nothing usable survives sanitization
pub const DEFAULT_PROJECT_NAME: &str = "my_project";

static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_]").expect("static regex is valid"));

static UNDERSCORE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("static regex is valid"));

static PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("static regex is valid"));

/// Convert an arbitrary project name into a valid Python package name.
///
/// The input is lowercased, every character outside `[a-z0-9_]` becomes `_`,
/// leading/trailing underscores are stripped and runs of underscores are
/// collapsed. A leading digit gets [`DIGIT_PREFIX`]; an empty result falls
/// back to [`DEFAULT_PROJECT_NAME`]. Total and idempotent.
pub fn sanitize_project_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let replaced = INVALID_CHARS.replace_all(&lowered, "_");
    let stripped = replaced.trim_matches('_');
    let collapsed = UNDERSCORE_RUNS.replace_all(stripped, "_").into_owned();

    if collapsed.is_empty() {
        return DEFAULT_PROJECT_NAME.to_string();
    }

    if collapsed.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("{DIGIT_PREFIX}{collapsed}");
    }

    collapsed
}

/// Check whether a name is already a normalized package name
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME.is_match(name) && !name.contains("__") && !name.ends_with('_')
}
