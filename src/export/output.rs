//! Output path handling for exports.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Extensions removed from a user-supplied file name, checked in this order.
const KNOWN_SUFFIXES: [&str; 5] = [".txt", ".svg", ".csv", ".json", ".zip"];

/// Strips export extensions from `name`.
///
/// Each suffix is removed at most once, in the order `.txt`, `.svg`, `.csv`,
/// `.json`, `.zip`, so `"kit.svg.txt"` becomes `"kit"`.
#[must_use]
pub fn strip_known_suffix(name: &str) -> &str {
    KNOWN_SUFFIXES
        .iter()
        .fold(name, |acc, suffix| acc.strip_suffix(suffix).unwrap_or(acc))
}

/// Resolves an output base path (no extension).
///
/// Absolute names are used as-is; relative names are joined onto `base_dir`.
#[must_use]
pub fn resolve_output_base(name: &str, base_dir: &Path) -> PathBuf {
    let stripped = Path::new(strip_known_suffix(name));
    if stripped.is_absolute() {
        stripped.to_path_buf()
    } else {
        base_dir.join(stripped)
    }
}

/// Directory containing the running executable.
pub fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .context("Executable path has no parent directory")
}

/// Default bundle group name for an output base: its final path component.
#[must_use]
pub fn group_name_for(base: &Path) -> String {
    base.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "palette".to_string())
}

/// Appends `.extension` to `base` without replacing an existing dotted part.
#[must_use]
pub fn with_appended_extension(base: &Path, extension: &str) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
