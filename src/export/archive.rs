//! Zip packaging for per-color bundle documents.
//!
//! Bundles are written as `<base>_<color>.json` next to the archive, packaged
//! into `<base>.zip`, then removed. A staged file that is missing when the
//! archive is assembled is skipped with a warning.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use super::bundle::render_bundle;
use super::output::with_appended_extension;
use crate::error::PaletteError;
use crate::models::Palette;

/// Outcome of packaging a bundle archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveReport {
    /// Path of the written archive.
    pub archive: PathBuf,
    /// Entry names added to the archive, in palette order.
    pub packaged: Vec<String>,
    /// Staged files that were missing and left out.
    pub skipped: Vec<PathBuf>,
}

/// Path of the staged bundle document for `color`.
#[must_use]
pub fn staged_path(base: &Path, color: &str) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!("_{color}.json"));
    PathBuf::from(name)
}

/// A bundle document path and whether this export wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Where the document was meant to be written.
    pub path: PathBuf,
    /// False when writing failed; any file already at `path` is not ours.
    pub written: bool,
}

/// Writes one bundle document per color and returns every intended path.
///
/// A document that cannot be written is logged and marked unwritten;
/// packaging reports it as skipped.
pub fn stage_bundles(palette: &Palette, base: &Path, group: &str) -> Result<Vec<StagedFile>> {
    let mut staged = Vec::with_capacity(palette.len());

    for family in palette.families() {
        let path = staged_path(base, &family.name);
        let document = render_bundle(family, group)?;

        let written = match fs::write(&path, document) {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to stage bundle document");
                false
            }
        };
        staged.push(StagedFile { path, written });
    }

    Ok(staged)
}

/// Packages the staged files that were written and still exist into `archive`.
pub fn package_archive(archive: &Path, files: &[StagedFile]) -> Result<ArchiveReport> {
    let file = File::create(archive)
        .with_context(|| format!("Failed to create archive: {}", archive.display()))?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut report = ArchiveReport {
        archive: archive.to_path_buf(),
        ..ArchiveReport::default()
    };

    for StagedFile { path, written } in files {
        if !written || !path.is_file() {
            warn!("{}", PaletteError::MissingFile(path.clone()));
            report.skipped.push(path.clone());
            continue;
        }

        // file_name() never contains a separator, so entries stay at the archive root
        let Some(entry) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            warn!("{}", PaletteError::MissingFile(path.clone()));
            report.skipped.push(path.clone());
            continue;
        };
        let content = fs::read(path)
            .with_context(|| format!("Failed to read staged file: {}", path.display()))?;

        zip.start_file(entry.as_str(), options)
            .with_context(|| format!("Failed to start archive entry {entry}"))?;
        zip.write_all(&content)
            .with_context(|| format!("Failed to write archive entry {entry}"))?;
        report.packaged.push(entry);
    }

    zip.finish().context("Failed to finalize archive")?;

    info!(
        archive = %archive.display(),
        entries = report.packaged.len(),
        skipped = report.skipped.len(),
        "wrote bundle archive"
    );
    Ok(report)
}

/// Stages, packages and cleans up the bundle archive for `palette`.
///
/// `base` is the output path without extension; the archive is `<base>.zip`.
pub fn write_bundle_archive(palette: &Palette, base: &Path, group: &str) -> Result<ArchiveReport> {
    let staged = stage_bundles(palette, base, group)?;

    let archive = with_appended_extension(base, "zip");

    let result = package_archive(&archive, &staged);
    remove_staged(&staged);
    result
}

fn remove_staged(files: &[StagedFile]) {
    for file in files.iter().filter(|f| f.written && f.path.is_file()) {
        if let Err(e) = fs::remove_file(&file.path) {
            warn!(path = %file.path.display(), error = %e, "failed to remove staged file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaletteBuilder;
    use std::io::Read;
    use tempfile::TempDir;
    use zip::ZipArchive;

    fn palette() -> Palette {
        let mut builder = PaletteBuilder::new();
        builder.add_color("brand", "#3366CC").unwrap();
        builder.add_color("accent", "#e07a5f").unwrap();
        builder.finalize()
    }

    #[test]
    fn test_staged_path() {
        let path = staged_path(Path::new("/tmp/kit"), "brand");
        assert_eq!(path, PathBuf::from("/tmp/kit_brand.json"));
    }

    #[test]
    fn test_write_bundle_archive() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("kit");

        let report = write_bundle_archive(&palette(), &base, "kit").unwrap();
        assert_eq!(report.archive, temp_dir.path().join("kit.zip"));
        assert_eq!(report.packaged, vec!["kit_brand.json", "kit_accent.json"]);
        assert!(report.skipped.is_empty());

        // staged files are cleaned up
        assert!(!temp_dir.path().join("kit_brand.json").exists());
        assert!(!temp_dir.path().join("kit_accent.json").exists());

        let mut archive = ZipArchive::new(File::open(&report.archive).unwrap()).unwrap();
        assert_eq!(archive.len(), 2);
        let mut content = String::new();
        archive
            .by_name("kit_brand.json")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["kit"]["brand"].as_object().unwrap().len(), 11);
    }

    #[test]
    fn test_missing_staged_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("kit");
        let palette = palette();

        let staged = stage_bundles(&palette, &base, "kit").unwrap();
        fs::remove_file(&staged[0].path).unwrap();

        let report = package_archive(&temp_dir.path().join("kit.zip"), &staged).unwrap();
        assert_eq!(report.packaged, vec!["kit_accent.json"]);
        assert_eq!(report.skipped, vec![staged[0].path.clone()]);
    }

    #[test]
    fn test_unwritten_file_is_neither_packaged_nor_removed() {
        let temp_dir = TempDir::new().unwrap();
        let stale = temp_dir.path().join("kit_brand.json");
        fs::write(&stale, "{\"old\": true}").unwrap();
        let fresh = temp_dir.path().join("kit_accent.json");
        fs::write(&fresh, "{}").unwrap();

        let staged = vec![
            StagedFile {
                path: stale.clone(),
                written: false,
            },
            StagedFile {
                path: fresh.clone(),
                written: true,
            },
        ];

        let report = package_archive(&temp_dir.path().join("kit.zip"), &staged).unwrap();
        assert_eq!(report.packaged, vec!["kit_accent.json"]);
        assert_eq!(report.skipped, vec![stale.clone()]);

        remove_staged(&staged);
        assert!(stale.is_file(), "a file this export did not write is left alone");
        assert!(!fresh.exists());
    }

    #[test]
    fn test_unwritable_color_name_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("kit");

        let mut builder = PaletteBuilder::new();
        builder.add_color("fine", "#123456").unwrap();
        builder.add_color("no/such/dir", "#654321").unwrap();

        let report = write_bundle_archive(&builder.finalize(), &base, "kit").unwrap();
        assert_eq!(report.packaged, vec!["kit_fine.json"]);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_dotted_base_name_keeps_full_name() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("kit.v2");

        let report = write_bundle_archive(&palette(), &base, "kit.v2").unwrap();
        assert_eq!(report.archive, temp_dir.path().join("kit.v2.zip"));
    }
}
