//! Test utilities shared across the quizmill workspace.
//!
//! Provides workspace-local temporary directories and helpers for
//! inspecting generated QTI archives, plus canned question banks in
//! [`fixtures`].

pub mod fixtures;

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use tempfile::TempDir;
use zip::ZipArchive;

/// Creates a temporary directory under the workspace `.tmp/` directory.
///
/// Packaging renames the finished archive into place, which requires the
/// staging directory and the destination to live on the same filesystem.
/// Tests that exercise that path should build output locations from this
/// helper rather than the system temp directory.
///
/// # Returns
///
/// A [`TempDir`] whose contents are removed when the value is dropped.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or the temporary
/// directory cannot be created.
///
/// # Examples
///
/// ```
/// let dir = quizmill_testkit::temp_dir_in_workspace();
/// assert!(dir.path().exists());
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("failed to create workspace temp dir")
}

/// Fallible variant of [`temp_dir_in_workspace`].
///
/// # Errors
///
/// Returns any I/O error raised while creating `.tmp/` or the temporary
/// directory inside it.
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&base)?;
    TempDir::new_in(&base)
}

/// Reads every file entry of a zip archive into memory.
///
/// Directory entries are skipped. The map is keyed by entry name, so
/// assertions about individual files stay independent of archive order.
///
/// # Panics
///
/// Panics if the archive cannot be opened or an entry cannot be read.
pub fn archive_entries(path: impl AsRef<Path>) -> BTreeMap<String, Vec<u8>> {
    let file = std::fs::File::open(path.as_ref()).expect("failed to open archive");
    let mut archive = ZipArchive::new(file).expect("failed to read archive");
    let mut entries = BTreeMap::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).expect("failed to read entry");
        if entry.is_dir() {
            continue;
        }
        let mut contents = Vec::new();
        entry
            .read_to_end(&mut contents)
            .expect("failed to read entry contents");
        entries.insert(entry.name().to_string(), contents);
    }
    entries
}

/// Lists the file entries of a zip archive in archive order.
///
/// Useful for asserting on package layout, where the position of the
/// manifest relative to the items matters.
///
/// # Panics
///
/// Panics if the archive cannot be opened or an entry cannot be read.
pub fn archive_entry_names(path: impl AsRef<Path>) -> Vec<String> {
    let file = std::fs::File::open(path.as_ref()).expect("failed to open archive");
    let mut archive = ZipArchive::new(file).expect("failed to read archive");
    let mut names = Vec::new();
    for index in 0..archive.len() {
        let entry = archive.by_index(index).expect("failed to read entry");
        if entry.is_dir() {
            continue;
        }
        names.push(entry.name().to_string());
    }
    names
}
