//! Shared store of background images.
//!
//! Every picture a theme uses is copied into one flat directory so themes
//! keep working after the original file moves. Imports are deduplicated by
//! comparing file contents; new copies are named after the SHA-1 of the
//! source path, with `-1`, `-2`, … appended on collision. Reconciliation
//! re-imports missing copies and deletes images no theme refers to.
//!
//! The store is bookkeeping, not a source of errors: failures are logged
//! and skipped.

mod compare;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use quire_config::{SettingsStore, TomlSettings};
use sha1::{Digest, Sha1};
use tracing::{debug, info, warn};

use crate::library::keys;
use compare::files_equal;

/// Outcome of [`ImageStore::reconcile_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Themes whose stored image was (re)imported from their source path.
    pub imported: Vec<String>,
    /// Stored images still referenced by some theme.
    pub kept: Vec<String>,
    /// Orphaned stored images that were deleted.
    pub removed: Vec<String>,
}

/// Content-deduplicated image directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of a stored image.
    pub fn path_of(&self, stored: &str) -> PathBuf {
        self.dir.join(stored)
    }

    pub fn contains(&self, stored: &str) -> bool {
        !stored.is_empty() && self.path_of(stored).is_file()
    }

    /// Names of all stored images, sorted.
    pub fn stored_images(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.dir)
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }

    /// Copy `source` into the store and return the stored file name.
    ///
    /// If a stored file already holds the same bytes, its name is returned
    /// and nothing is copied.
    pub fn import_image(&self, source: &Path) -> String {
        let existing = self.stored_images();
        if let Some(duplicate) = existing
            .iter()
            .find(|name| files_equal(source, &self.path_of(name)))
        {
            debug!(source = %source.display(), stored = %duplicate, "image already stored");
            return duplicate.clone();
        }

        let filename = self.free_name(source);
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            warn!(dir = %self.dir.display(), "failed to create image store: {e}");
        }
        match std::fs::copy(source, self.path_of(&filename)) {
            Ok(_) => info!(source = %source.display(), stored = %filename, "image imported"),
            Err(e) => warn!(source = %source.display(), "failed to copy image: {e}"),
        }
        filename
    }

    /// First unused `<hash>[-<n>].<ext>` name for `source`.
    fn free_name(&self, source: &Path) -> String {
        let base = source_hash(source);
        let suffix = source
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let mut filename = format!("{base}.{suffix}");
        let mut id = 0;
        while self.path_of(&filename).exists() {
            id += 1;
            filename = format!("{base}-{id}.{suffix}");
        }
        filename
    }

    /// Bring every theme's background reference up to date, then delete
    /// stored images that no theme uses.
    ///
    /// A theme that names a source picture but has no stored copy (or whose
    /// copy vanished) is re-imported and its file updated. Deletion is
    /// skipped entirely when a theme file cannot be read, since its
    /// references are unknown.
    pub fn reconcile_all(&self, theme_files: &[PathBuf]) -> ReconcileReport {
        let mut report = ReconcileReport::default();
        let mut in_use = HashSet::new();
        let mut complete = true;

        for file in theme_files {
            let mut settings = match TomlSettings::open(file) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("skipping theme during image reconciliation: {e}");
                    complete = false;
                    continue;
                }
            };

            let source = settings.read_string(keys::BACKGROUND_IMAGE, "");
            let mut stored = settings.read_string(keys::BACKGROUND_IMAGE_FILE, "");
            if source.is_empty() && stored.is_empty() {
                continue;
            }

            if !source.is_empty() && !self.contains(&stored) {
                stored = self.import_image(Path::new(&source));
                settings.write_string(keys::BACKGROUND_IMAGE_FILE, &stored);
                if let Err(e) = settings.sync() {
                    warn!(theme = %file.display(), "failed to record stored image: {e}");
                }
                report.imported.push(file.display().to_string());
            }
            in_use.insert(stored);
        }

        for name in self.stored_images() {
            if in_use.contains(&name) {
                report.kept.push(name);
                continue;
            }
            if !complete {
                continue;
            }
            match std::fs::remove_file(self.path_of(&name)) {
                Ok(()) => {
                    info!(stored = %name, "removed unused image");
                    report.removed.push(name);
                }
                Err(e) => warn!(stored = %name, "failed to remove unused image: {e}"),
            }
        }

        report
    }
}

/// Lowercase hex SHA-1 of the path string.
fn source_hash(source: &Path) -> String {
    let digest = Sha1::digest(source.to_string_lossy().as_bytes());
    hex::encode(digest)
}
