//! Loading, saving, and renaming themes in a themes directory.
//!
//! Layout of a themes directory:
//!
//! ```text
//! themes/
//!   Paper.theme        definition (sectioned TOML)
//!   Paper.png          icon, produced elsewhere
//!   Night%20Sky.theme  names are percent-encoded
//!   Images/            shared ImageStore
//! ```

pub(crate) mod keys;
mod load;
mod save;


use std::path::{Path, PathBuf};

use quire_common::{PlatformError, ThemeError};
use quire_config::SessionRegistry;
use tracing::{info, warn};

use crate::data::ThemeData;
use crate::identity;
use crate::image_store::{ImageStore, ReconcileReport};

pub const IMAGES_DIR: &str = "Images";

/// A directory of theme definitions plus their image store.
#[derive(Debug, Clone)]
pub struct ThemeLibrary {
    dir: PathBuf,
    images: ImageStore,
}

impl ThemeLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let images = ImageStore::new(dir.join(IMAGES_DIR));
        Self { dir, images }
    }

    /// Library in the platform data directory.
    pub fn open_default() -> Result<Self, PlatformError> {
        Ok(Self::new(quire_config::paths::themes_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        identity::file_path(&self.dir, name)
    }

    pub fn icon_path(&self, name: &str) -> PathBuf {
        identity::icon_path(&self.dir, name)
    }

    pub fn exists(&self, name: &str) -> bool {
        !name.is_empty() && self.file_path(name).is_file()
    }

    /// Definition files in the directory.
    pub fn theme_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(&self.dir)
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && identity::name_from_file(path).is_some())
            .collect();
        files.sort();
        files
    }

    /// Names of all saved themes, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .theme_files()
            .iter()
            .filter_map(|path| identity::name_from_file(path))
            .collect();
        names.sort();
        names
    }

    /// Theme data for `name`, or an `Untitled N` theme when `name` is empty.
    ///
    /// The new theme is saved right away so its name stays taken.
    pub fn create(&self, name: &str) -> Result<ThemeData, ThemeError> {
        let name = if name.is_empty() {
            identity::untitled_name(&self.dir)
        } else if self.exists(name) {
            return Err(ThemeError::AlreadyExists(name.to_string()));
        } else {
            name.to_string()
        };

        let theme = ThemeData::new(name);
        self.save(&theme)?;
        info!(theme = %theme.name, "theme created");
        Ok(theme)
    }

    /// Point `theme` at a new background picture.
    ///
    /// A non-empty path is imported into the image store; an empty one
    /// clears the stored reference. Returns whether anything changed.
    pub fn set_background_image(&self, theme: &mut ThemeData, path: &str) -> bool {
        if theme.background.source_path == path {
            return false;
        }
        theme.background.source_path = path.to_string();
        theme.background.stored_image = if path.is_empty() {
            String::new()
        } else {
            self.images.import_image(Path::new(path))
        };
        true
    }

    /// Rename `theme` to `new_name`.
    ///
    /// The theme is saved under its new name, sessions showing the old theme
    /// are repointed, and the old definition and icon files are deleted.
    pub fn rename(
        &self,
        theme: &mut ThemeData,
        new_name: &str,
        sessions: &mut dyn SessionRegistry,
    ) -> Result<(), ThemeError> {
        if theme.name == new_name {
            return Ok(());
        }

        let old_name = std::mem::replace(&mut theme.name, new_name.to_string());
        if let Err(e) = self.save(theme) {
            theme.name = old_name;
            return Err(e);
        }

        for session in sessions.session_names() {
            if sessions.theme(&session) != old_name {
                continue;
            }
            if let Err(e) = sessions.set_theme(&session, new_name) {
                warn!(session = %session, "failed to repoint session to renamed theme: {e}");
            }
        }

        // An unnamed theme has no files of its own
        if !old_name.is_empty() {
            remove_if_present(&self.file_path(&old_name))?;
            remove_if_present(&self.icon_path(&old_name))?;
        }

        info!(from = %old_name, to = %new_name, "theme renamed");
        Ok(())
    }

    /// Delete the definition and icon of `name`.
    pub fn remove(&self, name: &str) -> Result<(), ThemeError> {
        if !self.exists(name) {
            return Err(ThemeError::NotFound(name.to_string()));
        }
        remove_if_present(&self.file_path(name))?;
        remove_if_present(&self.icon_path(name))?;
        info!(theme = %name, "theme removed");
        Ok(())
    }

    /// Reconcile every saved theme's background with the image store.
    pub fn reconcile_backgrounds(&self) -> ReconcileReport {
        self.images.reconcile_all(&self.theme_files())
    }
}

fn remove_if_present(path: &Path) -> Result<(), ThemeError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
