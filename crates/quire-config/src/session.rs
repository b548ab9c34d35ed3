//! Session records as seen by the theme subsystem.
//!
//! A session remembers which theme it was last shown with. Renaming a theme
//! walks every session (plus the unnamed default session) and repoints the
//! ones that used the old name.

use std::path::{Path, PathBuf};

use quire_common::ConfigError;
use tracing::debug;

use crate::paths::{decode_file_stem, encoded_file_name};
use crate::settings::{SettingsStore, TomlSettings};

/// Name of the unnamed default session.
pub const DEFAULT_SESSION: &str = "";

const THEME_KEY: &str = "Session/Theme";

/// Access to every session's theme back-reference.
pub trait SessionRegistry {
    /// All session names, with [`DEFAULT_SESSION`] first.
    fn session_names(&self) -> Vec<String>;

    /// Theme used by `session`; empty when none is recorded.
    fn theme(&self, session: &str) -> String;

    fn set_theme(&mut self, session: &str, theme: &str) -> Result<(), ConfigError>;
}

/// Sessions stored as `<encoded name>.session` files in one directory, plus
/// a separate settings file for the default session.
#[derive(Debug, Clone)]
pub struct SessionDirectory {
    dir: PathBuf,
    default_file: PathBuf,
}

impl SessionDirectory {
    pub fn new(dir: impl Into<PathBuf>, default_file: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            default_file: default_file.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Settings file backing `session`.
    pub fn file_path(&self, session: &str) -> PathBuf {
        if session == DEFAULT_SESSION {
            self.default_file.clone()
        } else {
            self.dir.join(encoded_file_name(session, "session"))
        }
    }
}

impl SessionRegistry for SessionDirectory {
    fn session_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.dir)
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == "session"))
            .filter_map(|path| decode_file_stem(&path))
            .collect();
        names.sort();
        names.insert(0, DEFAULT_SESSION.to_string());
        names
    }

    fn theme(&self, session: &str) -> String {
        TomlSettings::open_lenient(self.file_path(session)).read_string(THEME_KEY, "")
    }

    fn set_theme(&mut self, session: &str, theme: &str) -> Result<(), ConfigError> {
        let mut settings = TomlSettings::open(self.file_path(session))?;
        settings.write_string(THEME_KEY, theme);
        settings.sync()?;
        debug!(session, theme, "session theme updated");
        Ok(())
    }
}
