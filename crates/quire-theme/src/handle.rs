//! Write-through handle over a stored theme.

use quire_common::ThemeError;
use quire_config::SessionRegistry;
use tracing::warn;

use crate::data::ThemeData;
use crate::library::ThemeLibrary;

/// A theme bound to the library it is stored in.
///
/// Every mutation goes straight to disk. A write that fails leaves the
/// change pending; pending changes are retried by [`Theme::save_changes`]
/// and when the handle is dropped.
#[derive(Debug)]
pub struct Theme<'a> {
    library: &'a ThemeLibrary,
    data: ThemeData,
    dirty: bool,
}

impl<'a> Theme<'a> {
    /// Handle over the stored theme `name`. Missing fields take defaults.
    pub fn open(library: &'a ThemeLibrary, name: &str) -> Self {
        Self {
            library,
            data: library.load(name),
            dirty: false,
        }
    }

    /// Create and store a new theme; an empty name picks `Untitled N`.
    pub fn create(library: &'a ThemeLibrary, name: &str) -> Result<Self, ThemeError> {
        Ok(Self {
            library,
            data: library.create(name)?,
            dirty: false,
        })
    }

    pub fn data(&self) -> &ThemeData {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn has_pending_changes(&self) -> bool {
        self.dirty
    }

    /// Change fields and persist them. The name is not changed here; use
    /// [`Theme::set_name`].
    pub fn update(&mut self, change: impl FnOnce(&mut ThemeData)) {
        let before = self.data.clone();
        change(&mut self.data);
        self.data.name = before.name.clone();
        if self.data != before {
            self.dirty = true;
            self.flush();
        }
    }

    /// Rename the theme, repointing sessions that use it.
    pub fn set_name(
        &mut self,
        new_name: &str,
        sessions: &mut dyn SessionRegistry,
    ) -> Result<(), ThemeError> {
        self.library.rename(&mut self.data, new_name, sessions)?;
        // rename saved the full data under the new name
        self.dirty = false;
        Ok(())
    }

    /// Import `path` as the background picture; empty clears it.
    pub fn set_background_image(&mut self, path: &str) {
        if self.library.set_background_image(&mut self.data, path) {
            self.dirty = true;
            self.flush();
        }
    }

    /// Drop pending changes and reload from disk.
    pub fn forget_changes(&mut self) {
        self.data = self.library.load(&self.data.name);
        self.dirty = false;
    }

    /// Write pending changes.
    pub fn save_changes(&mut self) -> Result<(), ThemeError> {
        if !self.dirty {
            return Ok(());
        }
        self.library.save(&self.data)?;
        self.dirty = false;
        Ok(())
    }

    fn flush(&mut self) {
        if let Err(e) = self.save_changes() {
            warn!(theme = %self.data.name, "failed to save theme, change kept pending: {e}");
        }
    }
}

impl Drop for Theme<'_> {
    fn drop(&mut self) {
        if self.dirty {
            self.flush();
        }
    }
}
