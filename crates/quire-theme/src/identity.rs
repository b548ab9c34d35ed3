//! Where a theme lives on disk.
//!
//! A theme's name is its identity: the definition file and icon are both
//! named after the percent-encoded theme name.

use std::path::{Path, PathBuf};

use quire_config::{decode_file_stem, encoded_file_name};

pub const THEME_EXTENSION: &str = "theme";
pub const ICON_EXTENSION: &str = "png";

/// Definition file of theme `name` inside `dir`.
pub fn file_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(encoded_file_name(name, THEME_EXTENSION))
}

/// Icon file of theme `name` inside `dir`.
pub fn icon_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(encoded_file_name(name, ICON_EXTENSION))
}

/// Theme name encoded in a definition file's path, if it is one.
pub fn name_from_file(path: &Path) -> Option<String> {
    if path.extension()? != THEME_EXTENSION {
        return None;
    }
    decode_file_stem(path)
}

/// `Untitled N` for the smallest `N >= 1` without a definition file.
pub fn untitled_name(dir: &Path) -> String {
    (1..)
        .map(|n| format!("Untitled {n}"))
        .find(|name| !file_path(dir, name).exists())
        .unwrap_or_else(|| "Untitled".to_string())
}
