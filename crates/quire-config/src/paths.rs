//! Platform directories and file-name encoding.

use std::path::{Path, PathBuf};

use quire_common::PlatformError;

const APP_NAME: &str = "quire";

/// Returns the platform-specific configuration directory for Quire.
///
/// - macOS: `~/Library/Application Support/quire`
/// - Linux: `$XDG_CONFIG_HOME/quire` (defaults to `~/.config/quire`)
/// - Windows: `%APPDATA%\quire`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for Quire.
///
/// - macOS: `~/Library/Application Support/quire`
/// - Linux: `$XDG_DATA_HOME/quire` (defaults to `~/.local/share/quire`)
/// - Windows: `%APPDATA%\quire`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Directory holding `*.theme` files, their icons, and the `Images` store.
pub fn themes_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("themes"))
}

/// Directory holding named `*.session` files.
pub fn sessions_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("sessions"))
}

/// Settings file of the unnamed default session.
pub fn default_session_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("session.toml"))
}

/// Percent-encode `name` and append `.ext`.
///
/// Everything except ASCII alphanumerics and `-._~` is escaped, so
/// `"Untitled 1"` becomes `Untitled%201.theme`.
pub fn encoded_file_name(name: &str, ext: &str) -> String {
    format!("{}.{ext}", urlencoding::encode(name))
}

/// Recover the name encoded in a file's stem, if it decodes to UTF-8.
pub fn decode_file_stem(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    urlencoding::decode(stem).ok().map(|s| s.into_owned())
}
