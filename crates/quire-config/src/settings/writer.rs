//! Atomic settings writes.
//!
//! Writes go to a sibling `.tmp` file which is then renamed over the
//! target, so a crash mid-write never leaves a truncated document.

use std::path::Path;

use quire_common::ConfigError;

pub(super) fn write_atomic(path: &Path, content: &str) -> Result<(), ConfigError> {
    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::WriteError(format!(
                "failed to create directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = std::path::PathBuf::from(tmp_name);

    std::fs::write(&tmp_path, content).map_err(|e| {
        ConfigError::WriteError(format!("failed to write {}: {e}", tmp_path.display()))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename can fail on some platforms; fall back to a direct write
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        let _ = std::fs::remove_file(&tmp_path);
        std::fs::write(path, content).map_err(|e2| {
            ConfigError::WriteError(format!("failed to write {}: {e2}", path.display()))
        })?;
    }

    Ok(())
}
