use std::path::PathBuf;

use quire_common::ConfigError;
use toml::{Table, Value};
use tracing::{debug, warn};

use super::writer::write_atomic;
use super::SettingsStore;

/// A settings document loaded from (and written back to) one TOML file.
///
/// A file that does not exist yet opens as an empty document. Unsynced
/// writes are flushed when the store is dropped.
#[derive(Debug)]
pub struct TomlSettings {
    path: PathBuf,
    table: Table,
    dirty: bool,
}

impl TomlSettings {
    /// Open the document at `path`.
    ///
    /// Returns an error only when the file exists but cannot be read or is
    /// not valid TOML.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let table = match std::fs::read_to_string(&path) {
            Ok(content) => content.parse::<Table>().map_err(|e| {
                ConfigError::ParseError(format!("failed to parse {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Table::new(),
            Err(e) => {
                return Err(ConfigError::ParseError(format!(
                    "failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        Ok(Self {
            path,
            table,
            dirty: false,
        })
    }

    /// Open the document at `path`, starting from an empty document when the
    /// existing file is unreadable.
    pub fn open_lenient(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(path.clone()) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{e}; continuing with empty settings");
                Self {
                    path,
                    table: Table::new(),
                    dirty: false,
                }
            }
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn value(&self, key: &str) -> Option<&Value> {
        match split_key(key) {
            (Some(section), name) => self.table.get(section)?.as_table()?.get(name),
            (None, name) => self.table.get(name),
        }
    }

    fn set_value(&mut self, key: &str, value: Value) {
        match split_key(key) {
            (Some(section), name) => {
                let entry = self
                    .table
                    .entry(section.to_string())
                    .or_insert_with(|| Value::Table(Table::new()));
                if !entry.is_table() {
                    *entry = Value::Table(Table::new());
                }
                if let Value::Table(section) = entry {
                    section.insert(name.to_string(), value);
                }
            }
            (None, name) => {
                self.table.insert(name.to_string(), value);
            }
        }
        self.dirty = true;
    }
}

fn split_key(key: &str) -> (Option<&str>, &str) {
    match key.split_once('/') {
        Some((section, name)) => (Some(section), name),
        None => (None, key),
    }
}

impl SettingsStore for TomlSettings {
    fn read_string(&self, key: &str, default: &str) -> String {
        match self.value(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Integer(i)) => i.to_string(),
            Some(Value::Float(f)) => f.to_string(),
            Some(Value::Boolean(b)) => b.to_string(),
            _ => default.to_string(),
        }
    }

    fn read_int(&self, key: &str, default: i32) -> i32 {
        match self.value(key) {
            Some(Value::Integer(i)) => (*i).clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            Some(Value::Float(f)) => f.round() as i32,
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    fn read_bool(&self, key: &str, default: bool) -> bool {
        match self.value(key) {
            Some(Value::Boolean(b)) => *b,
            Some(Value::Integer(i)) => *i != 0,
            Some(Value::String(s)) => match s.trim() {
                "true" => true,
                "false" => false,
                _ => default,
            },
            _ => default,
        }
    }

    fn write_string(&mut self, key: &str, value: &str) {
        self.set_value(key, Value::String(value.to_string()));
    }

    fn write_int(&mut self, key: &str, value: i32) {
        self.set_value(key, Value::Integer(value as i64));
    }

    fn write_bool(&mut self, key: &str, value: bool) {
        self.set_value(key, Value::Boolean(value));
    }

    fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    fn remove(&mut self, key: &str) {
        let removed = match split_key(key) {
            (Some(section), name) => self
                .table
                .get_mut(section)
                .and_then(Value::as_table_mut)
                .and_then(|t| t.remove(name)),
            (None, name) => self.table.remove(name),
        };
        if removed.is_some() {
            self.dirty = true;
        }
    }

    fn sync(&mut self) -> Result<(), ConfigError> {
        if !self.dirty {
            return Ok(());
        }
        let content = toml::to_string_pretty(&self.table)
            .map_err(|e| ConfigError::WriteError(format!("failed to serialize settings: {e}")))?;
        write_atomic(&self.path, &content)?;
        self.dirty = false;
        debug!(path = %self.path.display(), "settings synced");
        Ok(())
    }
}

impl Drop for TomlSettings {
    fn drop(&mut self) {
        if let Err(e) = self.sync() {
            warn!("failed to flush settings on drop: {e}");
        }
    }
}
