//! Sectioned key-value settings backed by TOML files.
//!
//! Keys use the `Section/Name` form. Each section becomes a TOML table and
//! the remainder of the key an entry inside it, so `Foreground/Width = 700`
//! is stored as:
//!
//! ```toml
//! [Foreground]
//! Width = 700
//! ```
//!
//! Keys without a `/` live at the top level of the document.

mod store;
mod writer;


pub use store::TomlSettings;

/// Typed access to a key-value settings document.
///
/// Reads never fail: a missing key or a value of the wrong type yields the
/// supplied default. Writes are buffered until [`SettingsStore::sync`].
pub trait SettingsStore {
    fn read_string(&self, key: &str, default: &str) -> String;
    fn read_int(&self, key: &str, default: i32) -> i32;
    fn read_bool(&self, key: &str, default: bool) -> bool;

    fn write_string(&mut self, key: &str, value: &str);
    fn write_int(&mut self, key: &str, value: i32);
    fn write_bool(&mut self, key: &str, value: bool);

    fn contains(&self, key: &str) -> bool;
    fn remove(&mut self, key: &str);

    /// Persist buffered writes.
    fn sync(&mut self) -> Result<(), quire_common::ConfigError>;
}
