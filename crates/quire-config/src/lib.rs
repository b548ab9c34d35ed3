//! Quire settings storage.
//!
//! Provides the sectioned key-value store that theme and session files are
//! written with, the session registry used when a theme is renamed, and the
//! platform directories everything lives under.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use quire_config::{SettingsStore, TomlSettings};
//!
//! let mut settings = TomlSettings::open("/tmp/Paper.theme").expect("failed to open");
//! let width = settings.read_int("Foreground/Width", 700);
//! settings.write_int("Foreground/Width", width + 10);
//! settings.sync().expect("failed to write");
//! ```

pub mod paths;
pub mod session;
pub mod settings;

pub use paths::{decode_file_stem, encoded_file_name};
pub use session::{SessionDirectory, SessionRegistry, DEFAULT_SESSION};
pub use settings::{SettingsStore, TomlSettings};
