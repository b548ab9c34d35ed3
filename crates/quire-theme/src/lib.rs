//! Theme definitions for the Quire writing surface.
//!
//! A theme describes the background, the foreground panel the text is laid
//! out in, optional blur and drop shadow behind that panel, and text
//! styling. Themes live as one settings file each in a themes directory;
//! background pictures are copied into a shared, deduplicated image store
//! next to them.

pub mod bounded;
pub mod data;
pub mod font;
pub mod handle;
pub mod identity;
pub mod image_store;
pub mod library;

pub use bounded::Bounded;
pub use data::{
    Background, BackgroundType, Blur, Foreground, ForegroundPosition, Shadow, Spacings, TextStyle,
    ThemeData,
};
pub use font::FontSpec;
pub use handle::Theme;
pub use image_store::{ImageStore, ReconcileReport};
pub use library::ThemeLibrary;
