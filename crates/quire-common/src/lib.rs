pub mod errors;
pub mod types;

pub use errors::{ConfigError, PlatformError, QuireError, ThemeError};
pub use types::{Color, PixelRect, PixelSize};

pub type Result<T> = std::result::Result<T, QuireError>;
