//! Software compositing of themes into RGBA images.
//!
//! Produces the window backdrop a theme describes: background color and
//! picture, then the foreground panel with its optional blur and drop
//! shadow. Text is not drawn here.

pub mod background;
pub mod blur;
pub mod canvas;
pub mod clip;
pub mod layout;
pub mod renderer;

pub use canvas::Canvas;
pub use clip::ClipMask;
pub use layout::{foreground_alpha, foreground_rect};
pub use renderer::ThemeRenderer;
