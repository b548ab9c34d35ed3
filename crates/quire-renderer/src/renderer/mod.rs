use std::path::Path;

use image::{ImageFormat, RgbaImage};
use quire_common::{Color, PixelRect, PixelSize, ThemeError};
use quire_theme::{ImageStore, ThemeData, ThemeLibrary};
use tracing::{debug, info};

use crate::background::{draw_picture, load_picture};
use crate::blur::blur;
use crate::canvas::Canvas;
use crate::clip::ClipMask;
use crate::layout::{foreground_alpha, foreground_rect};


/// Composites theme previews and window backdrops.
#[derive(Debug, Clone)]
pub struct ThemeRenderer {
    images: ImageStore,
}

impl ThemeRenderer {
    /// Renderer resolving background pictures in `images`.
    pub fn new(images: ImageStore) -> Self {
        Self { images }
    }

    pub fn for_library(library: &ThemeLibrary) -> Self {
        Self::new(library.images().clone())
    }

    /// Draw `theme` at `size`: background, then the panel's blur and shadow,
    /// then the panel itself. Returns the image and the panel rectangle.
    pub fn render(&self, theme: &ThemeData, size: PixelSize) -> (RgbaImage, PixelRect) {
        let mut canvas = Canvas::new(size, theme.background.color);
        self.draw_background(&mut canvas, theme);

        let rect = foreground_rect(theme, size);
        if rect.is_empty() {
            debug!(%size, %rect, "window too small for the foreground panel");
            return (canvas.into_image(), rect);
        }

        let fg = &theme.foreground;
        let shape = ClipMask::new(rect, fg.rounding.get());
        let clip = (fg.rounding.get() > 0).then_some(&shape);

        if theme.blur.enabled {
            let mut behind = canvas.copy_rect(rect);
            blur(&mut behind, theme.blur.radius.get() as u32 * 2);
            canvas.draw(&behind, rect.x, rect.y, clip);
        }

        if theme.shadow.enabled && theme.shadow.radius.get() > 0 {
            let panel = canvas.copy_rect(rect);

            let mut shadow = Canvas::new(size, Color::TRANSPARENT);
            shadow.fill(
                &shape.translated(0, theme.shadow.offset.get()),
                theme.shadow.color,
            );
            blur(&mut shadow, theme.shadow.radius.get() as u32 * 2);
            canvas.draw(&shadow, 0, 0, None);

            canvas.draw(&panel, rect.x, rect.y, clip);
        }

        canvas.fill(&shape, fg.color.with_alpha(foreground_alpha(fg.opacity.get())));

        (canvas.into_image(), rect)
    }

    /// Render and save as PNG.
    pub fn render_to_file(
        &self,
        theme: &ThemeData,
        size: PixelSize,
        path: &Path,
    ) -> Result<PixelRect, ThemeError> {
        let (image, rect) = self.render(theme, size);
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| ThemeError::Image(format!("failed to write {}: {e}", path.display())))?;
        info!(theme = %theme.name, path = %path.display(), %size, "theme rendered");
        Ok(rect)
    }

    fn draw_background(&self, canvas: &mut Canvas, theme: &ThemeData) {
        if !theme.has_background_image() {
            return;
        }
        let path = self.images.path_of(&theme.background.stored_image);
        if let Some(picture) = load_picture(&path) {
            draw_picture(canvas, theme.background.kind, &picture);
        }
    }
}
