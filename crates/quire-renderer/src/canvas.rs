//! Premultiplied-alpha pixel buffer with source-over compositing.

use image::{Rgba, RgbaImage};
use quire_common::{Color, PixelRect, PixelSize};

use crate::clip::ClipMask;

/// An RGBA8 buffer whose color channels are premultiplied by alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Canvas of `size` filled with `fill`.
    pub fn new(size: PixelSize, fill: Color) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(size.width, size.height, Rgba(fill.premultiplied())),
        }
    }

    /// Canvas holding a straight-alpha image.
    pub fn from_image(image: &RgbaImage) -> Self {
        let mut pixels = image.clone();
        for pixel in pixels.pixels_mut() {
            pixel.0 = premultiply(pixel.0);
        }
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> PixelSize {
        PixelSize::new(self.width(), self.height())
    }

    /// Premultiplied pixel at (`x`, `y`); transparent outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> [u8; 4] {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return [0; 4];
        }
        self.pixels.get_pixel(x as u32, y as u32).0
    }

    pub(crate) fn raw_mut(&mut self) -> &mut RgbaImage {
        &mut self.pixels
    }

    /// Copy of the pixels under `rect`. Parts outside the canvas are
    /// transparent.
    pub fn copy_rect(&self, rect: PixelRect) -> Canvas {
        let width = rect.width.max(0) as u32;
        let height = rect.height.max(0) as u32;
        let pixels = RgbaImage::from_fn(width, height, |x, y| {
            Rgba(self.pixel(rect.x + x as i32, rect.y + y as i32))
        });
        Canvas { pixels }
    }

    /// Composite `src` with its top-left corner at (`x`, `y`).
    ///
    /// With a clip, each destination pixel is weighted by the mask's
    /// coverage there.
    pub fn draw(&mut self, src: &Canvas, x: i32, y: i32, clip: Option<&ClipMask>) {
        let target = PixelRect::new(x, y, src.width() as i32, src.height() as i32)
            .intersect(&self.size().rect());
        for dy in target.y..target.bottom() {
            for dx in target.x..target.right() {
                let coverage = clip.map_or(1.0, |mask| mask.coverage(dx, dy));
                if coverage <= 0.0 {
                    continue;
                }
                let source = src.pixel(dx - x, dy - y);
                let dst = self.pixels.get_pixel_mut(dx as u32, dy as u32);
                dst.0 = blend_over(dst.0, source, coverage);
            }
        }
    }

    /// Paint the mask's shape with `color`, antialiased by coverage.
    pub fn fill(&mut self, shape: &ClipMask, color: Color) {
        let source = color.premultiplied();
        let target = shape.bounds().intersect(&self.size().rect());
        for y in target.y..target.bottom() {
            for x in target.x..target.right() {
                let coverage = shape.coverage(x, y);
                if coverage <= 0.0 {
                    continue;
                }
                let dst = self.pixels.get_pixel_mut(x as u32, y as u32);
                dst.0 = blend_over(dst.0, source, coverage);
            }
        }
    }

    /// Convert back to a straight-alpha image.
    pub fn into_image(self) -> RgbaImage {
        let mut pixels = self.pixels;
        for pixel in pixels.pixels_mut() {
            pixel.0 = unpremultiply(pixel.0);
        }
        pixels
    }
}

fn premultiply([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    Color::from_rgba(r, g, b, a).premultiplied()
}

fn unpremultiply([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    if a == 0 {
        return [0; 4];
    }
    let alpha = a as u32;
    let div = |c: u8| ((c as u32 * 255 + alpha / 2) / alpha).min(255) as u8;
    [div(r), div(g), div(b), a]
}

/// Source-over of premultiplied `src`, scaled by `coverage`, onto `dst`.
fn blend_over(dst: [u8; 4], src: [u8; 4], coverage: f32) -> [u8; 4] {
    let src = if coverage >= 1.0 {
        src
    } else {
        src.map(|c| (c as f32 * coverage).round() as u8)
    };
    let inverse = 255 - src[3] as u32;
    std::array::from_fn(|i| {
        (src[i] as u32 + (dst[i] as u32 * inverse + 127) / 255).min(255) as u8
    })
}
