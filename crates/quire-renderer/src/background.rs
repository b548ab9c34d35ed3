//! Drawing the background picture in each [`BackgroundType`] mode.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use quire_common::PixelSize;
use quire_theme::BackgroundType;
use tracing::debug;

use crate::canvas::Canvas;

/// Size the picture is drawn at for single-image modes.
///
/// Aspect-preserving modes use integer arithmetic, so the constrained side
/// always matches the target exactly.
pub fn scaled_size(kind: BackgroundType, image: PixelSize, target: PixelSize) -> PixelSize {
    if image.is_empty() {
        return PixelSize::default();
    }
    let (iw, ih) = (image.width as u64, image.height as u64);
    let (tw, th) = (target.width as u64, target.height as u64);

    let keep_aspect = |expand: bool| {
        let width_for_height = th * iw / ih;
        let use_height = if expand {
            width_for_height >= tw
        } else {
            width_for_height <= tw
        };
        if use_height {
            PixelSize::new(width_for_height as u32, th as u32)
        } else {
            PixelSize::new(tw as u32, (tw * ih / iw) as u32)
        }
    };

    match kind {
        BackgroundType::Stretched => target,
        BackgroundType::Scaled => keep_aspect(false),
        BackgroundType::Zoomed => keep_aspect(true),
        BackgroundType::None | BackgroundType::Tiled | BackgroundType::Centered => image,
    }
}

/// Decode the picture at `path`, or `None` when it is missing or unreadable.
pub fn load_picture(path: &Path) -> Option<RgbaImage> {
    match image::open(path) {
        Ok(picture) => Some(picture.to_rgba8()),
        Err(e) => {
            debug!(path = %path.display(), "background image not drawn: {e}");
            None
        }
    }
}

/// Paint `picture` over `canvas` according to `kind`.
pub fn draw_picture(canvas: &mut Canvas, kind: BackgroundType, picture: &RgbaImage) {
    let natural = PixelSize::new(picture.width(), picture.height());
    if natural.is_empty() {
        return;
    }

    match kind {
        BackgroundType::Tiled => {
            let tile = Canvas::from_image(picture);
            for y in (0..canvas.height()).step_by(natural.height as usize) {
                for x in (0..canvas.width()).step_by(natural.width as usize) {
                    canvas.draw(&tile, x as i32, y as i32, None);
                }
            }
        }
        kind if kind.is_single_image() => {
            let size = scaled_size(kind, natural, canvas.size());
            if size.is_empty() {
                return;
            }
            let across = visible_span(natural.width, size.width, canvas.width());
            let down = visible_span(natural.height, size.height, canvas.height());
            if across.is_empty() || down.is_empty() {
                return;
            }

            let region = imageops::crop_imm(
                picture,
                across.source,
                down.source,
                across.source_len,
                down.source_len,
            )
            .to_image();
            let layer = if (across.len, down.len) == (across.source_len, down.source_len) {
                Canvas::from_image(&region)
            } else {
                Canvas::from_image(&imageops::resize(
                    &region,
                    across.len,
                    down.len,
                    FilterType::Triangle,
                ))
            };
            canvas.draw(&layer, across.offset, down.offset, None);
        }
        _ => {}
    }
}

/// The part of a centered, scaled picture that lands on the canvas along
/// one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    /// First source pixel and source pixel count.
    source: u32,
    source_len: u32,
    /// Canvas position and length of those source pixels once scaled.
    offset: i32,
    len: u32,
}

impl Span {
    fn is_empty(&self) -> bool {
        self.source_len == 0 || self.len == 0
    }
}

/// Source pixels of a `natural`-long axis, drawn `scaled` long and centered
/// on a `target`-long canvas, that cover the visible part. Partly visible
/// source pixels are included whole.
fn visible_span(natural: u32, scaled: u32, target: u32) -> Span {
    let centered = (target as i32 - scaled as i32) / 2;
    let (n, s) = (natural as u64, scaled as u64);

    let first = (-centered).max(0) as u64;
    let last = (target as i64 - centered as i64).clamp(0, s as i64) as u64;
    if first >= last {
        return Span {
            source: 0,
            source_len: 0,
            offset: 0,
            len: 0,
        };
    }

    let source_start = first * n / s;
    let source_end = ((last * n).div_ceil(s)).min(n);
    let start = source_start * s / n;
    let end = source_end * s / n;
    Span {
        source: source_start as u32,
        source_len: (source_end - source_start) as u32,
        offset: centered + start as i32,
        len: (end - start) as u32,
    }
}
