//! Gaussian blur approximated by three box blurs per axis.
//!
//! Works on the premultiplied channels directly, so transparent pixels do
//! not bleed color. Samples beyond the edge repeat the edge pixel.

use crate::canvas::Canvas;

const PASSES: usize = 3;

/// Blur `canvas` in place. `radius` is the reach of the blur in pixels; the
/// gaussian's sigma is half of it. Radii below 1 leave the canvas as is.
pub fn blur(canvas: &mut Canvas, radius: u32) {
    if radius < 1 || canvas.width() == 0 || canvas.height() == 0 {
        return;
    }
    let sigma = radius as f64 / 2.0;
    let width = canvas.width() as usize;
    let height = canvas.height() as usize;
    let buffer: &mut [u8] = canvas.raw_mut();

    let mut scratch = vec![[0u8; 4]; width.max(height)];
    for box_size in box_sizes(sigma, PASSES) {
        let reach = (box_size - 1) / 2;
        if reach == 0 {
            continue;
        }
        for y in 0..height {
            blur_line(buffer, y * width, 1, width, reach, &mut scratch);
        }
        for x in 0..width {
            blur_line(buffer, x, width, height, reach, &mut scratch);
        }
    }
}

/// Odd box widths whose successive application approximates a gaussian of
/// `sigma`.
pub(crate) fn box_sizes(sigma: f64, passes: usize) -> Vec<usize> {
    let n = passes as f64;
    let ideal = (12.0 * sigma * sigma / n + 1.0).sqrt();
    let mut lower = ideal.floor() as usize;
    if lower % 2 == 0 {
        lower = lower.saturating_sub(1);
    }
    let lower = lower.max(1);
    let upper = lower + 2;

    let l = lower as f64;
    let ideal_count =
        (12.0 * sigma * sigma - n * l * l - 4.0 * n * l - 3.0 * n) / (-4.0 * l - 4.0);
    let count = ideal_count.round().max(0.0) as usize;

    (0..passes)
        .map(|i| if i < count { lower } else { upper })
        .collect()
}

/// One box pass over `len` pixels starting at pixel `start`, `stride`
/// pixels apart.
fn blur_line(
    buffer: &mut [u8],
    start: usize,
    stride: usize,
    len: usize,
    reach: usize,
    scratch: &mut [[u8; 4]],
) {
    let at = |i: isize| -> usize {
        let clamped = i.clamp(0, len as isize - 1) as usize;
        (start + clamped * stride) * 4
    };
    let window = (2 * reach + 1) as u32;
    let reach = reach as isize;

    let mut sums = [0u32; 4];
    for i in -reach..=reach {
        let offset = at(i);
        for (c, sum) in sums.iter_mut().enumerate() {
            *sum += buffer[offset + c] as u32;
        }
    }

    for (i, out) in scratch.iter_mut().take(len).enumerate() {
        *out = std::array::from_fn(|c| ((sums[c] + window / 2) / window) as u8);
        let incoming = at(i as isize + reach + 1);
        let outgoing = at(i as isize - reach);
        for (c, sum) in sums.iter_mut().enumerate() {
            *sum = *sum + buffer[incoming + c] as u32 - buffer[outgoing + c] as u32;
        }
    }

    for (i, pixel) in scratch.iter().take(len).enumerate() {
        let offset = (start + i * stride) * 4;
        buffer[offset..offset + 4].copy_from_slice(pixel);
    }
}
