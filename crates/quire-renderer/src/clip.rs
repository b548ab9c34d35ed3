//! Antialiased rectangle and rounded-rectangle masks.

use quire_common::PixelRect;

/// A rectangle with optionally rounded corners.
///
/// Coverage is sampled at pixel centers: 1 inside, 0 outside, with a
/// one-pixel ramp along the rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipMask {
    rect: PixelRect,
    radius: f32,
}

impl ClipMask {
    /// Mask over `rect`. The corner radius is limited to half the shorter
    /// side; zero gives square corners.
    pub fn new(rect: PixelRect, radius: i32) -> Self {
        let limit = rect.width.min(rect.height).max(0) as f32 / 2.0;
        Self {
            rect,
            radius: (radius.max(0) as f32).min(limit),
        }
    }

    pub fn bounds(&self) -> PixelRect {
        self.rect
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Same shape moved by (`dx`, `dy`).
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            rect: PixelRect::new(
                self.rect.x + dx,
                self.rect.y + dy,
                self.rect.width,
                self.rect.height,
            ),
            radius: self.radius,
        }
    }

    /// Fraction of pixel (`x`, `y`) inside the shape.
    pub fn coverage(&self, x: i32, y: i32) -> f32 {
        if !self.rect.contains(x, y) {
            return 0.0;
        }
        if self.radius <= 0.0 {
            return 1.0;
        }

        let fx = x as f32 + 0.5;
        let fy = y as f32 + 0.5;
        let left = self.rect.x as f32 + self.radius;
        let right = self.rect.right() as f32 - self.radius;
        let top = self.rect.y as f32 + self.radius;
        let bottom = self.rect.bottom() as f32 - self.radius;

        // Distance to the nearest point of the inner rectangle; zero
        // everywhere except in the corner quadrants.
        let dx = fx - fx.clamp(left, right);
        let dy = fy - fy.clamp(top, bottom);
        let distance = dx.hypot(dy);
        (self.radius - distance + 0.5).clamp(0.0, 1.0)
    }
}
