use quire_common::{PixelRect, PixelSize};
use quire_theme::{ForegroundPosition, ThemeData};

/// Where the foreground panel sits in a window of `size`.
///
/// The margin insets the panel on every side it touches. For tiny windows
/// the result can be empty or have negative extents.
pub fn foreground_rect(theme: &ThemeData, size: PixelSize) -> PixelRect {
    let fg = &theme.foreground;
    let w = size.width as i32;
    let h = size.height as i32;
    let margin = fg.margin.get();

    let mut width = fg.width.get().min(w - 2 * margin);
    let height = h - 2 * margin;
    let x = match fg.position {
        ForegroundPosition::Left => margin,
        ForegroundPosition::Right => w - margin - width,
        ForegroundPosition::Stretched => {
            width = w - 2 * margin;
            margin
        }
        ForegroundPosition::Centered => (w - width) / 2,
    };

    PixelRect::new(x, margin, width, height)
}

/// Panel alpha for an opacity percentage.
pub fn foreground_alpha(opacity: i32) -> u8 {
    (opacity as f64 * 2.55).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(position: ForegroundPosition) -> ThemeData {
        let mut theme = ThemeData::new("Layout");
        theme.foreground.position = position;
        theme
    }

    const WINDOW: PixelSize = PixelSize::new(1000, 800);

    #[test]
    fn centered_panel() {
        let rect = foreground_rect(&theme(ForegroundPosition::Centered), WINDOW);
        assert_eq!(rect, PixelRect::new(150, 65, 700, 670));
    }

    #[test]
    fn left_and_right_panels() {
        let left = foreground_rect(&theme(ForegroundPosition::Left), WINDOW);
        assert_eq!(left, PixelRect::new(65, 65, 700, 670));

        let right = foreground_rect(&theme(ForegroundPosition::Right), WINDOW);
        assert_eq!(right, PixelRect::new(235, 65, 700, 670));
    }

    #[test]
    fn stretched_panel_ignores_width() {
        let rect = foreground_rect(&theme(ForegroundPosition::Stretched), WINDOW);
        assert_eq!(rect, PixelRect::new(65, 65, 870, 670));
    }

    #[test]
    fn narrow_window_limits_width() {
        let rect = foreground_rect(&theme(ForegroundPosition::Centered), PixelSize::new(600, 400));
        assert_eq!(rect, PixelRect::new(65, 65, 470, 270));
    }

    #[test]
    fn tiny_window_gives_empty_rect() {
        let rect = foreground_rect(&theme(ForegroundPosition::Left), PixelSize::new(100, 100));
        assert!(rect.is_empty());
    }

    #[test]
    fn opacity_maps_to_alpha() {
        assert_eq!(foreground_alpha(0), 0);
        assert_eq!(foreground_alpha(50), 127);
        assert_eq!(foreground_alpha(100), 255);
        assert_eq!(foreground_alpha(120), 255);
        assert_eq!(foreground_alpha(-5), 0);
    }
}
