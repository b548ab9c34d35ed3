//! The themable properties of the writing surface.

use quire_common::Color;

use crate::bounded::{
    BlurRadius, LineSpacing, Margin, Opacity, Padding, PanelWidth, ParagraphSpacing, Rounding,
    ShadowOffset, ShadowRadius, TabWidth,
};
use crate::font::FontSpec;

/// How the background image fills the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackgroundType {
    /// Fallback color only.
    #[default]
    None,
    Tiled,
    Centered,
    /// Fill exactly, ignoring aspect ratio.
    Stretched,
    /// Fit inside the window, keeping aspect ratio.
    Scaled,
    /// Cover the window, keeping aspect ratio and cropping the overflow.
    Zoomed,
}

impl BackgroundType {
    pub const ALL: [BackgroundType; 6] = [
        BackgroundType::None,
        BackgroundType::Tiled,
        BackgroundType::Centered,
        BackgroundType::Stretched,
        BackgroundType::Scaled,
        BackgroundType::Zoomed,
    ];

    /// Stored index; out-of-range values saturate to the nearest variant.
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.clamp(0, Self::ALL.len() as i32 - 1) as usize]
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    /// Whether the image is drawn once, centered, rather than tiled or not
    /// at all.
    pub fn is_single_image(self) -> bool {
        matches!(
            self,
            Self::Centered | Self::Stretched | Self::Scaled | Self::Zoomed
        )
    }
}

/// Horizontal placement of the foreground panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ForegroundPosition {
    Left,
    #[default]
    Centered,
    Right,
    /// Full width between the margins; the panel width is ignored.
    Stretched,
}

impl ForegroundPosition {
    pub const ALL: [ForegroundPosition; 4] = [
        ForegroundPosition::Left,
        ForegroundPosition::Centered,
        ForegroundPosition::Right,
        ForegroundPosition::Stretched,
    ];

    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.clamp(0, Self::ALL.len() as i32 - 1) as usize]
    }

    pub fn index(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub kind: BackgroundType,
    pub color: Color,
    /// Where the picture was originally picked from. May no longer exist.
    pub source_path: String,
    /// File name inside the image store; the durable reference.
    pub stored_image: String,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            kind: BackgroundType::None,
            color: Color::from_rgb(0xcc, 0xcc, 0xcc),
            source_path: String::new(),
            stored_image: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Foreground {
    pub color: Color,
    /// Percent; becomes the panel's alpha when rendering.
    pub opacity: Opacity,
    pub width: PanelWidth,
    /// Corner radius in pixels.
    pub rounding: Rounding,
    pub margin: Margin,
    /// Inner spacing for text layout. Not used when compositing.
    pub padding: Padding,
    pub position: ForegroundPosition,
}

impl Default for Foreground {
    fn default() -> Self {
        Self {
            color: Color::from_rgb(0xcc, 0xcc, 0xcc),
            opacity: Opacity::new(100),
            width: PanelWidth::new(700),
            rounding: Rounding::new(0),
            margin: Margin::new(65),
            padding: Padding::new(0),
            position: ForegroundPosition::Centered,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Blur {
    pub enabled: bool,
    pub radius: BlurRadius,
}

impl Default for Blur {
    fn default() -> Self {
        Self {
            enabled: false,
            radius: BlurRadius::new(32),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub enabled: bool,
    /// Vertical displacement in pixels.
    pub offset: ShadowOffset,
    pub radius: ShadowRadius,
    pub color: Color,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            enabled: false,
            offset: ShadowOffset::new(2),
            radius: ShadowRadius::new(8),
            color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub font: FontSpec,
    pub misspelled_color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            font: FontSpec::default(),
            misspelled_color: Color::from_rgb(0xff, 0x00, 0x00),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spacings {
    pub indent_first_line: bool,
    /// Percent of the font's natural line height.
    pub line_spacing: LineSpacing,
    pub above: ParagraphSpacing,
    pub below: ParagraphSpacing,
    pub tab_width: TabWidth,
}

impl Default for Spacings {
    fn default() -> Self {
        Self {
            indent_first_line: false,
            line_spacing: LineSpacing::new(100),
            above: ParagraphSpacing::new(0),
            below: ParagraphSpacing::new(0),
            tab_width: TabWidth::new(48),
        }
    }
}

/// Everything a theme defines.
///
/// Two themes are equal when every field, the name included, is equal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeData {
    pub name: String,
    pub background: Background,
    pub foreground: Foreground,
    pub blur: Blur,
    pub shadow: Shadow,
    pub text: TextStyle,
    pub spacings: Spacings,
}

impl ThemeData {
    /// Default-valued theme called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn has_background_image(&self) -> bool {
        self.background.kind != BackgroundType::None && !self.background.stored_image.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let theme = ThemeData::new("Paper");
        assert_eq!(theme.name, "Paper");
        assert_eq!(theme.background.kind, BackgroundType::None);
        assert_eq!(theme.background.color.name(), "#cccccc");
        assert_eq!(theme.foreground.color.name(), "#cccccc");
        assert_eq!(theme.foreground.opacity.get(), 100);
        assert_eq!(theme.foreground.width.get(), 700);
        assert_eq!(theme.foreground.rounding.get(), 0);
        assert_eq!(theme.foreground.margin.get(), 65);
        assert_eq!(theme.foreground.padding.get(), 0);
        assert_eq!(theme.foreground.position, ForegroundPosition::Centered);
        assert!(!theme.blur.enabled);
        assert_eq!(theme.blur.radius.get(), 32);
        assert!(!theme.shadow.enabled);
        assert_eq!(theme.shadow.radius.get(), 8);
        assert_eq!(theme.shadow.offset.get(), 2);
        assert_eq!(theme.shadow.color.name(), "#000000");
        assert_eq!(theme.text.color.name(), "#000000");
        assert_eq!(theme.text.misspelled_color.name(), "#ff0000");
        assert_eq!(theme.text.font.family, "Times New Roman");
        assert_eq!(theme.spacings.line_spacing.get(), 100);
        assert_eq!(theme.spacings.tab_width.get(), 48);
    }

    #[test]
    fn every_bounded_field_saturates() {
        let mut theme = ThemeData::default();

        theme.foreground.opacity.set(-1);
        theme.foreground.width.set(499);
        theme.foreground.rounding.set(-1);
        theme.foreground.margin.set(0);
        theme.foreground.padding.set(-1);
        theme.blur.radius.set(0);
        theme.shadow.offset.set(-1);
        theme.shadow.radius.set(0);
        theme.spacings.line_spacing.set(49);
        theme.spacings.above.set(-1);
        theme.spacings.below.set(-1);
        theme.spacings.tab_width.set(0);

        assert_eq!(theme.foreground.opacity.get(), 0);
        assert_eq!(theme.foreground.width.get(), 500);
        assert_eq!(theme.foreground.rounding.get(), 0);
        assert_eq!(theme.foreground.margin.get(), 1);
        assert_eq!(theme.foreground.padding.get(), 0);
        assert_eq!(theme.blur.radius.get(), 1);
        assert_eq!(theme.shadow.offset.get(), 0);
        assert_eq!(theme.shadow.radius.get(), 1);
        assert_eq!(theme.spacings.line_spacing.get(), 50);
        assert_eq!(theme.spacings.above.get(), 0);
        assert_eq!(theme.spacings.below.get(), 0);
        assert_eq!(theme.spacings.tab_width.get(), 1);

        theme.foreground.opacity.set(101);
        theme.foreground.width.set(10_000);
        theme.foreground.rounding.set(101);
        theme.foreground.margin.set(251);
        theme.foreground.padding.set(251);
        theme.blur.radius.set(129);
        theme.shadow.offset.set(129);
        theme.shadow.radius.set(129);
        theme.spacings.line_spacing.set(1001);
        theme.spacings.above.set(1001);
        theme.spacings.below.set(1001);
        theme.spacings.tab_width.set(1001);

        assert_eq!(theme.foreground.opacity.get(), 100);
        assert_eq!(theme.foreground.width.get(), 9999);
        assert_eq!(theme.foreground.rounding.get(), 100);
        assert_eq!(theme.foreground.margin.get(), 250);
        assert_eq!(theme.foreground.padding.get(), 250);
        assert_eq!(theme.blur.radius.get(), 128);
        assert_eq!(theme.shadow.offset.get(), 128);
        assert_eq!(theme.shadow.radius.get(), 128);
        assert_eq!(theme.spacings.line_spacing.get(), 1000);
        assert_eq!(theme.spacings.above.get(), 1000);
        assert_eq!(theme.spacings.below.get(), 1000);
        assert_eq!(theme.spacings.tab_width.get(), 1000);
    }

    #[test]
    fn enum_indices_saturate() {
        assert_eq!(BackgroundType::from_index(-3), BackgroundType::None);
        assert_eq!(BackgroundType::from_index(1), BackgroundType::Tiled);
        assert_eq!(BackgroundType::from_index(5), BackgroundType::Zoomed);
        assert_eq!(BackgroundType::from_index(42), BackgroundType::Zoomed);
        assert_eq!(ForegroundPosition::from_index(-1), ForegroundPosition::Left);
        assert_eq!(ForegroundPosition::from_index(2), ForegroundPosition::Right);
        assert_eq!(ForegroundPosition::from_index(9), ForegroundPosition::Stretched);

        for kind in BackgroundType::ALL {
            assert_eq!(BackgroundType::from_index(kind.index()), kind);
        }
        for position in ForegroundPosition::ALL {
            assert_eq!(ForegroundPosition::from_index(position.index()), position);
        }
    }

    #[test]
    fn single_image_modes() {
        assert!(!BackgroundType::None.is_single_image());
        assert!(!BackgroundType::Tiled.is_single_image());
        assert!(BackgroundType::Centered.is_single_image());
        assert!(BackgroundType::Zoomed.is_single_image());
    }

    #[test]
    fn changing_any_field_breaks_equality() {
        let base = ThemeData::new("Paper");
        let variants: Vec<Box<dyn Fn(&mut ThemeData)>> = vec![
            Box::new(|t: &mut ThemeData| t.name.push('!')),
            Box::new(|t: &mut ThemeData| t.background.kind = BackgroundType::Tiled),
            Box::new(|t: &mut ThemeData| t.background.color = Color::from_rgb(1, 2, 3)),
            Box::new(|t: &mut ThemeData| t.background.source_path = "/tmp/a.png".into()),
            Box::new(|t: &mut ThemeData| t.background.stored_image = "abc.png".into()),
            Box::new(|t: &mut ThemeData| t.foreground.color = Color::from_rgb(1, 2, 3)),
            Box::new(|t: &mut ThemeData| t.foreground.opacity.set(50)),
            Box::new(|t: &mut ThemeData| t.foreground.width.set(800)),
            Box::new(|t: &mut ThemeData| t.foreground.rounding.set(10)),
            Box::new(|t: &mut ThemeData| t.foreground.margin.set(10)),
            Box::new(|t: &mut ThemeData| t.foreground.padding.set(10)),
            Box::new(|t: &mut ThemeData| t.foreground.position = ForegroundPosition::Left),
            Box::new(|t: &mut ThemeData| t.blur.enabled = true),
            Box::new(|t: &mut ThemeData| t.blur.radius.set(4)),
            Box::new(|t: &mut ThemeData| t.shadow.enabled = true),
            Box::new(|t: &mut ThemeData| t.shadow.offset.set(9)),
            Box::new(|t: &mut ThemeData| t.shadow.radius.set(9)),
            Box::new(|t: &mut ThemeData| t.shadow.color = Color::from_rgb(9, 9, 9)),
            Box::new(|t: &mut ThemeData| t.text.color = Color::from_rgb(9, 9, 9)),
            Box::new(|t: &mut ThemeData| t.text.font.point_size = 20.0),
            Box::new(|t: &mut ThemeData| t.text.misspelled_color = Color::from_rgb(9, 9, 9)),
            Box::new(|t: &mut ThemeData| t.spacings.indent_first_line = true),
            Box::new(|t: &mut ThemeData| t.spacings.line_spacing.set(150)),
            Box::new(|t: &mut ThemeData| t.spacings.above.set(5)),
            Box::new(|t: &mut ThemeData| t.spacings.below.set(5)),
            Box::new(|t: &mut ThemeData| t.spacings.tab_width.set(20)),
        ];

        for (i, change) in variants.iter().enumerate() {
            let mut other = base.clone();
            change(&mut other);
            assert_ne!(base, other, "variant {i} should differ");
        }
        assert_eq!(base, base.clone());
    }
}
