use std::path::Path;

use quire_common::Color;
use quire_config::{SettingsStore, TomlSettings};
use tracing::{debug, warn};

use super::{keys, ThemeLibrary};
use crate::data::{BackgroundType, ForegroundPosition, ThemeData};
use crate::font::FontSpec;

impl ThemeLibrary {
    /// Read theme `name` from its definition file.
    ///
    /// An empty name yields default values without touching the disk. A
    /// missing or unreadable file also yields defaults. A legacy file that
    /// names a source picture but no stored copy gets the picture imported,
    /// and the stored name is written back at once.
    pub fn load(&self, name: &str) -> ThemeData {
        let mut theme = ThemeData::new(name);
        if name.is_empty() {
            return theme;
        }

        let mut settings = TomlSettings::open_lenient(self.file_path(name));
        read_into(&settings, &mut theme);

        if !theme.background.source_path.is_empty() && theme.background.stored_image.is_empty() {
            theme.background.stored_image = self
                .images()
                .import_image(Path::new(&theme.background.source_path));
            settings.write_string(keys::BACKGROUND_IMAGE_FILE, &theme.background.stored_image);
            if let Err(e) = settings.sync() {
                warn!(theme = %name, "failed to record imported background: {e}");
            }
        }

        debug!(theme = %name, "theme loaded");
        theme
    }
}

/// Theme colors are opaque; translucency comes from the opacity fields.
fn read_color(settings: &impl SettingsStore, key: &str, default: &str) -> Color {
    let value = settings.read_string(key, default);
    Color::from_hex(&value)
        .or_else(|| Color::from_hex(default))
        .unwrap_or(Color::BLACK)
        .with_alpha(255)
}

fn read_into(settings: &impl SettingsStore, theme: &mut ThemeData) {
    let bg = &mut theme.background;
    bg.kind = BackgroundType::from_index(settings.read_int(keys::BACKGROUND_TYPE, 0));
    bg.color = read_color(settings, keys::BACKGROUND_COLOR, "#cccccc");
    bg.source_path = settings.read_string(keys::BACKGROUND_IMAGE, "");
    bg.stored_image = settings.read_string(keys::BACKGROUND_IMAGE_FILE, "");

    let fg = &mut theme.foreground;
    fg.color = read_color(settings, keys::FOREGROUND_COLOR, "#cccccc");
    fg.opacity.set(settings.read_int(keys::FOREGROUND_OPACITY, 100));
    fg.width.set(settings.read_int(keys::FOREGROUND_WIDTH, 700));
    fg.rounding.set(settings.read_int(keys::FOREGROUND_ROUNDING, 0));
    fg.margin.set(settings.read_int(keys::FOREGROUND_MARGIN, 65));
    fg.padding.set(settings.read_int(keys::FOREGROUND_PADDING, 0));
    fg.position = ForegroundPosition::from_index(settings.read_int(keys::FOREGROUND_POSITION, 1));

    theme.blur.enabled = settings.read_bool(keys::BLUR_ENABLED, false);
    theme.blur.radius.set(settings.read_int(keys::BLUR_RADIUS, 32));

    let shadow = &mut theme.shadow;
    shadow.enabled = settings.read_bool(keys::SHADOW_ENABLED, false);
    shadow.color = read_color(settings, keys::SHADOW_COLOR, "#000000");
    shadow.radius.set(settings.read_int(keys::SHADOW_RADIUS, 8));
    shadow.offset.set(settings.read_int(keys::SHADOW_OFFSET, 2));

    let text = &mut theme.text;
    text.color = read_color(settings, keys::TEXT_COLOR, "#000000");
    text.font = settings
        .read_string(keys::TEXT_FONT, crate::font::DEFAULT_FAMILY)
        .parse()
        .unwrap_or_else(|_| FontSpec::default());
    text.misspelled_color = read_color(settings, keys::TEXT_MISSPELLED, "#ff0000");

    let spacings = &mut theme.spacings;
    spacings.indent_first_line = settings.read_bool(keys::INDENT_FIRST_LINE, false);
    spacings.line_spacing.set(settings.read_int(keys::LINE_SPACING, 100));
    spacings.above.set(settings.read_int(keys::PARAGRAPH_ABOVE, 0));
    spacings.below.set(settings.read_int(keys::PARAGRAPH_BELOW, 0));
    spacings.tab_width.set(settings.read_int(keys::TAB_WIDTH, 48));
}
