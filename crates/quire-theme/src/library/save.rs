use quire_common::ThemeError;
use quire_config::{SettingsStore, TomlSettings};
use tracing::debug;

use super::{keys, ThemeLibrary};
use crate::data::ThemeData;

impl ThemeLibrary {
    /// Write every field of `theme` to its definition file.
    ///
    /// Does nothing for an unnamed theme. `Background/Image` is only present
    /// while the theme has a source picture; `Background/ImageFile` is always
    /// written, empty or not.
    pub fn save(&self, theme: &ThemeData) -> Result<(), ThemeError> {
        if theme.name.is_empty() {
            return Ok(());
        }

        let mut settings = TomlSettings::open_lenient(self.file_path(&theme.name));
        write_from(&mut settings, theme);
        settings.sync()?;

        debug!(theme = %theme.name, "theme saved");
        Ok(())
    }
}

fn write_from(settings: &mut impl SettingsStore, theme: &ThemeData) {
    let bg = &theme.background;
    settings.write_int(keys::BACKGROUND_TYPE, bg.kind.index());
    settings.write_string(keys::BACKGROUND_COLOR, &bg.color.name());
    if bg.source_path.is_empty() {
        settings.remove(keys::BACKGROUND_IMAGE);
    } else {
        settings.write_string(keys::BACKGROUND_IMAGE, &bg.source_path);
    }
    settings.write_string(keys::BACKGROUND_IMAGE_FILE, &bg.stored_image);

    let fg = &theme.foreground;
    settings.write_string(keys::FOREGROUND_COLOR, &fg.color.name());
    settings.write_int(keys::FOREGROUND_OPACITY, fg.opacity.get());
    settings.write_int(keys::FOREGROUND_WIDTH, fg.width.get());
    settings.write_int(keys::FOREGROUND_ROUNDING, fg.rounding.get());
    settings.write_int(keys::FOREGROUND_MARGIN, fg.margin.get());
    settings.write_int(keys::FOREGROUND_PADDING, fg.padding.get());
    settings.write_int(keys::FOREGROUND_POSITION, fg.position.index());

    settings.write_bool(keys::BLUR_ENABLED, theme.blur.enabled);
    settings.write_int(keys::BLUR_RADIUS, theme.blur.radius.get());

    let shadow = &theme.shadow;
    settings.write_bool(keys::SHADOW_ENABLED, shadow.enabled);
    settings.write_string(keys::SHADOW_COLOR, &shadow.color.name());
    settings.write_int(keys::SHADOW_RADIUS, shadow.radius.get());
    settings.write_int(keys::SHADOW_OFFSET, shadow.offset.get());

    settings.write_string(keys::TEXT_COLOR, &theme.text.color.name());
    settings.write_string(keys::TEXT_FONT, &theme.text.font.to_string());
    settings.write_string(keys::TEXT_MISSPELLED, &theme.text.misspelled_color.name());

    let spacings = &theme.spacings;
    settings.write_bool(keys::INDENT_FIRST_LINE, spacings.indent_first_line);
    settings.write_int(keys::LINE_SPACING, spacings.line_spacing.get());
    settings.write_int(keys::PARAGRAPH_ABOVE, spacings.above.get());
    settings.write_int(keys::PARAGRAPH_BELOW, spacings.below.get());
    settings.write_int(keys::TAB_WIDTH, spacings.tab_width.get());
}
