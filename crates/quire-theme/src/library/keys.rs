//! Settings keys of a theme definition file.

pub const BACKGROUND_TYPE: &str = "Background/Type";
pub const BACKGROUND_COLOR: &str = "Background/Color";
pub const BACKGROUND_IMAGE: &str = "Background/Image";
pub const BACKGROUND_IMAGE_FILE: &str = "Background/ImageFile";

pub const FOREGROUND_COLOR: &str = "Foreground/Color";
pub const FOREGROUND_OPACITY: &str = "Foreground/Opacity";
pub const FOREGROUND_WIDTH: &str = "Foreground/Width";
pub const FOREGROUND_ROUNDING: &str = "Foreground/Rounding";
pub const FOREGROUND_MARGIN: &str = "Foreground/Margin";
pub const FOREGROUND_PADDING: &str = "Foreground/Padding";
pub const FOREGROUND_POSITION: &str = "Foreground/Position";

pub const BLUR_ENABLED: &str = "ForegroundBlur/Enabled";
pub const BLUR_RADIUS: &str = "ForegroundBlur/Radius";

pub const SHADOW_ENABLED: &str = "ForegroundShadow/Enabled";
pub const SHADOW_COLOR: &str = "ForegroundShadow/Color";
pub const SHADOW_RADIUS: &str = "ForegroundShadow/Radius";
pub const SHADOW_OFFSET: &str = "ForegroundShadow/Offset";

pub const TEXT_COLOR: &str = "Text/Color";
pub const TEXT_FONT: &str = "Text/Font";
pub const TEXT_MISSPELLED: &str = "Text/Misspelled";

pub const INDENT_FIRST_LINE: &str = "Spacings/IndentFirstLine";
pub const LINE_SPACING: &str = "Spacings/LineSpacing";
pub const PARAGRAPH_ABOVE: &str = "Spacings/ParagraphAbove";
pub const PARAGRAPH_BELOW: &str = "Spacings/ParagraphBelow";
pub const TAB_WIDTH: &str = "Spacings/TabWidth";
