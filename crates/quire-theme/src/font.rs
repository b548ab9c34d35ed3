//! Text font descriptor.

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_FAMILY: &str = "Times New Roman";
pub const DEFAULT_POINT_SIZE: f64 = 12.0;
pub const WEIGHT_NORMAL: i32 = 50;
pub const WEIGHT_BOLD: i32 = 75;

/// Family, size, and style of the theme's body text.
///
/// Stored as `family,point_size,-1,5,weight,italic,0,0,0,0`, the field
/// layout desktop toolkits use for font strings. Only the family is
/// required when parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub point_size: f64,
    pub weight: i32,
    pub italic: bool,
}

impl FontSpec {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            ..Default::default()
        }
    }

    pub fn is_bold(&self) -> bool {
        self.weight >= WEIGHT_BOLD
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: DEFAULT_FAMILY.into(),
            point_size: DEFAULT_POINT_SIZE,
            weight: WEIGHT_NORMAL,
            italic: false,
        }
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},-1,5,{},{},0,0,0,0",
            self.family,
            self.point_size,
            self.weight,
            u8::from(self.italic)
        )
    }
}

impl FromStr for FontSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(',').map(str::trim);
        let family = fields.next().unwrap_or_default();
        if family.is_empty() {
            return Err(format!("font string has no family: '{s}'"));
        }

        let rest: Vec<&str> = fields.collect();
        let mut font = FontSpec::new(family);
        if let Some(size) = rest.first().and_then(|v| v.parse::<f64>().ok()) {
            if size > 0.0 {
                font.point_size = size;
            }
        }
        if let Some(weight) = rest.get(3).and_then(|v| v.parse::<i32>().ok()) {
            font.weight = weight.clamp(0, 99);
        }
        if let Some(italic) = rest.get(4).and_then(|v| v.parse::<i32>().ok()) {
            font.italic = italic != 0;
        }
        Ok(font)
    }
}
