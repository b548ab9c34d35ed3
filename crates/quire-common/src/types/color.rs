#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgba(0, 0, 0, 255);
    pub const TRANSPARENT: Color = Color::from_rgba(0, 0, 0, 0);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`; the `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel =
            |from: usize, len: usize| u8::from_str_radix(hex.get(from..from + len)?, 16).ok();
        match hex.len() {
            3 => {
                let short = |i: usize| channel(i, 1).map(|v| v * 17);
                Some(Self::from_rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Some(Self::from_rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            8 => Some(Self::from_rgba(
                channel(0, 2)?,
                channel(2, 2)?,
                channel(4, 2)?,
                channel(6, 2)?,
            )),
            _ => None,
        }
    }

    /// `#rrggbb`, dropping alpha. This is the form theme files store.
    pub fn name(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Channels multiplied by alpha, as stored in a premultiplied canvas.
    pub fn premultiplied(&self) -> [u8; 4] {
        let a = self.a as u32;
        let mul = |c: u8| ((c as u32 * a + 127) / 255) as u8;
        [mul(self.r), mul(self.g), mul(self.b), self.a]
    }
}
