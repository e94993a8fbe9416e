use crate::foundation::math::fmt_num;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Parses `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB` (alpha first, Android order).
pub fn parse_hex_color(s: &str) -> Option<Rgba> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (a, r, g, b) = match hex.len() {
        3 => (255, nibble(0)?, nibble(1)?, nibble(2)?),
        4 => (nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?),
        6 => (255, byte(0)?, byte(2)?, byte(4)?),
        8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
        _ => return None,
    };
    Some(Rgba { r, g, b, a })
}

impl Rgba {
    /// `#rrggbb` when opaque, `rgba(r,g,b,a)` otherwise.
    pub fn to_css(self) -> String {
        if self.a == 255 {
            return format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
        }
        let alpha = (f64::from(self.a) / 255.0 * 1000.0).round() / 1000.0;
        format!("rgba({},{},{},{})", self.r, self.g, self.b, fmt_num(alpha))
    }
}

/// Converts an Android hex color to its CSS form. Unparseable input is returned unchanged.
pub fn android_to_css_color(color: &str) -> String {
    match parse_hex_color(color) {
        Some(rgba) => rgba.to_css(),
        None => {
            tracing::debug!(color, "passing through unrecognized color");
            color.to_owned()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/color.rs"]
mod tests;
