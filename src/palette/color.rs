use crate::error::{Error, LunariaResult};

/// RGBA color with 8-bit components
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

fn parse_hex_component(hex: &str, original: &str) -> LunariaResult<u8> {
    u8::from_str_radix(hex, 16).map_err(|_| Error::InvalidHexColor {
        value: original.to_string(),
        reason: format!("invalid hex component '{}'", hex),
    })
}

impl Color {
    pub(crate) const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
    pub(crate) const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Outputs the lowercase hex value for that colour, as rich-text markup expects it.
    #[inline]
    pub fn as_hex(&self) -> String {
        if self.a < 255 {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }

    #[inline]
    pub(crate) fn as_css_color_property(&self) -> String {
        format!("color: {};", self.as_hex())
    }

    /// Pushes the SGR parameters for a truecolor foreground, without the `\x1b[` and `m`.
    pub(crate) fn as_ansi_fg(&self, out: &mut String) {
        out.push_str(&format!("38;2;{};{};{}", self.r, self.g, self.b));
    }

    /// Creates a Color from a string (in theory a hex but it can also be black/white).
    ///
    /// Errors if the string is not a valid hex colour.
    pub fn from_hex(hex: &str) -> LunariaResult<Self> {
        let original = hex;
        let hex = hex.trim_start_matches('#');

        if hex == "white" {
            return Ok(Color::WHITE);
        } else if hex == "black" {
            return Ok(Color::BLACK);
        }
        match hex.len() {
            // #RGB
            3 => {
                let r = parse_hex_component(&hex[0..1], original)?;
                let g = parse_hex_component(&hex[1..2], original)?;
                let b = parse_hex_component(&hex[2..3], original)?;
                Ok(Color::rgb(r * 17, g * 17, b * 17))
            }
            // #RRGGBB
            6 => {
                let r = parse_hex_component(&hex[0..2], original)?;
                let g = parse_hex_component(&hex[2..4], original)?;
                let b = parse_hex_component(&hex[4..6], original)?;
                Ok(Color::rgb(r, g, b))
            }
            // #RRGGBBAA
            8 => {
                let r = parse_hex_component(&hex[0..2], original)?;
                let g = parse_hex_component(&hex[2..4], original)?;
                let b = parse_hex_component(&hex[4..6], original)?;
                let a = parse_hex_component(&hex[6..8], original)?;
                Ok(Color { r, g, b, a })
            }
            _ => Err(Error::InvalidHexColor {
                value: original.to_string(),
                reason: format!("invalid length {}", hex.len()),
            }),
        }
    }
}
