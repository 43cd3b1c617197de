mod color;

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use crate::error::LunariaResult;
use crate::grammar::TokenClass;

pub use color::Color;

const COMMENT: Color = Color::rgb(0x5c, 0x63, 0x70);
const STRING: Color = Color::rgb(0x98, 0xc3, 0x79);
const KEYWORD: Color = Color::rgb(0xc6, 0x78, 0xdd);
const LIBRARY_NAME: Color = Color::rgb(0x56, 0xb6, 0xc2);
const NUMBER: Color = Color::rgb(0xd1, 0x9a, 0x66);

/// The color of every token class.
///
/// The default is the One Dark look. A palette file is a JSON object from class name to hex
/// color; classes it does not mention keep their default:
///
/// ```json
/// { "Keyword": "#ff79c6", "Number": "#bd93f9" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: [Color; TokenClass::ALL.len()],
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors = [COMMENT; TokenClass::ALL.len()];
        for class in TokenClass::ALL {
            colors[class.index()] = match class {
                TokenClass::MultiLineComment | TokenClass::LineComment => COMMENT,
                TokenClass::MultiLineString
                | TokenClass::DoubleQuoteString
                | TokenClass::SingleQuoteString => STRING,
                TokenClass::Keyword => KEYWORD,
                TokenClass::LibraryName => LIBRARY_NAME,
                TokenClass::Number => NUMBER,
            };
        }
        Self { colors }
    }
}

impl Palette {
    #[inline]
    pub fn color(&self, class: TokenClass) -> Color {
        self.colors[class.index()]
    }

    pub fn set(&mut self, class: TokenClass, color: Color) {
        self.colors[class.index()] = color;
    }

    /// Parses a palette from its JSON form, on top of the default colors.
    pub fn from_json(json: &str) -> LunariaResult<Self> {
        let raw: HashMap<TokenClass, String> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Reads the file and parses it as a JSON palette.
    pub fn load_from_file(path: impl AsRef<Path>) -> LunariaResult<Self> {
        let file = File::open(path)?;
        let raw: HashMap<TokenClass, String> = serde_json::from_reader(file)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: HashMap<TokenClass, String>) -> LunariaResult<Self> {
        let mut palette = Self::default();
        for (class, hex) in raw {
            palette.set(class, Color::from_hex(&hex)?);
        }
        Ok(palette)
    }
}
