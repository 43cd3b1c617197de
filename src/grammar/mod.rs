mod lua;
mod pattern_set;
mod regex;

use std::fmt;

use serde::Deserialize;

use crate::error::{Error, LunariaResult};
use crate::palette::{Color, Palette};

pub use lua::{KEYWORDS, LIBRARY_NAMES};
pub use pattern_set::PatternSet;
pub use regex::Regex;

/// The syntactic categories we color.
///
/// Variants are declared in table order: the discriminant is the index of the class entry in
/// the [`PatternTable`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Debug)]
pub enum TokenClass {
    MultiLineComment,
    LineComment,
    MultiLineString,
    DoubleQuoteString,
    SingleQuoteString,
    Keyword,
    LibraryName,
    Number,
}

impl TokenClass {
    /// Every class, in priority order
    pub const ALL: [TokenClass; 8] = [
        TokenClass::MultiLineComment,
        TokenClass::LineComment,
        TokenClass::MultiLineString,
        TokenClass::DoubleQuoteString,
        TokenClass::SingleQuoteString,
        TokenClass::Keyword,
        TokenClass::LibraryName,
        TokenClass::Number,
    ];

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn tier(self) -> Tier {
        match self {
            TokenClass::MultiLineComment
            | TokenClass::LineComment
            | TokenClass::MultiLineString
            | TokenClass::DoubleQuoteString
            | TokenClass::SingleQuoteString => Tier::Block,
            TokenClass::Keyword | TokenClass::LibraryName | TokenClass::Number => Tier::Word,
        }
    }

    /// The name used in palette files
    pub fn name(self) -> &'static str {
        match self {
            TokenClass::MultiLineComment => "MultiLineComment",
            TokenClass::LineComment => "LineComment",
            TokenClass::MultiLineString => "MultiLineString",
            TokenClass::DoubleQuoteString => "DoubleQuoteString",
            TokenClass::SingleQuoteString => "SingleQuoteString",
            TokenClass::Keyword => "Keyword",
            TokenClass::LibraryName => "LibraryName",
            TokenClass::Number => "Number",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Block classes can span several lines and are always tried before word classes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tier {
    Block,
    Word,
}

#[derive(Debug)]
pub struct PatternEntry {
    pub class: TokenClass,
    pub regex: Regex,
    pub color: Color,
}

/// The ordered list of patterns used by the scanner.
///
/// Entries are stored by [`TokenClass`] index so a match is resolved to its entry without
/// any lookup. Each tier is also compiled into a [`PatternSet`] that finds the leftmost match
/// of the tier in a single pass.
#[derive(Debug)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
    block_set: PatternSet,
    word_set: PatternSet,
}

impl PatternTable {
    /// Compiles every Lua pattern, coloring each class from the palette.
    ///
    /// Errors on the first fragment that does not compile.
    pub fn lua(palette: &Palette) -> LunariaResult<Self> {
        let mut entries = Vec::with_capacity(TokenClass::ALL.len());
        for class in TokenClass::ALL {
            let regex =
                Regex::new(lua::fragment(class)).map_err(|e| Error::InvalidPattern {
                    class,
                    message: e.to_string(),
                })?;
            entries.push(PatternEntry {
                class,
                regex,
                color: palette.color(class),
            });
        }

        let block_set = Self::compile_tier(&entries, Tier::Block)?;
        let word_set = Self::compile_tier(&entries, Tier::Word)?;

        Ok(Self {
            entries,
            block_set,
            word_set,
        })
    }

    fn compile_tier(entries: &[PatternEntry], tier: Tier) -> LunariaResult<PatternSet> {
        let items = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.class.tier() == tier)
            .map(|(idx, e)| (idx, e.regex.pattern()))
            .collect();
        PatternSet::new(items).map_err(|e| Error::InvalidPatternSet {
            tier,
            message: e.to_string(),
        })
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    #[inline]
    pub fn entry(&self, class: TokenClass) -> &PatternEntry {
        &self.entries[class.index()]
    }

    #[inline]
    pub(crate) fn pattern_set(&self, tier: Tier) -> &PatternSet {
        match tier {
            Tier::Block => &self.block_set,
            Tier::Word => &self.word_set,
        }
    }
}
