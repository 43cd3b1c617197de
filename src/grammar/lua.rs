//! The Lua-specific data baked into the pattern table: word lists and regex fragments.

use crate::grammar::TokenClass;

/// Reserved words, plus `arg` and `self` which read as keywords in practice
pub const KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "global", "goto",
    "if", "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
    "arg", "self",
];

/// Standard library functions and globals
pub const LIBRARY_NAMES: &[&str] = &[
    // misc globals
    "assert", "call", "collectgarbage", "copytagmethods", "dofile", "dostring", "error",
    "foreach", "foreachi", "getglobal", "getn", "gettagmethod", "globals", "newtag", "next",
    "print", "rawget", "rawset", "setglobal", "settagmethod", "sort", "tag", "tonumber",
    "tostring", "tinsert", "tremove", "type",
    // string
    "strbyte", "strchar", "strfind", "strlen", "strrep", "strsub", "strupper", "format", "gsub",
    // math
    "abs", "acos", "asin", "atan", "atan2", "ceil", "cos", "deg", "exp", "floor", "log", "log10",
    "max", "min", "mod", "rad", "sin", "sqrt", "tan", "frexp", "ldexp", "random", "randomseed",
    // io
    "openfile", "closefile", "readfrom", "writeto", "appendto", "remove", "rename", "flush",
    "seek", "tmpname", "read", "write",
    // os
    "clock", "date", "execute", "exit", "getenv", "setlocale",
];

// `[=*[` ... `]=*]` with the same number of `=`, or until the end of the text
const LONG_BRACKET: &str = r"\[(=*)\[[\s\S]*?(?:\]\1\]|\z)";

/// Builds the regex source for a token class.
///
/// None of the fragments can fail on unterminated input: literals that are never closed run
/// to the end of the text.
pub(crate) fn fragment(class: TokenClass) -> String {
    match class {
        TokenClass::MultiLineComment => format!("--{LONG_BRACKET}"),
        TokenClass::LineComment => r"--(?!\[=*\[).*\n?".to_owned(),
        TokenClass::MultiLineString => LONG_BRACKET.to_owned(),
        TokenClass::DoubleQuoteString => quoted('"'),
        TokenClass::SingleQuoteString => quoted('\''),
        TokenClass::Keyword => whole_words(KEYWORDS),
        TokenClass::LibraryName => whole_words(LIBRARY_NAMES),
        TokenClass::Number => concat!(
            r"(?<![0-9.])",
            r"(?:\b0[xX][0-9a-fA-F]+",
            r"|\b[0-9]+(?:\.[0-9]+)?(?:[eE]-?[0-9]+)?",
            r"|\.[0-9]+(?:[eE]-?[0-9]+)?)"
        )
        .to_owned(),
    }
}

/// A backslash escapes whatever follows it, including the quote and a newline.
/// A trailing lone backslash is accepted so an unterminated literal still reaches `\z`.
fn quoted(quote: char) -> String {
    format!(r#"{quote}(?:\\[\s\S]?|[^{quote}\\])*(?:{quote}|\z)"#)
}

fn whole_words(words: &[&str]) -> String {
    format!(r"\b(?:{})\b", words.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_lists_have_no_duplicates() {
        for list in [KEYWORDS, LIBRARY_NAMES] {
            let mut sorted = list.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), list.len());
        }
    }

    #[test]
    fn words_are_plain_identifiers() {
        for word in KEYWORDS.iter().chain(LIBRARY_NAMES) {
            assert!(
                word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "{word} would need escaping"
            );
        }
    }

    #[test]
    fn whole_words_wraps_in_boundaries() {
        assert_eq!(whole_words(&["do", "end"]), r"\b(?:do|end)\b");
    }

    #[test]
    fn quoted_fragment_uses_the_quote_everywhere() {
        assert_eq!(quoted('\''), r#"'(?:\\[\s\S]?|[^'\\])*(?:'|\z)"#);
    }
}
