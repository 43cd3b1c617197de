use crate::error::{Error, LunariaResult};
use crate::grammar::{PatternTable, TokenClass};
use crate::options::HighlightOptions;
use crate::palette::{Color, Palette};
use crate::renderers::rich_text::RichTextRenderer;
use crate::scanner::{ScanLimits, Scanner, Span};

/// A piece of the original text, colored or not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// `None` for text between tokens
    pub class: Option<TokenClass>,
    pub color: Option<Color>,
}

/// Highlighted code: the input text and the spans found in it
#[derive(Debug, Clone)]
pub struct HighlightedCode<'a> {
    /// The text that was highlighted
    pub text: &'a str,
    /// Sorted, non-overlapping spans
    pub spans: Vec<Span>,
    table: &'a PatternTable,
}

impl<'a> HighlightedCode<'a> {
    /// Splits the whole text into segments, in order. Concatenating the segment texts gives
    /// back the input.
    pub fn segments(&self) -> Vec<Segment<'a>> {
        let text = self.text;
        let mut out = Vec::with_capacity(self.spans.len() * 2 + 1);
        let mut last_end = 0;

        for span in &self.spans {
            if span.range.start > last_end {
                out.push(Segment {
                    text: &text[last_end..span.range.start],
                    class: None,
                    color: None,
                });
            }
            out.push(Segment {
                text: &text[span.range.clone()],
                class: Some(span.class),
                color: Some(self.table.entry(span.class).color),
            });
            last_end = span.range.end;
        }

        if last_end < text.len() {
            out.push(Segment {
                text: &text[last_end..],
                class: None,
                color: None,
            });
        }

        out
    }
}

/// The main struct in lunaria.
///
/// Compiles the Lua pattern table once and can then highlight any number of texts. It holds no
/// state between calls: the same text always gives the same output.
#[derive(Debug)]
pub struct Highlighter {
    table: PatternTable,
    palette: Palette,
    limits: ScanLimits,
}

impl Highlighter {
    /// Builds a highlighter with the default palette and limits.
    pub fn new() -> LunariaResult<Self> {
        Self::with_options(HighlightOptions::default())
    }

    /// Builds a highlighter, compiling every pattern.
    ///
    /// Errors if a pattern does not compile, in which case there is no highlighter to use.
    pub fn with_options(options: HighlightOptions) -> LunariaResult<Self> {
        let table = PatternTable::lua(&options.palette)?;
        Ok(Self {
            table,
            palette: options.palette,
            limits: options.limits,
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn limits(&self) -> ScanLimits {
        self.limits
    }

    /// Finds all the token spans of the text.
    pub fn tokenize(&self, text: &str) -> LunariaResult<Vec<Span>> {
        Scanner::new(&self.table, self.limits)
            .scan(text)
            .map_err(Error::ScanAborted)
    }

    /// Tokenizes the text, keeping what the renderers need alongside the spans.
    pub fn highlight_code<'a>(&'a self, text: &'a str) -> LunariaResult<HighlightedCode<'a>> {
        let spans = self.tokenize(text)?;
        Ok(HighlightedCode {
            text,
            spans,
            table: &self.table,
        })
    }

    /// Wraps every token in `<color=#rrggbb>...</color>`, erroring if the scan was aborted.
    pub fn try_highlight(&self, text: &str) -> LunariaResult<String> {
        let code = self.highlight_code(text)?;
        Ok(RichTextRenderer.render(&code))
    }

    /// Wraps every token in `<color=#rrggbb>...</color>`.
    ///
    /// This never fails: if the scan is aborted the text is returned as is.
    pub fn highlight(&self, text: &str) -> String {
        match self.try_highlight(text) {
            Ok(out) => out,
            Err(e) => {
                log::warn!("Highlighting {} bytes failed, using plain text: {e}", text.len());
                text.to_owned()
            }
        }
    }
}
