use crate::highlight::Highlighter;

/// Remembers the last text highlighted and its output.
///
/// Meant for editors that ask for the highlighted text on every redraw: it is only recomputed
/// when the text actually changed.
#[derive(Debug)]
pub struct HighlightCache {
    highlighter: Highlighter,
    last_input: Option<String>,
    last_output: String,
}

impl HighlightCache {
    pub fn new(highlighter: Highlighter) -> Self {
        Self {
            highlighter,
            last_input: None,
            last_output: String::new(),
        }
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Whether `get(text)` would be served from the cache
    pub fn contains(&self, text: &str) -> bool {
        self.last_input.as_deref() == Some(text)
    }

    /// Returns the highlighted text, recomputing it only if `text` differs from the last call.
    ///
    /// If highlighting fails the plain text is cached and returned instead.
    pub fn get(&mut self, text: &str) -> &str {
        if !self.contains(text) {
            self.last_output = match self.highlighter.try_highlight(text) {
                Ok(out) => out,
                Err(e) => {
                    log::warn!("Highlighting failed, showing plain text: {e}");
                    text.to_owned()
                }
            };
            self.last_input = Some(text.to_owned());
        }
        &self.last_output
    }

    /// Forgets the cached text, the next `get` will recompute.
    pub fn clear(&mut self) {
        self.last_input = None;
        self.last_output.clear();
    }
}
