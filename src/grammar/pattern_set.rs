use std::fmt::{Debug, Formatter};

use onig::{RegSet, RegSetLead, RegexOptions, SearchOptions};

/// Where a pattern set matched first
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PatternSetMatch {
    /// Index of the matching entry in the pattern table
    pub entry: usize,
    pub start: usize,
}

/// An eagerly compiled set of patterns searched together with an onig `RegSet`.
///
/// The search is position-led: at each position every pattern is tried in insertion order and
/// the first one that matches wins, so a pattern never starts inside the match of another one
/// found earlier in the text.
pub struct PatternSet {
    entries: Vec<usize>,
    regset: Option<RegSet>,
}

impl PatternSet {
    pub fn new(items: Vec<(usize, &str)>) -> Result<Self, onig::Error> {
        if items.is_empty() {
            return Ok(Self {
                entries: Vec::new(),
                regset: None,
            });
        }

        let (entries, patterns): (Vec<_>, Vec<_>) = items.into_iter().unzip();
        let regset = RegSet::with_options(&patterns, RegexOptions::REGEX_OPTION_NONE)?;

        Ok(Self {
            entries,
            regset: Some(regset),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Leftmost match starting at or after `pos`
    pub(crate) fn find_at(&self, text: &str, pos: usize) -> Option<PatternSetMatch> {
        let regset = self.regset.as_ref()?;

        // We need to specify pos/text.len() because some regex do lookbehind
        let (pattern_index, captures) = regset.captures_with_options(
            text,
            pos,
            text.len(),
            RegSetLead::Position,
            SearchOptions::SEARCH_OPTION_NONE,
        )?;
        let (start, _) = captures.pos(0)?;

        Some(PatternSetMatch {
            entry: self.entries[pattern_index],
            start,
        })
    }
}

impl Debug for PatternSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "PatternSet({} patterns)", self.len())
    }
}
