use std::fmt;
use std::ops::Range;

use onig::{MatchParam, Region, SearchOptions};

/// An eagerly compiled regex that remembers the pattern it was built from
pub struct Regex {
    pattern: String,
    compiled: onig::Regex,
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

impl Regex {
    pub fn new(pattern: String) -> Result<Self, onig::Error> {
        let compiled = onig::Regex::new(&pattern)?;
        Ok(Self { pattern, compiled })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Matches the regex anchored at `at`.
    ///
    /// The whole text is handed to onig so lookbehinds and `\b` see the bytes before `at`.
    /// `retry_limit` caps the backtracking done by the attempt; going over it is reported as
    /// an error rather than a miss.
    pub fn match_at(
        &self,
        text: &str,
        at: usize,
        retry_limit: u32,
    ) -> Result<Option<Range<usize>>, onig::Error> {
        let mut region = Region::new();
        let mut param = MatchParam::default();
        param.set_retry_limit_in_match(retry_limit);

        let found = self.compiled.match_with_param(
            text,
            at,
            SearchOptions::SEARCH_OPTION_NONE,
            Some(&mut region),
            param,
        )?;

        Ok(found.and_then(|_| region.pos(0)).map(|(start, end)| start..end))
    }
}
