//! A single forward scan of the text, trying the block tier before the word tier at every
//! cursor position.

use std::ops::Range;
use std::time::{Duration, Instant};

use crate::grammar::{PatternTable, Tier, TokenClass};

/// A colored region of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte range within the input (start inclusive, end exclusive)
    pub range: Range<usize>,
    pub class: TokenClass,
}

/// Bounds on the work a single scan is allowed to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLimits {
    /// Wall-clock budget for a whole scan, checked before every match
    pub time_budget: Duration,
    /// Backtracking budget for a single regex match attempt
    pub retry_limit: u32,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_millis(200),
            retry_limit: 10_000_000,
        }
    }
}

/// What we know about the next match of a tier.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Lookahead {
    Unknown,
    /// Entry index and range
    Found(usize, Range<usize>),
    /// The tier does not match anywhere after the position it was last searched from
    Exhausted,
}

/// Per-scan state. The [`PatternTable`] itself is never mutated so it can be shared by
/// every scan.
#[derive(Debug)]
pub(crate) struct Scanner<'t> {
    table: &'t PatternTable,
    limits: ScanLimits,
    /// A tier is only searched again once the cursor moved past the start of its previous
    /// match. Word matches never contain a block opener and block matches are taken as soon
    /// as they are the leftmost, so each tier walks the text forward once.
    block: Lookahead,
    word: Lookahead,
}

impl<'t> Scanner<'t> {
    pub fn new(table: &'t PatternTable, limits: ScanLimits) -> Self {
        Self {
            table,
            limits,
            block: Lookahead::Unknown,
            word: Lookahead::Unknown,
        }
    }

    fn lookahead_mut(&mut self, tier: Tier) -> &mut Lookahead {
        match tier {
            Tier::Block => &mut self.block,
            Tier::Word => &mut self.word,
        }
    }

    /// Leftmost match of a tier at or after `pos`, skipping empty matches. Entries matching at
    /// the same position are resolved by table order.
    fn match_tier(
        &mut self,
        tier: Tier,
        text: &str,
        pos: usize,
    ) -> Result<Option<(usize, Range<usize>)>, String> {
        match self.lookahead_mut(tier) {
            Lookahead::Found(idx, range) if range.start >= pos => {
                return Ok(Some((*idx, range.clone())));
            }
            Lookahead::Exhausted => return Ok(None),
            _ => {}
        }

        let table = self.table;
        let pattern_set = table.pattern_set(tier);
        let mut from = pos;
        let found = loop {
            let Some(candidate) = pattern_set.find_at(text, from) else {
                break None;
            };
            // The set only tells us where and which entry: the entry itself is run once
            // there so the match attempt is bounded by the retry limit
            let entry = &table.entries()[candidate.entry];
            let matched = entry
                .regex
                .match_at(text, candidate.start, self.limits.retry_limit)
                .map_err(|e| format!("{} pattern at byte {}: {e}", entry.class, candidate.start))?;
            match matched {
                Some(range) if !range.is_empty() => break Some((candidate.entry, range)),
                _ => match text[candidate.start..].chars().next() {
                    Some(c) => from = candidate.start + c.len_utf8(),
                    None => break None,
                },
            }
        };

        *self.lookahead_mut(tier) = match &found {
            Some((idx, range)) => Lookahead::Found(*idx, range.clone()),
            None => Lookahead::Exhausted,
        };
        Ok(found)
    }

    /// Scans the whole text, returning sorted, non-overlapping and non-empty spans.
    pub fn scan(&mut self, text: &str) -> Result<Vec<Span>, String> {
        let started = Instant::now();
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            if started.elapsed() >= self.limits.time_budget {
                return Err(format!(
                    "time budget of {:?} exceeded at byte {pos} of {}",
                    self.limits.time_budget,
                    text.len()
                ));
            }

            let block = self.match_tier(Tier::Block, text, pos)?;
            // A block match at the cursor always wins, no need to look at words
            let word = match &block {
                Some((_, range)) if range.start == pos => None,
                _ => self.match_tier(Tier::Word, text, pos)?,
            };

            let (idx, range) = match (block, word) {
                (None, None) => break,
                (Some(block), None) => block,
                (None, Some(word)) => word,
                (Some(block), Some(word)) => {
                    if block.1.start <= word.1.start {
                        block
                    } else {
                        word
                    }
                }
            };

            let class = self.table.entries()[idx].class;
            #[cfg(feature = "debug")]
            log::trace!("[scan] {class} {:?}: {:?}", range, &text[range.clone()]);
            pos = range.end;
            spans.push(Span { range, class });
        }

        #[cfg(feature = "debug")]
        log::debug!(
            "[scan] {} spans over {} bytes in {:?}",
            spans.len(),
            text.len(),
            started.elapsed()
        );

        Ok(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    fn scan(text: &str) -> Vec<(TokenClass, &str)> {
        let table = PatternTable::lua(&Palette::default()).unwrap();
        let spans = Scanner::new(&table, ScanLimits::default())
            .scan(text)
            .unwrap();
        spans
            .into_iter()
            .map(|s| (s.class, &text[s.range]))
            .collect()
    }

    #[test]
    fn keyword_inside_string_is_absorbed() {
        assert_eq!(
            scan(r#"local x = "for""#),
            vec![
                (TokenClass::Keyword, "local"),
                (TokenClass::DoubleQuoteString, r#""for""#),
            ]
        );
    }

    #[test]
    fn for_loop_header() {
        assert_eq!(
            scan("for i=1,times do"),
            vec![
                (TokenClass::Keyword, "for"),
                (TokenClass::Number, "1"),
                (TokenClass::Keyword, "do"),
            ]
        );
    }

    #[test]
    fn no_keyword_prefix_inside_identifier() {
        assert_eq!(scan("forward = doit"), vec![]);
    }

    #[test]
    fn numbers_are_single_spans() {
        assert_eq!(
            scan("a = {0x1A, 3.14e10, .5, 42}"),
            vec![
                (TokenClass::Number, "0x1A"),
                (TokenClass::Number, "3.14e10"),
                (TokenClass::Number, ".5"),
                (TokenClass::Number, "42"),
            ]
        );
    }

    #[test]
    fn comments_take_precedence() {
        assert_eq!(
            scan("--[[ block ]] x -- line comment\ny"),
            vec![
                (TokenClass::MultiLineComment, "--[[ block ]]"),
                (TokenClass::LineComment, "-- line comment\n"),
            ]
        );
    }

    #[test]
    fn long_string_beats_keywords_inside() {
        assert_eq!(
            scan("s = [[ if then ]] .. [=[ ]] end ]=]"),
            vec![
                (TokenClass::MultiLineString, "[[ if then ]]"),
                (TokenClass::MultiLineString, "[=[ ]] end ]=]"),
            ]
        );
    }

    #[test]
    fn unterminated_literals_run_to_the_end() {
        assert_eq!(
            scan("local s = \"abc\nprint(1)"),
            vec![
                (TokenClass::Keyword, "local"),
                (TokenClass::DoubleQuoteString, "\"abc\nprint(1)"),
            ]
        );
        assert_eq!(
            scan("x = 1 --[==[ open"),
            vec![
                (TokenClass::Number, "1"),
                (TokenClass::MultiLineComment, "--[==[ open"),
            ]
        );
    }

    #[test]
    fn quote_in_comment_does_not_open_a_string() {
        assert_eq!(
            scan("-- don't\nreturn 'x'"),
            vec![
                (TokenClass::LineComment, "-- don't\n"),
                (TokenClass::Keyword, "return"),
                (TokenClass::SingleQuoteString, "'x'"),
            ]
        );
    }

    #[test]
    fn multibyte_text_passes_through() {
        assert_eq!(
            scan("print(\"héllo\") -- ünïcode"),
            vec![
                (TokenClass::LibraryName, "print"),
                (TokenClass::DoubleQuoteString, "\"héllo\""),
                (TokenClass::LineComment, "-- ünïcode"),
            ]
        );
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert_eq!(scan(""), vec![]);
    }

    #[test]
    fn spans_are_sorted_and_disjoint() {
        let text = include_str!("fixtures/sample.lua");
        let table = PatternTable::lua(&Palette::default()).unwrap();
        let spans = Scanner::new(&table, ScanLimits::default())
            .scan(text)
            .unwrap();
        assert!(!spans.is_empty());
        for pair in spans.windows(2) {
            assert!(pair[0].range.end <= pair[1].range.start);
        }
        assert!(spans.iter().all(|s| !s.range.is_empty()));
    }

    #[test]
    fn reserved_literals_and_goto_are_keywords() {
        assert_eq!(
            scan("goto done; x = true or false"),
            vec![
                (TokenClass::Keyword, "goto"),
                (TokenClass::Keyword, "true"),
                (TokenClass::Keyword, "or"),
                (TokenClass::Keyword, "false"),
            ]
        );
    }

    #[test]
    fn bracket_openers_inside_strings_and_comments_stay_there() {
        assert_eq!(
            scan("s = \"[[\" t = \"--[[\" -- see [[\nx = 1"),
            vec![
                (TokenClass::DoubleQuoteString, "\"[[\""),
                (TokenClass::DoubleQuoteString, "\"--[[\""),
                (TokenClass::LineComment, "-- see [[\n"),
                (TokenClass::Number, "1"),
            ]
        );
    }

    #[test]
    fn cached_matches_survive_earlier_spans() {
        // The first word match is the `end` inside the comment; it is searched again once the
        // comment has been taken
        assert_eq!(
            scan("x --[[ end ]] end"),
            vec![
                (TokenClass::MultiLineComment, "--[[ end ]]"),
                (TokenClass::Keyword, "end"),
            ]
        );
    }

    #[test]
    fn zero_budget_aborts() {
        let table = PatternTable::lua(&Palette::default()).unwrap();
        let limits = ScanLimits {
            time_budget: Duration::ZERO,
            ..ScanLimits::default()
        };
        let err = Scanner::new(&table, limits).scan("print(1)").unwrap_err();
        assert!(err.starts_with("time budget"), "{err}");
    }
}
