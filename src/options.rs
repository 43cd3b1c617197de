use std::time::Duration;

use crate::palette::Palette;
use crate::scanner::ScanLimits;

/// The options a [`Highlighter`](crate::Highlighter) is built with.
///
/// They are fixed for the lifetime of the highlighter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    pub(crate) palette: Palette,
    pub(crate) limits: ScanLimits,
}

impl HighlightOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The colors to use for each token class
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// How long a single highlight call may take before giving up. Defaults to 200ms.
    pub fn time_budget(mut self, budget: Duration) -> Self {
        self.limits.time_budget = budget;
        self
    }

    /// How much backtracking a single regex match attempt may do before giving up.
    pub fn retry_limit(mut self, limit: u32) -> Self {
        self.limits.retry_limit = limit;
        self
    }
}
