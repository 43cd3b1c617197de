//! Colors Lua source with `<color=#rrggbb>` rich-text tags in a single forward scan.
//!
//! ```ignore
//! let highlighter = lunaria::Highlighter::new()?;
//! assert_eq!(
//!     highlighter.highlight("print(42)"),
//!     "<color=#56b6c2>print</color>(<color=#d19a66>42</color>)"
//! );
//! ```

mod cache;
mod error;
mod grammar;
mod highlight;
mod options;
mod palette;
mod renderers;
mod scanner;

pub use cache::HighlightCache;
pub use error::Error;
pub use grammar::{KEYWORDS, LIBRARY_NAMES, PatternEntry, PatternTable, Tier, TokenClass};
pub use highlight::{HighlightedCode, Highlighter, Segment};
pub use options::HighlightOptions;
pub use palette::{Color, Palette};
pub use renderers::{html::HtmlRenderer, rich_text::RichTextRenderer, terminal::TerminalRenderer};
pub use scanner::{ScanLimits, Span};
