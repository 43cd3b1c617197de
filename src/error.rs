use std::fmt;
use std::io;

use crate::grammar::{Tier, TokenClass};

pub(crate) type LunariaResult<T> = Result<T, Error>;

/// Errors that can occur during lunaria usage
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred when reading a palette file
    Io(io::Error),

    /// JSON parsing failed when loading a palette.
    Json(serde_json::Error),

    /// An invalid hex color was encountered.
    /// Can only happen when loading a palette.
    #[allow(missing_docs)]
    InvalidHexColor { value: String, reason: String },

    /// A pattern of the table failed to compile.
    /// The highlighter cannot be built when that happens.
    #[allow(missing_docs)]
    InvalidPattern { class: TokenClass, message: String },

    /// The patterns of a tier compiled one by one but not as a set.
    #[allow(missing_docs)]
    InvalidPatternSet { tier: Tier, message: String },

    /// A scan was aborted, either because it went over its time budget or because a single
    /// match attempt hit the regex engine retry limit.
    ScanAborted(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Json(err) => write!(f, "JSON parsing error: {}", err),
            Error::InvalidHexColor { value, reason } => {
                write!(f, "invalid hex color '{}': {}", value, reason)
            }
            Error::InvalidPattern { class, message } => {
                write!(f, "invalid pattern for {}: {}", class.name(), message)
            }
            Error::InvalidPatternSet { tier, message } => {
                write!(f, "invalid {:?} pattern set: {}", tier, message)
            }
            Error::ScanAborted(message) => write!(f, "scan aborted: {}", message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::InvalidHexColor { .. }
            | Error::InvalidPattern { .. }
            | Error::InvalidPatternSet { .. }
            | Error::ScanAborted(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
