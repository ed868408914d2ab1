//! Crate-level error types.

use std::fmt;

/// Errors produced by the extrinsics crate.
#[derive(Debug)]
pub enum ExtrinsicsError {
    /// A vector that must be normalized has (near) zero length, or two
    /// vectors that must span a plane are parallel. The payload names the
    /// offending input.
    DegenerateVector(&'static str),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A key string with no bound action.
    UnknownKey(String),
    /// Failed to render a frame report.
    Report(String),
}

impl fmt::Display for ExtrinsicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateVector(what) => {
                write!(f, "degenerate vector: {what}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownKey(key) => write!(f, "no action bound to key {key}"),
            Self::Report(msg) => write!(f, "frame report error: {msg}"),
        }
    }
}

impl std::error::Error for ExtrinsicsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExtrinsicsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
