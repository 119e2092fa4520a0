//! Crate-level error types.

use std::fmt;

/// Errors produced while loading or persisting wall configuration.
///
/// The interactive path (pointer handling and per-frame updates) never
/// produces these; it degrades to no-ops instead.
#[derive(Debug)]
pub enum PinwallError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Gallery descriptor file could not be parsed.
    GalleryParse(String),
    /// Position store file is not a JSON object.
    StoreParse(String),
    /// Two gallery descriptors share the same id.
    DuplicateItem(String),
}

impl fmt::Display for PinwallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::GalleryParse(msg) => {
                write!(f, "gallery parse error: {msg}")
            }
            Self::StoreParse(msg) => {
                write!(f, "position store parse error: {msg}")
            }
            Self::DuplicateItem(id) => {
                write!(f, "duplicate gallery item id '{id}'")
            }
        }
    }
}

impl std::error::Error for PinwallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PinwallError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
