//! Error kinds and classification of block errors.
//!
//! A guard never looks inside the errors raised by its protected block. All it
//! needs is the [`ErrorKind`] of the error, which is obtained through the
//! [`Classify`] trait. The error value itself is handed back to the caller
//! untouched when it is not suppressed.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use thiserror::Error;

use crate::error::BracketError;

// ------------- ErrorKind -------------
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    Value,
    Index,
    Key,
    Io,
    Parse,
    Generic,
    Custom(String),
}

impl ErrorKind {
    /// Custom names are compared case-insensitively and without an `Error`
    /// suffix, the same way the built-in kinds are parsed.
    pub fn custom(name: impl AsRef<str>) -> Self {
        Self::Custom(normalise(name.as_ref()))
    }
    pub fn name(&self) -> &str {
        match self {
            Self::Value => "value",
            Self::Index => "index",
            Self::Key => "key",
            Self::Io => "io",
            Self::Parse => "parse",
            Self::Generic => "generic",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Accepts both the short names (`value`, `key`) and the familiar class-style
/// spellings (`ValueError`, `KeyError`, `Exception`). Anything else that looks
/// like an identifier becomes a [`ErrorKind::Custom`] kind.
impl FromStr for ErrorKind {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let identifier = s.trim();
        if identifier.is_empty() {
            return Err(BracketError::InvalidPolicy("empty error kind identifier".into()));
        }
        if !identifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == ':')
        {
            return Err(BracketError::InvalidPolicy(format!(
                "'{identifier}' is not an error kind identifier"
            )));
        }
        let stem = normalise(identifier);
        let kind = match stem.as_str() {
            "value" => Self::Value,
            "index" => Self::Index,
            "key" => Self::Key,
            "io" | "os" => Self::Io,
            "parse" => Self::Parse,
            "generic" | "exception" => Self::Generic,
            _ => Self::Custom(stem.clone()),
        };
        Ok(kind)
    }
}

// `KeyError`, `key_error` and `key` all become `key`.
fn normalise(identifier: &str) -> String {
    let lowered = identifier.trim().to_ascii_lowercase();
    let stem = lowered.strip_suffix("error").unwrap_or("").trim_end_matches(['_', '-']);
    if stem.is_empty() {
        return lowered;
    }
    stem.to_string()
}

// ------------- Classify -------------
/// Anything a protected block may fail with.
pub trait Classify {
    fn kind(&self) -> ErrorKind;
}

impl Classify for ErrorKind {
    fn kind(&self) -> ErrorKind {
        self.clone()
    }
}
impl Classify for std::io::Error {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Io
    }
}
impl Classify for ParseIntError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Parse
    }
}
impl Classify for ParseFloatError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Parse
    }
}
impl Classify for BracketError {
    fn kind(&self) -> ErrorKind {
        match self {
            BracketError::InvalidPolicy(_) | BracketError::Overflow(_) => ErrorKind::Value,
            BracketError::Io(_) => ErrorKind::Io,
            BracketError::Parse { .. } => ErrorKind::Parse,
            BracketError::Config(_) => ErrorKind::custom("config"),
            BracketError::Persistence(_) => ErrorKind::custom("persistence"),
        }
    }
}

// ------------- BlockError -------------
/// A plain error carrying a kind and a message, for blocks that have no error
/// type of their own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} error: {message}")]
pub struct BlockError {
    kind: ErrorKind,
    message: String,
}

impl BlockError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
    pub fn value(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Value, message)
    }
    pub fn index(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Index, message)
    }
    pub fn key(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Key, message)
    }
    pub fn generic(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Generic, message)
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Classify for BlockError {
    fn kind(&self) -> ErrorKind {
        self.kind.clone()
    }
}
