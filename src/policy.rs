use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{BracketError, Result};
use crate::kind::{Classify, ErrorKind};

/// The raw shapes a suppression policy can be built from.
///
/// Mirrors the loosely typed "suppress" argument of a scoped manager: nothing,
/// a flag, a number, a collection of kinds, or the textual form used by
/// configuration files and the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PolicyInput {
    #[default]
    Absent,
    Flag(bool),
    Number(i64),
    Kinds(Vec<ErrorKind>),
    Text(String),
}

impl From<bool> for PolicyInput {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}
impl From<i64> for PolicyInput {
    fn from(number: i64) -> Self {
        Self::Number(number)
    }
}
impl From<Vec<ErrorKind>> for PolicyInput {
    fn from(kinds: Vec<ErrorKind>) -> Self {
        Self::Kinds(kinds)
    }
}
impl From<&[ErrorKind]> for PolicyInput {
    fn from(kinds: &[ErrorKind]) -> Self {
        Self::Kinds(kinds.to_vec())
    }
}
impl<const N: usize> From<[ErrorKind; N]> for PolicyInput {
    fn from(kinds: [ErrorKind; N]) -> Self {
        Self::Kinds(kinds.into())
    }
}
impl From<&str> for PolicyInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
impl From<String> for PolicyInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
impl<T: Into<PolicyInput>> From<Option<T>> for PolicyInput {
    fn from(input: Option<T>) -> Self {
        input.map_or(Self::Absent, Into::into)
    }
}

// ------------- SuppressionPolicy -------------
/// Which error kinds a guard swallows on exit. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuppressionPolicy {
    #[default]
    None,
    All,
    Set(BTreeSet<ErrorKind>),
}

impl SuppressionPolicy {
    /// An empty collection suppresses nothing.
    pub fn from_kinds<I: IntoIterator<Item = ErrorKind>>(kinds: I) -> Self {
        let kinds: BTreeSet<ErrorKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            Self::None
        } else {
            Self::Set(kinds)
        }
    }
    pub fn suppresses(&self, kind: &ErrorKind) -> bool {
        match self {
            Self::None => false,
            Self::All => true,
            Self::Set(kinds) => kinds.contains(kind),
        }
    }
    pub fn suppresses_error<E: Classify>(&self, error: &E) -> bool {
        self.suppresses(&error.kind())
    }

    fn from_text(text: &str) -> Result<Self> {
        let text = text.trim();
        match text.to_ascii_lowercase().as_str() {
            "" | "false" | "none" | "no" | "off" => return Ok(Self::None),
            "true" | "all" | "yes" | "on" => return Ok(Self::All),
            _ => (),
        }
        if let Ok(number) = text.parse::<i64>() {
            return Self::try_from(PolicyInput::Number(number));
        }
        let kinds = text
            .split(',')
            .map(str::trim)
            .filter(|identifier| !identifier.is_empty())
            .map(ErrorKind::from_str)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_kinds(kinds))
    }
}

impl TryFrom<PolicyInput> for SuppressionPolicy {
    type Error = BracketError;

    fn try_from(input: PolicyInput) -> Result<Self> {
        match input {
            PolicyInput::Absent | PolicyInput::Flag(false) | PolicyInput::Number(0) => {
                Ok(Self::None)
            }
            PolicyInput::Flag(true) => Ok(Self::All),
            PolicyInput::Number(number) => Err(BracketError::InvalidPolicy(format!(
                "suppress must be a flag or a collection of error kinds, got {number}"
            ))),
            PolicyInput::Kinds(kinds) => Ok(Self::from_kinds(kinds)),
            PolicyInput::Text(text) => Self::from_text(&text),
        }
    }
}

impl FromStr for SuppressionPolicy {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl fmt::Display for SuppressionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::All => write!(f, "all"),
            Self::Set(kinds) => {
                let names: Vec<&str> = kinds.iter().map(ErrorKind::name).collect();
                write!(f, "{{{}}}", names.join(", "))
            }
        }
    }
}
