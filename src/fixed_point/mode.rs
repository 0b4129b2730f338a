//! Result shape selection for fixed-point searches.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape in which [`find_fixed_point`](super::find_fixed_point) hands back
/// its result.
///
/// Serialized names are lowercase. The legacy spellings `"infiter"` and
/// `"callable"` are accepted as aliases for `Iterator` and `Thunk`.
///
/// # Example
///
/// ```rust
/// use tetras_toolbox::ReturnMode;
///
/// let mode: ReturnMode = "callable".parse().unwrap();
/// assert_eq!(mode, ReturnMode::Thunk);
/// assert_eq!(ReturnMode::default(), ReturnMode::Thunk);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnMode {
    /// Scan eagerly and return the converged value
    Value,

    /// Return an endless iterator over successive fixed points
    #[serde(alias = "infiter")]
    Iterator,

    /// Return a resumable zero-argument callable
    #[default]
    #[serde(alias = "callable")]
    Thunk,
}

impl ReturnMode {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Iterator => "iterator",
            Self::Thunk => "thunk",
        }
    }

    /// Whether this mode evaluates anything before returning.
    pub fn is_eager(&self) -> bool {
        matches!(self, Self::Value)
    }
}

impl fmt::Display for ReturnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReturnMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(Self::Value),
            "iterator" | "infiter" => Ok(Self::Iterator),
            "thunk" | "callable" => Ok(Self::Thunk),
            _ => Err(Error::UnknownReturnMode {
                name: s.to_string(),
            }),
        }
    }
}
