//! Text form of level-order sequences
//!
//! `[5, 8, 3, null, 2]` on output. On input the brackets are optional,
//! whitespace is ignored and `null` or `none` (any case) marks an absent
//! node.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

#[cfg(feature = "visualize")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

const ABSENT: &str = "null";

/// Error returned when parsing a level-order sequence from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelOrderError {
    /// Only one of the surrounding brackets was present.
    #[error("unbalanced brackets around level-order sequence")]
    UnbalancedBrackets,

    /// Nothing between two separators.
    #[error("empty element at position {position}")]
    EmptyToken {
        /// Zero-based element index.
        position: usize,
    },

    /// Element that is neither an integer nor an absent marker.
    #[error("invalid element '{token}' at position {position}")]
    InvalidToken {
        /// Offending text, trimmed.
        token: String,
        /// Zero-based element index.
        position: usize,
    },
}

/// Level-order sequence of optional node values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "visualize", serde(transparent))]
pub struct LevelOrder(Vec<Option<i64>>);

impl LevelOrder {
    /// Unwrap into the underlying sequence
    pub fn into_inner(self) -> Vec<Option<i64>> {
        self.0
    }
}

impl From<Vec<Option<i64>>> for LevelOrder {
    fn from(values: Vec<Option<i64>>) -> Self {
        Self(values)
    }
}

impl Deref for LevelOrder {
    type Target = [Option<i64>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for LevelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, value) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            match value {
                Some(val) => write!(f, "{val}")?,
                None => f.write_str(ABSENT)?,
            }
        }
        f.write_str("]")
    }
}

impl FromStr for LevelOrder {
    type Err = LevelOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let body = match (s.strip_prefix('['), s.ends_with(']')) {
            (Some(rest), true) => &rest[..rest.len() - 1],
            (None, false) => s,
            _ => return Err(LevelOrderError::UnbalancedBrackets),
        };

        if body.trim().is_empty() {
            return Ok(Self::default());
        }

        body.split(',')
            .enumerate()
            .map(|(position, token)| parse_element(token.trim(), position))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

fn parse_element(token: &str, position: usize) -> Result<Option<i64>, LevelOrderError> {
    if token.is_empty() {
        return Err(LevelOrderError::EmptyToken { position });
    }
    if token.eq_ignore_ascii_case(ABSENT) || token.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    token
        .parse::<i64>()
        .map(Some)
        .map_err(|_| LevelOrderError::InvalidToken {
            token: token.to_string(),
            position,
        })
}
