//! Character identifiers and reference-URL parsing.
//!
//! The API addresses characters by a numeric path segment
//! (`/characters/{id}`) and refers to a house's sworn members by full
//! URLs of the same shape. [`CharacterId`] wraps that number and knows
//! how to recover it from a reference URL, which is what lets the
//! houses listing cross-link to the character detail view.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Unique identifier for a character, as assigned by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(u64);

impl CharacterId {
    /// Creates a character ID from a raw number.
    ///
    /// # Examples
    ///
    /// ```
    /// use maester_core::CharacterId;
    ///
    /// let id = CharacterId::new(583);
    /// assert_eq!(id.to_string(), "583");
    /// ```
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Extracts a character ID from a member reference URL.
    ///
    /// Reference URLs are supplied by the API itself and end in the
    /// numeric id (`https://anapioficeandfire.com/api/characters/583`).
    /// A trailing slash is tolerated. URLs whose last segment is not a
    /// number are rejected with [`Error::InvalidReference`].
    ///
    /// # Examples
    ///
    /// ```
    /// use maester_core::CharacterId;
    ///
    /// let id =
    ///     CharacterId::from_url("https://anapioficeandfire.com/api/characters/583").unwrap();
    /// assert_eq!(id.as_u64(), 583);
    /// ```
    pub fn from_url(url: &str) -> Result<Self> {
        url.trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse::<u64>().ok())
            .map(Self)
            .ok_or_else(|| Error::InvalidReference {
                url: url.to_string(),
            })
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CharacterId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<CharacterId> for u64 {
    fn from(id: CharacterId) -> Self {
        id.0
    }
}

impl std::str::FromStr for CharacterId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
