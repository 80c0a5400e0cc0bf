//! Newtype domain identifier.
//!
//! The hero id is represented as a distinct newtype wrapping the raw integer
//! the server assigns. This keeps ids from being interchanged with other
//! numeric values (counts, status codes) even though all are integers under
//! the hood.

use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies a hero within the remote collection.
///
/// Wraps the integer assigned by the server when the hero is created
/// (positive integer). Ids are immutable for the lifetime of the hero;
/// clients never mint them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeroId(u64);

impl HeroId {
    /// Creates an identifier from a raw integer.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for HeroId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HeroId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_as_bare_integer() {
        let json = serde_json::to_string(&HeroId::new(11)).unwrap();
        assert_eq!(json, "11");

        let id: HeroId = serde_json::from_str("11").unwrap();
        assert_eq!(id, HeroId::new(11));
    }

    #[test]
    fn parses_from_str() {
        let id: HeroId = "42".parse().unwrap();
        assert_eq!(id.as_u64(), 42);
        assert!("forty-two".parse::<HeroId>().is_err());
    }

    #[test]
    fn displays_raw_value() {
        assert_eq!(HeroId::new(13).to_string(), "13");
    }
}
