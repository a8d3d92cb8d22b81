//! Strongly-typed product identifier.

use core::fmt;
use core::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Identifier of a product in the catalog.
///
/// Renders as `P` followed by the zero-padded three-digit allocation sequence
/// (`P001`, `P042`, and `P1000` once the sequence outgrows three digits).
/// Catalog keys are the canonical rendering, so [`FromStr`] accepts exactly
/// that form: `P1` or `P0001` never resolve to `P001`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(u32);

impl ProductId {
    pub fn new(seq: u32) -> Self {
        Self(seq)
    }

    /// Numeric allocation sequence behind the rendered id.
    pub fn seq(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{:03}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('P')
            .ok_or_else(|| DomainError::invalid_id(format!("'{s}' does not start with 'P'")))?;
        let seq: u32 = digits
            .parse()
            .map_err(|_| DomainError::invalid_id(format!("'{s}' has a non-numeric suffix")))?;
        let id = Self(seq);
        // Reject non-canonical paddings such as P1 or P0001.
        if id.to_string() != s {
            return Err(DomainError::invalid_id(format!(
                "'{s}' is not in canonical form '{id}'"
            )));
        }
        Ok(id)
    }
}

impl Serialize for ProductId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
