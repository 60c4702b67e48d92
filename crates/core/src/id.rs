//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a physical part (e.g. `E2081-66555`).
///
/// Matching is exact and case-sensitive; the value is stored as given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartNumber(String);

impl PartNumber {
    /// Parse and validate a part number.
    ///
    /// Rejects empty values and values with surrounding whitespace, since a
    /// padded key could never match on lookup.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::invalid_id("PartNumber: empty"));
        }
        if value.trim() != value {
            return Err(DomainError::invalid_id(format!(
                "PartNumber: surrounding whitespace in {value:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PartNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PartNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Hash/Eq of the newtype agree with `str`, so maps keyed by `PartNumber`
// can be queried with a borrowed `&str`.
impl Borrow<str> for PartNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PartNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
