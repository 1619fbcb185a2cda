//! Strongly-typed product identity.
//!
//! The catalog has no numeric identifiers; the product name is the unique key
//! within a catalog, so it gets a newtype rather than bare `String`s drifting
//! through every layer.

use serde::{Deserialize, Serialize};

/// Unique key of a product within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for ProductName {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ProductName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_inner_string() {
        let name = ProductName::from("Tiramisu");
        assert_eq!(name.to_string(), "Tiramisu");
        assert_eq!(name.as_str(), "Tiramisu");
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(ProductName::from("Brownie"), ProductName::new("Brownie"));
        assert_ne!(ProductName::from("Brownie"), ProductName::from("brownie"));
    }
}
