//! Core category domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The name of a category, trimmed and never empty.
///
/// Deserializing goes through [CategoryName::new], so rows read back from a
/// database are held to the same rule as request bodies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(try_from = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Trim `name` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyCategoryName] if nothing is left after trimming.
    pub fn new(name: &str) -> Result<Self, Error> {
        match name.trim() {
            "" => Err(Error::EmptyCategoryName),
            trimmed => Ok(Self(trimmed.to_owned())),
        }
    }

    /// Wrap `name` as is, for names known to be valid such as the seeded
    /// defaults.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl TryFrom<String> for CategoryName {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(&name)
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Database identifier for a category.
pub type CategoryId = i64;

/// A category that expenses are filed under (e.g., 'Food', 'Transport').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The name of the category.
    pub name: CategoryName,
}

/// Request body for creating and renaming a category.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryFormData {
    /// The name of the category. Must not be empty or only whitespace.
    pub name: String,
}
