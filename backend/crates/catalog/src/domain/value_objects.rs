//! Catalog Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when a slug is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// Slug is empty after trimming
    Empty,
}

impl fmt::Display for SlugError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Slug cannot be empty"),
        }
    }
}

impl std::error::Error for SlugError {}

/// URL path segment identifying a module
///
/// Slugs are seeded with the catalog; lookups are exact, so the only
/// invariant enforced here is non-emptiness.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Create from a request path segment
    pub fn new(input: impl AsRef<str>) -> Result<Self, SlugError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SlugError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slug").field(&self.0).finish()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_trimmed() {
        let slug = Slug::new(" intro-to-physics ").unwrap();
        assert_eq!(slug.as_str(), "intro-to-physics");
    }

    #[test]
    fn test_empty_slug_rejected() {
        assert!(matches!(Slug::new("  "), Err(SlugError::Empty)));
    }
}
