//! Document identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a stored document (game or user)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Create a new random document ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a document ID from a string, ignoring surrounding whitespace
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }

    /// Get the underlying UUID
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for DocumentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(DocumentId::new(), DocumentId::new());
    }

    #[test]
    fn parse_trims_whitespace() {
        let original = DocumentId::new();
        let parsed = DocumentId::parse(&format!("  {original} ")).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(DocumentId::parse("not-an-id").is_err());
    }
}
