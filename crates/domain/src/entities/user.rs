//! Registered user entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::DocumentId;

/// A registered user
///
/// `password_hash` is a PHC string; the plaintext password never reaches
/// this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: DocumentId,
    pub username: String,
    pub password_hash: String,
    pub token: String,
    /// Identifiers of liked games
    pub likes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh user with no likes
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            username: username.into(),
            password_hash: password_hash.into(),
            token: token.into(),
            likes: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
