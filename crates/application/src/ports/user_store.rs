//! User storage port

use async_trait::async_trait;
use domain::entities::User;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for registered user persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApplicationError>;

    /// Store a new user
    ///
    /// Returns `ApplicationError::InvalidOperation` if the username is taken.
    async fn insert(&self, user: &User) -> Result<(), ApplicationError>;
}
