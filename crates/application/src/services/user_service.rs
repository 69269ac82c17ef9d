//! User registration and login

use std::sync::Arc;

use domain::entities::User;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    error::ApplicationError,
    ports::{PasswordHasherPort, UserStore},
};

const INVALID_USER_DATA: &str = "Invalid user data";
const ALREADY_REGISTERED: &str = "User already registered";
const BAD_CREDENTIALS: &str = "Invalid username or password";

/// Account use cases
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasherPort>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasherPort>) -> Self {
        Self { store, hasher }
    }

    /// Register a new account and hand out its token
    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> Result<User, ApplicationError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ApplicationError::InvalidOperation(
                INVALID_USER_DATA.to_string(),
            ));
        }

        if self.store.find_by_username(username).await?.is_some() {
            warn!("Username already taken");
            return Err(ApplicationError::InvalidOperation(
                ALREADY_REGISTERED.to_string(),
            ));
        }

        let hash = self.hasher.hash(password)?;
        let user = User::new(username, hash, Uuid::new_v4().to_string());
        self.store.insert(&user).await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Check credentials and return the account token
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApplicationError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ApplicationError::InvalidOperation(
                INVALID_USER_DATA.to_string(),
            ));
        }

        let Some(user) = self.store.find_by_username(username).await? else {
            warn!("Login for unknown user");
            return Err(ApplicationError::NotAuthorized(BAD_CREDENTIALS.to_string()));
        };

        if !self.hasher.verify(password, &user.password_hash) {
            warn!(user_id = %user.id, "Login with wrong password");
            return Err(ApplicationError::NotAuthorized(BAD_CREDENTIALS.to_string()));
        }

        info!(user_id = %user.id, "User logged in");
        Ok(user.token)
    }
}
