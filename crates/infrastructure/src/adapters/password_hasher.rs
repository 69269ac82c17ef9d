//! Password hashing using Argon2
//!
//! Hashes are PHC strings (`$argon2id$v=19$...`) carrying their own salt and
//! parameters, so they can be verified without extra configuration.

use application::{error::ApplicationError, ports::PasswordHasherPort};
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use tracing::{debug, instrument, warn};

/// Argon2id password hasher with the crate's default parameters
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PasswordHasherPort for Argon2PasswordHasher {
    #[instrument(skip_all)]
    fn hash(&self, password: &str) -> Result<String, ApplicationError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ApplicationError::Internal(format!("Failed to hash password: {e}")))?;
        debug!("Password hashed");
        Ok(hash.to_string())
    }

    #[instrument(skip_all)]
    fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            warn!("Stored password hash is not a valid PHC string");
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_phc_argon2id() {
        let hash = Argon2PasswordHasher::new().hash("hunter2").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn verify_accepts_correct_password() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("hunter2").unwrap();
        assert!(hasher.verify("hunter2", &hash));
        assert!(!hasher.verify("hunter3", &hash));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let hasher = Argon2PasswordHasher::new();
        assert_ne!(hasher.hash("pw").unwrap(), hasher.hash("pw").unwrap());
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!Argon2PasswordHasher::new().verify("pw", "plaintext"));
    }
}
