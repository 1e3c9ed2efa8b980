//! Account password hashing
//!
//! `AccountService::register` stores the PHC string produced here in
//! `UserAccount::password_hash`; `AccountService::login` checks a submitted
//! password against it. Plain passwords never reach the `UserStore`.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hashing or parsing failure. Surfaces as `TinylinkError::PasswordHash` (HTTP 500).
#[derive(Debug)]
pub enum PasswordError {
    HashError(String),
    VerifyError(String),
}

impl std::fmt::Display for PasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HashError(msg) => write!(f, "could not hash account password: {}", msg),
            Self::VerifyError(msg) => write!(f, "stored account hash unreadable: {}", msg),
        }
    }
}

impl std::error::Error for PasswordError {}

/// Argon2id with a fresh random salt per account
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// A wrong password is `Ok(false)` so login can answer 401; `Err` means the
/// stored account hash itself is corrupt.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| PasswordError::VerifyError(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
