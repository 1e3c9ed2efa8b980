//! User registration and login

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use crate::api::jwt::JwtService;
use crate::errors::{Result, TinylinkError};
use crate::storage::{UserAccount, UserStore};
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validators::{validate_password, validate_username};

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub struct AccountService {
    users: Arc<UserStore>,
    jwt: Arc<JwtService>,
}

impl AccountService {
    pub fn new(users: Arc<UserStore>, jwt: Arc<JwtService>) -> Self {
        Self { users, jwt }
    }

    /// Create an account and return a session token for it
    pub fn register(&self, creds: &Credentials) -> Result<String> {
        let username = creds.username.trim();
        validate_username(username)?;
        validate_password(&creds.password)?;

        if self.users.get(username).is_some() {
            return Err(TinylinkError::conflict(format!(
                "Username '{}' is already taken",
                username
            )));
        }

        let password_hash = hash_password(&creds.password)?;
        self.users
            .insert(UserAccount::new(username, password_hash))?;
        info!("User registered: {}", username);

        Ok(self.jwt.generate_token(username)?)
    }

    /// Check credentials and return a fresh session token
    pub fn login(&self, creds: &Credentials) -> Result<String> {
        let username = creds.username.trim();
        let invalid = || TinylinkError::unauthorized("Invalid username or password");

        let Some(account) = self.users.get(username) else {
            warn!("Login failed: unknown user '{}'", username);
            return Err(invalid());
        };

        if !verify_password(&creds.password, &account.password_hash)? {
            warn!("Login failed: wrong password for '{}'", username);
            return Err(invalid());
        }

        info!("User logged in: {}", username);
        Ok(self.jwt.generate_token(username)?)
    }
}
