use chrono::{DateTime, Duration, Utc};

use crate::errors::{Result, TinylinkError};

/// Lifespan applied when the caller does not pick one
pub const DEFAULT_LIFESPAN_DAYS: u32 = 2;

/// A shortened URL and its visit counter.
///
/// `expires_at` is recorded for display only; nothing refuses a redirect
/// once it has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub original_url: String,
    slug: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub visits: u64,
}

impl UrlRecord {
    pub fn new(
        original: impl Into<String>,
        slug: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self> {
        Self::with_lifespan(original, slug, owner, DEFAULT_LIFESPAN_DAYS)
    }

    pub fn with_lifespan(
        original: impl Into<String>,
        slug: impl Into<String>,
        owner: impl Into<String>,
        lifespan_days: u32,
    ) -> Result<Self> {
        let original_url = original.into();
        let slug = slug.into();
        let owner = owner.into();

        if original_url.is_empty() {
            return Err(TinylinkError::invalid_input("original_url must not be empty"));
        }
        if slug.is_empty() {
            return Err(TinylinkError::invalid_input("slug must not be empty"));
        }
        if owner.is_empty() {
            return Err(TinylinkError::invalid_input("owner must not be empty"));
        }
        // expires_at must stay strictly after created_at
        if lifespan_days == 0 {
            return Err(TinylinkError::invalid_input(
                "lifespan_days must be at least 1",
            ));
        }

        let created_at = Utc::now();
        Ok(Self {
            original_url,
            slug,
            owner,
            created_at,
            expires_at: created_at + Duration::days(i64::from(lifespan_days)),
            visits: 0,
        })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn increment_visits(&mut self) {
        self.visits = self.visits.saturating_add(1);
    }
}

/// A registered user. `password_hash` is an Argon2id PHC string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}
