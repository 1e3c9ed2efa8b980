//! Link management service
//!
//! Business rules between the HTTP handlers and the [`RecordStore`]:
//! target validation, slug selection, lifespan and ownership checks.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::LinksConfig;
use crate::errors::{Result, TinylinkError};
use crate::storage::{RecordStore, UrlRecord};
use crate::utils::generate_random_slug;
use crate::utils::validators::{is_reserved_slug, validate_slug, validate_target_url};

/// Request to create a new link
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLinkRequest {
    /// Redirect target
    pub target: String,
    /// Custom slug; generated when absent or empty
    #[serde(default)]
    pub slug: Option<String>,
}

pub struct LinkService {
    store: Arc<RecordStore>,
    lifespan_days: u32,
    slug_length: usize,
    max_slug_attempts: u32,
}

impl LinkService {
    pub fn new(store: Arc<RecordStore>, config: &LinksConfig) -> Self {
        Self {
            store,
            lifespan_days: config.lifespan_days,
            slug_length: config.slug_length.max(1),
            max_slug_attempts: config.max_slug_attempts.max(1),
        }
    }

    pub fn create_link(&self, owner: &str, req: CreateLinkRequest) -> Result<UrlRecord> {
        let target = req.target.trim();
        validate_target_url(target)?;

        match req.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(slug) => self.create_with_slug(owner, target, slug),
            None => self.create_with_generated_slug(owner, target),
        }
    }

    fn create_with_slug(&self, owner: &str, target: &str, slug: &str) -> Result<UrlRecord> {
        validate_slug(slug)?;
        let record = UrlRecord::with_lifespan(target, slug, owner, self.lifespan_days)?;

        match self.store.insert_if_absent(record.clone()) {
            Ok(()) => {
                info!("Link created: {} -> {} (owner: {})", slug, target, owner);
                Ok(record)
            }
            Err(_) => {
                debug!("Slug already taken: {}", slug);
                Err(TinylinkError::conflict(format!(
                    "Slug '{}' is already in use",
                    slug
                )))
            }
        }
    }

    fn create_with_generated_slug(&self, owner: &str, target: &str) -> Result<UrlRecord> {
        for attempt in 1..=self.max_slug_attempts {
            let slug = generate_random_slug(self.slug_length);
            if is_reserved_slug(&slug) {
                debug!("Generated slug is reserved (attempt {}): {}", attempt, slug);
                continue;
            }
            let record = UrlRecord::with_lifespan(target, slug.as_str(), owner, self.lifespan_days)?;

            match self.store.insert_if_absent(record.clone()) {
                Ok(()) => {
                    info!("Link created: {} -> {} (owner: {})", slug, target, owner);
                    return Ok(record);
                }
                Err(_) => debug!("Generated slug collided (attempt {}): {}", attempt, slug),
            }
        }

        warn!(
            "Could not find a free slug after {} attempts",
            self.max_slug_attempts
        );
        Err(TinylinkError::conflict(
            "Could not generate a unique slug, try again",
        ))
    }

    /// Redirect lookup: counts the visit and returns the updated record
    pub fn resolve(&self, slug: &str) -> Option<UrlRecord> {
        self.store.record_visit(slug)
    }

    /// A record the caller owns. Someone else's slug is reported as missing.
    pub fn get_link(&self, owner: &str, slug: &str) -> Result<UrlRecord> {
        self.store
            .get(slug)
            .filter(|record| record.owner == owner)
            .ok_or_else(|| TinylinkError::not_found(format!("Link '{}' not found", slug)))
    }

    /// The owner's links, newest first
    pub fn list_links(&self, owner: &str) -> Vec<UrlRecord> {
        let mut links = self.store.by_owner(owner);
        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.slug().cmp(b.slug()))
        });
        links
    }
}
