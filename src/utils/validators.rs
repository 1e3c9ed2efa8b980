//! Input validation for link targets, slugs and account credentials

use url::Url;

use crate::errors::{Result, TinylinkError};

/// Schemes a short link must never redirect to
const BLOCKED_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

pub const MAX_SLUG_LEN: usize = 64;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 32;
pub const MIN_PASSWORD_LEN: usize = 8;

/// First path segments owned by named routes. A link stored under one of
/// these would never be reached by the redirect catch-all.
pub const RESERVED_SLUGS: &[&str] = &["api", "auth", "dashboard", "health", "login", "register"];

/// Only absolute http(s) URLs with a host are accepted as redirect targets.
pub fn validate_target_url(target: &str) -> Result<()> {
    let target = target.trim();
    if target.is_empty() {
        return Err(TinylinkError::validation("Target URL cannot be empty"));
    }

    let parsed = Url::parse(target)
        .map_err(|e| TinylinkError::validation(format!("Invalid URL format: {}", e)))?;

    let scheme = parsed.scheme();
    if BLOCKED_SCHEMES.contains(&scheme) {
        return Err(TinylinkError::validation(format!(
            "URL scheme not allowed: {}",
            scheme
        )));
    }
    if scheme != "http" && scheme != "https" {
        return Err(TinylinkError::validation(format!(
            "Invalid protocol: {}. Only http:// and https:// are allowed",
            scheme
        )));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(TinylinkError::validation("URL must contain a host"));
    }

    Ok(())
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LEN
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

pub fn is_reserved_slug(slug: &str) -> bool {
    RESERVED_SLUGS.contains(&slug)
}

pub fn validate_slug(slug: &str) -> Result<()> {
    if !is_valid_slug(slug) {
        return Err(TinylinkError::validation(format!(
            "Invalid slug '{}': use 1-{} characters from [A-Za-z0-9_-]",
            slug, MAX_SLUG_LEN
        )));
    }
    if is_reserved_slug(slug) {
        return Err(TinylinkError::validation(format!(
            "Slug '{}' conflicts with a reserved route",
            slug
        )));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<()> {
    let len = username.chars().count();
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&len) {
        return Err(TinylinkError::validation(format!(
            "Username must be {}-{} characters long",
            MIN_USERNAME_LEN, MAX_USERNAME_LEN
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        return Err(TinylinkError::validation(
            "Username may only contain letters, digits, '_', '.' and '-'",
        ));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(TinylinkError::validation(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}
