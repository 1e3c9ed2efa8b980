//! API 类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::UrlRecord;

/// JSON envelope used by every API response
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LinkResponse {
    pub slug: String,
    pub short_path: String,
    pub original_url: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub visits: u64,
}

impl From<&UrlRecord> for LinkResponse {
    fn from(record: &UrlRecord) -> Self {
        Self {
            slug: record.slug().to_string(),
            short_path: format!("/{}", record.slug()),
            original_url: record.original_url.clone(),
            owner: record.owner.clone(),
            created_at: record.created_at,
            expires_at: record.expires_at,
            visits: record.visits,
        }
    }
}

impl From<UrlRecord> for LinkResponse {
    fn from(record: UrlRecord) -> Self {
        Self::from(&record)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AuthSuccessResponse {
    pub username: String,
    pub token: String,
    pub expires_in: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PageResponse {
    pub page: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DashboardResponse {
    pub username: String,
    pub links: Vec<LinkResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub uptime_secs: i64,
    pub links_count: usize,
    pub users_count: usize,
}
