use actix_web::{Responder, web};
use std::sync::Arc;
use tracing::trace;

use crate::storage::{RecordStore, UserStore};

use super::helpers::success_response;
use super::types::HealthResponse;

// 应用启动时间
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }
}

pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        records: web::Data<Arc<RecordStore>>,
        users: web::Data<Arc<UserStore>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        trace!("Received health check request");

        let uptime = chrono::Utc::now() - app_start_time.start_datetime;
        success_response(HealthResponse {
            status: "healthy".to_string(),
            started_at: app_start_time.start_datetime,
            uptime_secs: uptime.num_seconds(),
            links_count: records.len(),
            users_count: users.len(),
        })
    }
}

pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
}
