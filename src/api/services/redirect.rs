use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, trace};

use crate::config::get_config;
use crate::services::LinkService;
use crate::storage::UrlRecord;
use crate::utils::validators::is_valid_slug;

pub struct RedirectService;

impl RedirectService {
    pub async fn handle_redirect(
        path: web::Path<String>,
        links: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let slug = path.into_inner();

        if slug.is_empty() {
            let default_url = get_config().links.default_url.clone();
            return HttpResponse::TemporaryRedirect()
                .insert_header(("Location", default_url))
                .finish();
        }

        if !is_valid_slug(&slug) {
            // 非法短码，直接 404
            trace!("Invalid slug rejected: {}", slug);
            return Self::not_found_response();
        }

        match links.resolve(&slug) {
            Some(record) => Self::finish_redirect(&record),
            None => {
                debug!("Redirect slug not found: {}", slug);
                Self::not_found_response()
            }
        }
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::build(StatusCode::NOT_FOUND)
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .insert_header(("Cache-Control", "public, max-age=60"))
            .body("Not Found")
    }

    fn finish_redirect(record: &UrlRecord) -> HttpResponse {
        trace!(
            "Redirecting {} -> {} (visit #{})",
            record.slug(),
            record.original_url,
            record.visits
        );
        HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
            .insert_header(("Location", record.original_url.as_str()))
            .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
            .finish()
    }
}

/// Redirect 路由配置，必须最后注册
pub fn redirect_routes() -> actix_web::Scope {
    web::scope("")
        .route("/{path}*", web::get().to(RedirectService::handle_redirect))
        .route("/{path}*", web::head().to(RedirectService::handle_redirect))
}
