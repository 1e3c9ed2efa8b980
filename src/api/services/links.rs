//! Link endpoints for the signed-in user

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{Responder, web};
use tracing::trace;

use crate::api::middleware::AuthenticatedUser;
use crate::errors::TinylinkError;
use crate::services::{CreateLinkRequest, LinkService};

use super::error_code::ErrorCode;
use super::helpers::{api_result, error_from_tinylink, error_response, success_response};
use super::types::LinkResponse;

pub struct LinksService;

impl LinksService {
    pub async fn create_link(
        user: AuthenticatedUser,
        links: web::Data<Arc<LinkService>>,
        body: web::Json<CreateLinkRequest>,
    ) -> impl Responder {
        let result = links
            .create_link(user.username(), body.into_inner())
            .map(LinkResponse::from);
        api_result(result)
    }

    pub async fn list_links(
        user: AuthenticatedUser,
        links: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let owned: Vec<LinkResponse> = links
            .list_links(user.username())
            .iter()
            .map(LinkResponse::from)
            .collect();
        trace!("Listing {} links for {}", owned.len(), user.username());
        success_response(owned)
    }

    pub async fn get_link(
        user: AuthenticatedUser,
        links: web::Data<Arc<LinkService>>,
        path: web::Path<String>,
    ) -> impl Responder {
        let slug = path.into_inner();
        match links.get_link(user.username(), &slug) {
            Ok(record) => success_response(LinkResponse::from(record)),
            Err(TinylinkError::NotFound(msg)) => {
                error_response(StatusCode::NOT_FOUND, ErrorCode::LinkNotFound, &msg)
            }
            Err(e) => error_from_tinylink(&e),
        }
    }
}

/// 链接 API 路由配置，挂载在 `UserAuth` 之后
pub fn link_routes() -> actix_web::Scope {
    web::scope("/links")
        .route("", web::post().to(LinksService::create_link))
        .route("", web::get().to(LinksService::list_links))
        .route("/{slug}", web::get().to(LinksService::get_link))
}
