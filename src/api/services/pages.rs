//! Page endpoints
//!
//! `/register` and `/login` send already signed-in users home; `/dashboard`
//! sends anonymous users home. Templates are rendered by the front end, these
//! handlers only answer with the data a page needs.

use std::sync::Arc;

use actix_web::{HttpRequest, Responder, web};
use tracing::debug;

use crate::api::jwt::JwtService;
use crate::api::middleware::authenticate;
use crate::services::LinkService;

use super::helpers::{redirect_to, success_response};
use super::types::{DashboardResponse, LinkResponse, PageResponse};

const HOME: &str = "/";

pub struct PagesService;

impl PagesService {
    pub async fn register_page(
        req: HttpRequest,
        jwt: web::Data<Arc<JwtService>>,
    ) -> impl Responder {
        Self::anonymous_page(&req, &jwt, "register")
    }

    pub async fn login_page(req: HttpRequest, jwt: web::Data<Arc<JwtService>>) -> impl Responder {
        Self::anonymous_page(&req, &jwt, "login")
    }

    pub async fn dashboard(
        req: HttpRequest,
        jwt: web::Data<Arc<JwtService>>,
        links: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let Some(payload) = authenticate(&req, &jwt) else {
            debug!("Dashboard requested without a valid session");
            return redirect_to(HOME);
        };

        let owned = links
            .list_links(&payload.username)
            .iter()
            .map(LinkResponse::from)
            .collect();
        success_response(DashboardResponse {
            username: payload.username,
            links: owned,
        })
    }

    fn anonymous_page(req: &HttpRequest, jwt: &JwtService, page: &str) -> actix_web::HttpResponse {
        if authenticate(req, jwt).is_some() {
            return redirect_to(HOME);
        }
        success_response(PageResponse {
            page: page.to_string(),
        })
    }
}

/// 页面路由配置
pub fn page_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::get().to(PagesService::register_page))
        .route("/login", web::get().to(PagesService::login_page))
        .route("/dashboard", web::get().to(PagesService::dashboard));
}
