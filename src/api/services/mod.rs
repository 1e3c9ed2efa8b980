pub mod auth;
pub mod error_code;
pub mod health;
pub mod helpers;
pub mod links;
pub mod pages;
pub mod redirect;
pub mod types;

use actix_web::web;

use crate::api::middleware::UserAuth;

pub use auth::{AuthService, auth_routes};
pub use error_code::ErrorCode;
pub use health::{AppStartTime, HealthService, health_routes};
pub use helpers::{error_response, json_response, success_response};
pub use links::{LinksService, link_routes};
pub use pages::{PagesService, page_routes};
pub use redirect::{RedirectService, redirect_routes};

/// Registers every route. The redirect catch-all goes last so it never
/// shadows a named route.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(page_routes)
        .service(auth_routes())
        .service(web::scope("/api").wrap(UserAuth).service(link_routes()))
        .service(health_routes())
        .service(redirect_routes());
}
