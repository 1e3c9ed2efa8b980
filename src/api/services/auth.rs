//! Account endpoints: register, login, logout

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::{error, info};

use crate::config::get_config;
use crate::errors::TinylinkError;
use crate::services::{AccountService, Credentials};

use super::error_code::ErrorCode;
use super::helpers::{CookieBuilder, error_from_tinylink, error_response, json_response};
use super::types::{AuthSuccessResponse, MessageResponse};

pub struct AuthService;

impl AuthService {
    pub async fn register(
        accounts: web::Data<Arc<AccountService>>,
        body: web::Json<Credentials>,
    ) -> impl Responder {
        let creds = body.into_inner();
        match accounts.register(&creds) {
            Ok(token) => Self::session_response(creds.username.trim(), token),
            Err(TinylinkError::Conflict(msg)) => {
                error_response(StatusCode::CONFLICT, ErrorCode::UsernameTaken, &msg)
            }
            Err(e) => Self::failure(e),
        }
    }

    pub async fn login(
        accounts: web::Data<Arc<AccountService>>,
        body: web::Json<Credentials>,
    ) -> impl Responder {
        let creds = body.into_inner();
        match accounts.login(&creds) {
            Ok(token) => Self::session_response(creds.username.trim(), token),
            Err(TinylinkError::Unauthorized(msg)) => {
                error_response(StatusCode::UNAUTHORIZED, ErrorCode::InvalidCredentials, &msg)
            }
            Err(e) => Self::failure(e),
        }
    }

    pub async fn logout() -> impl Responder {
        info!("User logged out");
        let cookie_builder = CookieBuilder::from_config(&get_config().auth);

        let mut response = json_response(
            StatusCode::OK,
            ErrorCode::Success,
            "OK",
            Some(MessageResponse {
                message: "Logout successful".to_string(),
            }),
        );
        if let Err(e) = response.add_cookie(&cookie_builder.expired_session_cookie()) {
            error!("Failed to clear session cookie: {}", e);
        }
        response
    }

    fn session_response(username: &str, token: String) -> HttpResponse {
        let cookie_builder = CookieBuilder::from_config(&get_config().auth);
        let cookie = cookie_builder.session_cookie(token.clone());

        let mut response = json_response(
            StatusCode::OK,
            ErrorCode::Success,
            "OK",
            Some(AuthSuccessResponse {
                username: username.to_string(),
                token,
                expires_in: cookie_builder.access_token_minutes().saturating_mul(60),
            }),
        );
        if let Err(e) = response.add_cookie(&cookie) {
            error!("Failed to set session cookie: {}", e);
        }
        response
    }

    fn failure(err: TinylinkError) -> HttpResponse {
        if err.http_status().is_server_error() {
            error!("Account operation failed: {}", err);
        }
        error_from_tinylink(&err)
    }
}

/// 账户路由配置
pub fn auth_routes() -> actix_web::Scope {
    web::scope("/auth")
        .route("/register", web::post().to(AuthService::register))
        .route("/login", web::post().to(AuthService::login))
        .route("/logout", web::post().to(AuthService::logout))
}
