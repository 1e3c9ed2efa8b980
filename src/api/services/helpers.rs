//! Response and cookie helpers shared by the handlers

use actix_web::HttpResponse;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::api::constants::SESSION_COOKIE_NAME;
use crate::config::{AuthConfig, SameSitePolicy};
use crate::errors::TinylinkError;

use super::error_code::ErrorCode;
use super::types::ApiResponse;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(
    status: StatusCode,
    code: ErrorCode,
    message: impl Into<String>,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code: code as i32,
            message: message.into(),
            data,
        })
}

/// 构建成功响应
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, ErrorCode::Success, "OK", Some(data))
}

/// 构建错误响应
pub fn error_response(status: StatusCode, error_code: ErrorCode, message: &str) -> HttpResponse {
    json_response::<()>(status, error_code, message, None)
}

/// 从 TinylinkError 构建错误响应（自动映射 HTTP 状态码和 ErrorCode）
pub fn error_from_tinylink(err: &TinylinkError) -> HttpResponse {
    error_response(err.http_status(), ErrorCode::from(err), err.message())
}

/// 成功时返回 200 OK + JSON 数据，失败时映射 TinylinkError
pub fn api_result<T: Serialize>(result: crate::errors::Result<T>) -> HttpResponse {
    match result {
        Ok(data) => success_response(data),
        Err(e) => error_from_tinylink(&e),
    }
}

/// `303 See Other` to `location`
pub fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// Builds the session cookie carrying the token
pub struct CookieBuilder {
    same_site: SameSite,
    secure: bool,
    domain: Option<String>,
    access_token_minutes: u64,
}

impl CookieBuilder {
    pub fn from_config(config: &AuthConfig) -> Self {
        let same_site = match config.cookie_same_site {
            SameSitePolicy::Strict => SameSite::Strict,
            SameSitePolicy::None => SameSite::None,
            SameSitePolicy::Lax => SameSite::Lax,
        };

        Self {
            same_site,
            secure: config.cookie_secure,
            domain: config.cookie_domain.clone(),
            access_token_minutes: config.access_token_minutes,
        }
    }

    fn build(&self, value: String, max_age: actix_web::cookie::time::Duration) -> Cookie<'static> {
        let mut cookie = Cookie::new(SESSION_COOKIE_NAME, value);
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_secure(self.secure);
        cookie.set_same_site(self.same_site);
        cookie.set_max_age(max_age);
        if let Some(ref domain) = self.domain {
            cookie.set_domain(domain.clone());
        }
        cookie
    }

    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        self.build(
            token,
            i64::try_from(self.access_token_minutes)
                .ok()
                .and_then(|minutes| minutes.checked_mul(60))
                .map(actix_web::cookie::time::Duration::seconds)
                .unwrap_or(actix_web::cookie::time::Duration::MAX),
        )
    }

    pub fn expired_session_cookie(&self) -> Cookie<'static> {
        self.build(String::new(), actix_web::cookie::time::Duration::ZERO)
    }

    pub fn access_token_minutes(&self) -> u64 {
        self.access_token_minutes
    }
}
