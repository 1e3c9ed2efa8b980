//! API 模块常量定义

/// Session token cookie 名称
pub const SESSION_COOKIE_NAME: &str = "tinylink_session";

/// Request ID header
pub const REQUEST_ID_HEADER: &str = "x-request-id";
