//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::TinylinkError;

/// API 错误码枚举
///
/// 按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 2000-2099: 认证/账户错误
/// - 3000-3099: 链接错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    Unauthorized = 1001,
    NotFound = 1004,
    InternalServerError = 1005,

    AuthFailed = 2000,
    UsernameTaken = 2001,
    InvalidCredentials = 2002,

    LinkNotFound = 3000,
    LinkAlreadyExists = 3001,
    LinkInvalidInput = 3002,
}

impl From<&TinylinkError> for ErrorCode {
    fn from(err: &TinylinkError) -> Self {
        match err {
            TinylinkError::InvalidInput(_) => ErrorCode::LinkInvalidInput,
            TinylinkError::Validation(_) => ErrorCode::BadRequest,
            TinylinkError::NotFound(_) => ErrorCode::NotFound,
            TinylinkError::Conflict(_) => ErrorCode::LinkAlreadyExists,
            TinylinkError::Unauthorized(_) => ErrorCode::AuthFailed,
            TinylinkError::PasswordHash(_)
            | TinylinkError::Token(_)
            | TinylinkError::Serialization(_)
            | TinylinkError::FileOperation(_)
            | TinylinkError::Config(_) => ErrorCode::InternalServerError,
        }
    }
}
