use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TinylinkError {
    InvalidInput(String),
    Validation(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    PasswordHash(String),
    Token(String),
    Serialization(String),
    FileOperation(String),
    Config(String),
}

impl TinylinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            TinylinkError::InvalidInput(_) => "E001",
            TinylinkError::Validation(_) => "E002",
            TinylinkError::NotFound(_) => "E003",
            TinylinkError::Conflict(_) => "E004",
            TinylinkError::Unauthorized(_) => "E005",
            TinylinkError::PasswordHash(_) => "E006",
            TinylinkError::Token(_) => "E007",
            TinylinkError::Serialization(_) => "E008",
            TinylinkError::FileOperation(_) => "E009",
            TinylinkError::Config(_) => "E010",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            TinylinkError::InvalidInput(_) => "Invalid Input",
            TinylinkError::Validation(_) => "Validation Error",
            TinylinkError::NotFound(_) => "Resource Not Found",
            TinylinkError::Conflict(_) => "Resource Conflict",
            TinylinkError::Unauthorized(_) => "Unauthorized",
            TinylinkError::PasswordHash(_) => "Password Hash Error",
            TinylinkError::Token(_) => "Token Error",
            TinylinkError::Serialization(_) => "Serialization Error",
            TinylinkError::FileOperation(_) => "File Operation Error",
            TinylinkError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            TinylinkError::InvalidInput(msg)
            | TinylinkError::Validation(msg)
            | TinylinkError::NotFound(msg)
            | TinylinkError::Conflict(msg)
            | TinylinkError::Unauthorized(msg)
            | TinylinkError::PasswordHash(msg)
            | TinylinkError::Token(msg)
            | TinylinkError::Serialization(msg)
            | TinylinkError::FileOperation(msg)
            | TinylinkError::Config(msg) => msg,
        }
    }

    /// HTTP status used when this error reaches an HTTP handler
    pub fn http_status(&self) -> StatusCode {
        match self {
            TinylinkError::InvalidInput(_) | TinylinkError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            TinylinkError::NotFound(_) => StatusCode::NOT_FOUND,
            TinylinkError::Conflict(_) => StatusCode::CONFLICT,
            TinylinkError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            TinylinkError::PasswordHash(_)
            | TinylinkError::Token(_)
            | TinylinkError::Serialization(_)
            | TinylinkError::FileOperation(_)
            | TinylinkError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（启动失败时打印到终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TinylinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TinylinkError {}

// 便捷的构造函数
impl TinylinkError {
    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        TinylinkError::InvalidInput(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        TinylinkError::NotFound(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Conflict(msg.into())
    }

    pub fn unauthorized<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Unauthorized(msg.into())
    }

    pub fn password_hash<T: Into<String>>(msg: T) -> Self {
        TinylinkError::PasswordHash(msg.into())
    }

    pub fn token<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Token(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        TinylinkError::FileOperation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Config(msg.into())
    }
}

impl From<std::io::Error> for TinylinkError {
    fn from(err: std::io::Error) -> Self {
        TinylinkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TinylinkError {
    fn from(err: serde_json::Error) -> Self {
        TinylinkError::Serialization(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for TinylinkError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        TinylinkError::Token(err.to_string())
    }
}

impl From<crate::utils::password::PasswordError> for TinylinkError {
    fn from(err: crate::utils::password::PasswordError) -> Self {
        TinylinkError::PasswordHash(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TinylinkError>;
