pub mod auth;
pub mod request_id;

pub use auth::{AuthenticatedUser, UserAuth, authenticate, extract_token};
pub use request_id::{RequestId, RequestIdMiddleware};
