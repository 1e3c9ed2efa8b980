pub mod account_service;
pub mod link_service;

pub use account_service::{AccountService, Credentials};
pub use link_service::{CreateLinkRequest, LinkService};
