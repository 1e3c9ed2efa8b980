pub mod models;
pub mod record_store;
pub mod user_store;

pub use models::{DEFAULT_LIFESPAN_DAYS, UrlRecord, UserAccount};
pub use record_store::RecordStore;
pub use user_store::UserStore;
