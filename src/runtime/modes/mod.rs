//! Mode routing
//!
//! Only the HTTP server mode exists today. It sits behind the `server`
//! feature so the library can be used without pulling in the runtime.

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "server")]
pub use server::run_server;
