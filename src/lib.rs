//! tinylink - a small URL shortener service
//!
//! Signed-in users shorten URLs under random or custom slugs. Anyone
//! following a short link is redirected with `307 Temporary Redirect`, and
//! every redirect bumps the link's visit counter.
//!
//! # Features
//! - **server**: HTTP server mode (default)
//!
//! # Architecture
//! - `storage`: In-memory link and account stores
//! - `services`: Link creation and account logic
//! - `api`: HTTP handlers, JWT sessions and middleware
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging setup

pub mod api;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
