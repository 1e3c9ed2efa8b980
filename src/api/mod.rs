//! HTTP layer: token service, middleware and route handlers

pub mod constants;
pub mod jwt;
pub mod middleware;
pub mod services;
