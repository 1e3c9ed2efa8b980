//! Server mode
//!
//! Builds the shared state, wires every route and runs the HTTP server
//! until it stops or Ctrl+C arrives.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::middleware::RequestIdMiddleware;
use crate::api::services::{AppStartTime, configure_routes};
use crate::config::get_config;
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// **Note**: Logging and configuration must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime::now();

    let startup = lifetime::startup::prepare_server_startup().map_err(|e| {
        tracing::error!("Server startup failed: {}", e);
        e
    })?;

    let records = startup.records.clone();
    let users = startup.users.clone();
    let jwt = startup.jwt.clone();
    let link_service = startup.link_service.clone();
    let account_service = startup.account_service.clone();

    let config = get_config();
    let cpu_count = config.server.cpu_count.clamp(1, 32);
    info!("Using {} CPU cores for the server", cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(Compress::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .app_data(web::Data::new(records.clone()))
            .app_data(web::Data::new(users.clone()))
            .app_data(web::Data::new(jwt.clone()))
            .app_data(web::Data::new(link_service.clone()))
            .app_data(web::Data::new(account_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::JsonConfig::default().limit(64 * 1024))
            .configure(configure_routes)
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .workers(cpu_count)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    warn!("Starting server at http://{}", bind_address);

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(&startup.records, &startup.users) => {
            warn!("Graceful shutdown complete");
        }
    }

    Ok(())
}
