use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::api::jwt::JwtService;
use crate::config::get_config;
use crate::services::{AccountService, LinkService};
use crate::storage::{RecordStore, UserStore};

/// Shared state handed to every worker
pub struct StartupContext {
    pub records: Arc<RecordStore>,
    pub users: Arc<UserStore>,
    pub jwt: Arc<JwtService>,
    pub link_service: Arc<LinkService>,
    pub account_service: Arc<AccountService>,
}

/// 准备服务器启动的上下文
pub fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let config = get_config();
    if config.links.slug_length == 0 {
        anyhow::bail!("links.slug_length must be greater than 0");
    }
    if config.links.lifespan_days == 0 {
        anyhow::bail!("links.lifespan_days must be greater than 0");
    }

    let records = Arc::new(RecordStore::new());
    let users = Arc::new(UserStore::new());
    let jwt = Arc::new(JwtService::from_config(&config.auth));
    info!(
        "Session cookie: SameSite={}, secure={}",
        config.auth.cookie_same_site, config.auth.cookie_secure
    );

    let link_service = Arc::new(LinkService::new(records.clone(), &config.links));
    let account_service = Arc::new(AccountService::new(users.clone(), jwt.clone()));

    info!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        records,
        users,
        jwt,
        link_service,
        account_service,
    })
}
