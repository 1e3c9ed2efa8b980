//! Shared setup for the HTTP integration tests

#![allow(dead_code)]

use std::sync::{Arc, Once};

use actix_web::web;
use serde_json::Value;

use tinylink::api::jwt::JwtService;
use tinylink::api::services::{AppStartTime, configure_routes};
use tinylink::config::init_config;
use tinylink::config::LinksConfig;
use tinylink::services::{AccountService, LinkService};
use tinylink::storage::{RecordStore, UserStore};

static INIT: Once = Once::new();

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn init_static_config() {
    INIT.call_once(|| {
        init_config();
    });
}

/// One isolated set of stores and services per test
#[derive(Clone)]
pub struct TestState {
    pub records: Arc<RecordStore>,
    pub users: Arc<UserStore>,
    pub jwt: Arc<JwtService>,
    pub links: Arc<LinkService>,
    pub accounts: Arc<AccountService>,
}

impl TestState {
    pub fn new() -> Self {
        Self::with_links_config(LinksConfig::default())
    }

    pub fn with_links_config(links_config: LinksConfig) -> Self {
        init_static_config();

        let records = Arc::new(RecordStore::new());
        let users = Arc::new(UserStore::new());
        let jwt = Arc::new(JwtService::new(TEST_SECRET, 60));
        let links = Arc::new(LinkService::new(records.clone(), &links_config));
        let accounts = Arc::new(AccountService::new(users.clone(), jwt.clone()));

        Self {
            records,
            users,
            jwt,
            links,
            accounts,
        }
    }

    /// Registers app data and every route, as the server does
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.records.clone()))
            .app_data(web::Data::new(self.users.clone()))
            .app_data(web::Data::new(self.jwt.clone()))
            .app_data(web::Data::new(self.links.clone()))
            .app_data(web::Data::new(self.accounts.clone()))
            .app_data(web::Data::new(AppStartTime::now()));
        configure_routes(cfg);
    }

    /// Bearer token for a freshly registered user
    pub fn token_for(&self, username: &str) -> String {
        self.accounts
            .register(&tinylink::services::Credentials {
                username: username.to_string(),
                password: "correct-horse".to_string(),
            })
            .expect("registration should succeed")
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

pub fn code_of(body: &Value) -> i64 {
    body["code"].as_i64().expect("response should carry a code")
}
