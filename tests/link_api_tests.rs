//! Link API tests: creation, listing and ownership

mod common;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::App;
use serde_json::{Value, json};

use common::{TestState, bearer, code_of};
use tinylink::config::LinksConfig;

#[actix_rt::test]
async fn test_create_requires_authentication() {
    let state = TestState::new();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = TestRequest::post()
        .uri("/api/links")
        .set_json(json!({"target": "https://example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(code_of(&body), 1001);
    assert!(state.records.is_empty());
}

#[actix_rt::test]
async fn test_create_with_generated_slug() {
    let state = TestState::new();
    let token = state.token_for("alice");
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = TestRequest::post()
        .uri("/api/links")
        .insert_header(bearer(&token))
        .set_json(json!({"target": "  https://example.com/page  "}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(code_of(&body), 0);
    let slug = body["data"]["slug"].as_str().unwrap();
    assert_eq!(slug.len(), 6);
    assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["data"]["short_path"], format!("/{}", slug));
    assert_eq!(body["data"]["original_url"], "https://example.com/page");
    assert_eq!(body["data"]["owner"], "alice");
    assert_eq!(body["data"]["visits"], 0);

    let stored = state.records.get(slug).unwrap();
    assert_eq!(stored.owner, "alice");
}

#[actix_rt::test]
async fn test_create_with_custom_slug_then_redirect() {
    let state = TestState::new();
    let token = state.token_for("alice");
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = TestRequest::post()
        .uri("/api/links")
        .insert_header(bearer(&token))
        .set_json(json!({"target": "https://www.rust-lang.org", "slug": "rust"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = TestRequest::get().uri("/rust").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get("Location").unwrap(),
        "https://www.rust-lang.org"
    );
}

#[actix_rt::test]
async fn test_duplicate_custom_slug_is_conflict() {
    let state = TestState::new();
    let alice = state.token_for("alice");
    let bob = state.token_for("bob");
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let first = TestRequest::post()
        .uri("/api/links")
        .insert_header(bearer(&alice))
        .set_json(json!({"target": "https://a.example", "slug": "shared"}))
        .to_request();
    assert_eq!(test::call_service(&app, first).await.status(), StatusCode::OK);

    let second = TestRequest::post()
        .uri("/api/links")
        .insert_header(bearer(&bob))
        .set_json(json!({"target": "https://b.example", "slug": "shared"}))
        .to_request();
    let resp = test::call_service(&app, second).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(code_of(&body), 3001);
    assert_eq!(state.records.get("shared").unwrap().owner, "alice");
}

#[actix_rt::test]
async fn test_invalid_target_and_slug_are_rejected() {
    let state = TestState::new();
    let token = state.token_for("alice");
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let bodies = [
        json!({"target": "javascript:alert(1)"}),
        json!({"target": "ftp://example.com/file"}),
        json!({"target": "not a url"}),
        json!({"target": "https://example.com", "slug": "has space"}),
        json!({"target": "https://example.com", "slug": "a/b"}),
    ];
    for body in bodies {
        let req = TestRequest::post()
            .uri("/api/links")
            .insert_header(bearer(&token))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);
    }
    assert!(state.records.is_empty());
}

#[actix_rt::test]
async fn test_list_only_returns_own_links() {
    let state = TestState::new();
    let alice = state.token_for("alice");
    let bob = state.token_for("bob");
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    for (token, slug) in [(&alice, "a1"), (&alice, "a2"), (&bob, "b1")] {
        let req = TestRequest::post()
            .uri("/api/links")
            .insert_header(bearer(token))
            .set_json(json!({"target": "https://example.com", "slug": slug}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = TestRequest::get()
        .uri("/api/links")
        .insert_header(bearer(&alice))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let mut slugs: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["slug"].as_str().unwrap())
        .collect();
    slugs.sort();
    assert_eq!(slugs, vec!["a1", "a2"]);
}

#[actix_rt::test]
async fn test_get_link_hides_other_owners() {
    let state = TestState::new();
    let alice = state.token_for("alice");
    let bob = state.token_for("bob");
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = TestRequest::post()
        .uri("/api/links")
        .insert_header(bearer(&alice))
        .set_json(json!({"target": "https://example.com", "slug": "mine"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = TestRequest::get()
        .uri("/api/links/mine")
        .insert_header(bearer(&alice))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["slug"], "mine");

    let req = TestRequest::get()
        .uri("/api/links/mine")
        .insert_header(bearer(&bob))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(code_of(&body), 3000);
}

#[actix_rt::test]
async fn test_dashboard_lists_visits() {
    let state = TestState::new();
    let token = state.token_for("alice");
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = TestRequest::post()
        .uri("/api/links")
        .insert_header(bearer(&token))
        .set_json(json!({"target": "https://example.com", "slug": "dash"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    for _ in 0..2 {
        let req = TestRequest::get().uri("/dash").to_request();
        test::call_service(&app, req).await;
    }

    let req = TestRequest::get()
        .uri("/dashboard")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["links"][0]["slug"], "dash");
    assert_eq!(body["data"]["links"][0]["visits"], 2);
}

#[actix_rt::test]
async fn test_reserved_route_slug_is_rejected() {
    let state = TestState::new();
    let token = state.token_for("alice");
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    for slug in ["login", "register", "dashboard", "health", "auth", "api"] {
        let req = TestRequest::post()
            .uri("/api/links")
            .insert_header(bearer(&token))
            .set_json(json!({"target": "https://example.com", "slug": slug}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "slug: {}", slug);
    }
    assert!(state.records.is_empty());

    // The page keeps answering on its own path
    let req = TestRequest::get().uri("/login").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_created_link_carries_configured_lifespan() {
    let state = TestState::with_links_config(LinksConfig {
        lifespan_days: 7,
        ..LinksConfig::default()
    });
    let token = state.token_for("alice");
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = TestRequest::post()
        .uri("/api/links")
        .insert_header(bearer(&token))
        .set_json(json!({"target": "https://example.com", "slug": "span"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let created: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(body["data"]["created_at"].clone()).unwrap();
    let expires: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(body["data"]["expires_at"].clone()).unwrap();
    assert_eq!(expires - created, chrono::Duration::days(7));
}
