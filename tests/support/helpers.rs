// tests/support/helpers.rs
use super::builders::sample_rows;
use super::mocks;
use axum::body;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use ifsc_directory::application::ports::{ClockPort, SlugGeneratorPort};
use ifsc_directory::application::queries::sitemap::SitemapSettings;
use ifsc_directory::application::services::ApplicationServices;
use ifsc_directory::domain::branch::BranchCatalog;
use ifsc_directory::infrastructure::util::DefaultSlugGenerator;
use ifsc_directory::presentation::http::state::HttpState;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TEST_BASE_URL: &str = "https://ifsclookup.test";

pub fn build_services(catalog: Arc<dyn BranchCatalog>, page_size: u32) -> ApplicationServices {
    let clock: Arc<ClockPort> = Arc::new(mocks::DummyClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    ApplicationServices::new(
        catalog,
        clock,
        slugger,
        SitemapSettings {
            base_url: TEST_BASE_URL.to_string(),
            page_size,
        },
    )
}

pub fn build_test_state_with(catalog: Arc<dyn BranchCatalog>, page_size: u32) -> HttpState {
    HttpState {
        services: Arc::new(build_services(catalog, page_size)),
        site_base_url: Arc::from(TEST_BASE_URL),
    }
}

pub async fn build_test_state() -> HttpState {
    let catalog: Arc<dyn BranchCatalog> = Arc::new(mocks::InMemoryCatalog::new(sample_rows()));
    build_test_state_with(catalog, 10_000)
}

pub async fn make_test_router() -> axum::Router {
    let state = build_test_state().await;
    ifsc_directory::presentation::http::routes::build_router_with_rate_limiter(state, false)
}

/// 任意のカタログとページサイズでテストルーターを構築する
pub fn make_test_router_with(catalog: Arc<dyn BranchCatalog>, page_size: u32) -> axum::Router {
    let state = build_test_state_with(catalog, page_size);
    ifsc_directory::presentation::http::routes::build_router_with_rate_limiter(state, false)
}

pub async fn get(app: axum::Router, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

pub async fn get_with_accept(app: axum::Router, uri: &str, accept: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("accept", accept)
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

pub async fn body_text(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 16 * 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn content_type(resp: &Response) -> String {
    resp.headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = content_type(&resp);
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.expect("read body");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

/// `<loc>` 要素の中身を出現順に取り出す
pub fn locs(xml: &str) -> Vec<String> {
    xml.split("<loc>")
        .skip(1)
        .filter_map(|rest| rest.split_once("</loc>").map(|(loc, _)| loc.to_string()))
        .collect()
}
