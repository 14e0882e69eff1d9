// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{branches, directory, sitemap},
    middleware::rate_limit::api_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{Extension, Router, http::Method, routing::get};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Assemble the full router. The rate limiter keys on the peer address, so
/// tests driving the router without connect info pass `false`.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let mut api = Router::new().route("/api/ifsc/{code}", get(branches::get_branch));
    if rate_limit {
        api = api.layer(api_rate_limit_layer());
    }

    Router::new()
        .merge(openapi::docs_router())
        .merge(api)
        .route("/health", get(health))
        .route("/", get(directory::home))
        .route("/ifsc/{code}", get(branches::branch_page))
        .route("/banks", get(directory::list_banks))
        .route("/bank/{bank}", get(directory::bank_page))
        .route("/bank/{bank}/{state}", get(directory::state_page))
        .route("/bank/{bank}/{state}/{city}", get(directory::city_page))
        .route("/robots.txt", get(sitemap::robots_txt))
        .route("/sitemap.xml", get(sitemap::sitemap_index))
        .route("/{document}", get(sitemap::sitemap_document))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
        message: "IFSC Lookup API is running".into(),
    })
}
