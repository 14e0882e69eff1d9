// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::branches::get_branch,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::BranchDto
        )
    ),
    tags(
        (name = "Branches", description = "IFSC branch lookup"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "IFSC Lookup API",
        description = "Resolve Indian bank branch IFSC codes to branch details",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Advertised servers: the public site origin followed by the local default.
struct ApiDocCustomizer;

const LOCAL_SERVER: &str = "http://localhost:8080";

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let site = env::var("SITE_BASE_URL").unwrap_or_default();

        let mut urls: Vec<&str> = Vec::with_capacity(2);
        for url in [site.trim().trim_end_matches('/'), LOCAL_SERVER] {
            if !url.is_empty() && !urls.contains(&url) {
                urls.push(url);
            }
        }

        openapi.servers = Some(urls.into_iter().map(Server::new).collect());
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
    Router::new().merge(swagger)
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let document = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
