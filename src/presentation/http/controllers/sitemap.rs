// src/presentation/http/controllers/sitemap.rs
use crate::application::queries::sitemap::XmlStream;
use crate::domain::branch::CatalogKind;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    body::Body,
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};

const XML_CONTENT_TYPE: &str = "application/xml";

/// A sub-sitemap addressable under the site root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapDocument {
    Static,
    Listing(CatalogKind),
    Page(CatalogKind, u32),
}

impl SitemapDocument {
    /// Parse `sitemap-static.xml`, `sitemap-banks.xml`, `sitemap-states.xml`,
    /// `sitemap-branches-{n}.xml` or `sitemap-cities-{n}.xml`.
    pub fn parse(name: &str) -> Option<Self> {
        let stem = name.strip_prefix("sitemap-")?.strip_suffix(".xml")?;
        match stem {
            "static" => Some(Self::Static),
            "banks" => Some(Self::Listing(CatalogKind::Banks)),
            "states" => Some(Self::Listing(CatalogKind::States)),
            _ => {
                let (kind, page) = stem.rsplit_once('-')?;
                let kind = match kind {
                    "branches" => CatalogKind::Branches,
                    "cities" => CatalogKind::Cities,
                    _ => return None,
                };
                if page.is_empty() || !page.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                Some(Self::Page(kind, page.parse().ok()?))
            }
        }
    }
}

fn xml_response(body: Body) -> Response {
    ([(header::CONTENT_TYPE, XML_CONTENT_TYPE)], body).into_response()
}

fn streamed(doc: XmlStream) -> Response {
    xml_response(Body::from_stream(doc))
}

pub async fn robots_txt(Extension(state): Extension<HttpState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.services.sitemap_queries.robots_txt(),
    )
        .into_response()
}

pub async fn sitemap_index(Extension(state): Extension<HttpState>) -> Response {
    let doc = state.services.sitemap_queries.render_index().await;
    xml_response(Body::from(doc))
}

pub async fn sitemap_document(
    Extension(state): Extension<HttpState>,
    Path(document): Path<String>,
) -> HttpResult<Response> {
    let sitemaps = &state.services.sitemap_queries;
    let doc = match SitemapDocument::parse(&document) {
        Some(SitemapDocument::Static) => sitemaps.stream_static(),
        Some(SitemapDocument::Listing(kind)) => sitemaps.stream_listing(kind).into_http()?,
        Some(SitemapDocument::Page(kind, page)) => {
            sitemaps.stream_page(kind, page).into_http()?
        }
        None => return Err(HttpError::not_found(format!("no such document: {document}"))),
    };
    Ok(streamed(doc))
}
