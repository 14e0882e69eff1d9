// src/application/queries/sitemap/xml.rs
use bytes::Bytes;
use chrono::NaiveDate;
use futures::{StreamExt, stream::BoxStream};
use std::convert::Infallible;

use crate::domain::errors::DomainResult;

/// Streamed XML document body. Never fails at the transport level: store
/// errors are logged and the document is closed instead.
pub type XmlStream = BoxStream<'static, Result<Bytes, Infallible>>;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const URLSET_CLOSE: &str = "</urlset>\n";
pub const SITEMAPINDEX_CLOSE: &str = "</sitemapindex>\n";

/// Entries buffered before a chunk is handed to the response body.
const FLUSH_EVERY: usize = 256;

pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn urlset_open() -> String {
    format!("{XML_DECLARATION}\n<urlset xmlns=\"{SITEMAP_NS}\">\n")
}

pub fn sitemapindex_open() -> String {
    format!("{XML_DECLARATION}\n<sitemapindex xmlns=\"{SITEMAP_NS}\">\n")
}

pub fn push_url(doc: &mut String, loc: &str) {
    doc.push_str("  <url><loc>");
    doc.push_str(&xml_escape(loc));
    doc.push_str("</loc></url>\n");
}

pub fn push_sitemap(doc: &mut String, loc: &str, lastmod: NaiveDate) {
    doc.push_str("  <sitemap><loc>");
    doc.push_str(&xml_escape(loc));
    doc.push_str("</loc><lastmod>");
    doc.push_str(&lastmod.format("%Y-%m-%d").to_string());
    doc.push_str("</lastmod></sitemap>\n");
}

/// Wrap a lazy sequence of absolute URLs in a `<urlset>` document.
///
/// The closing tag is always emitted, even when `locations` ends with an
/// error; the error is logged and the remaining entries are dropped.
pub fn urlset_document(
    label: String,
    mut locations: BoxStream<'static, DomainResult<String>>,
) -> XmlStream {
    Box::pin(async_stream::stream! {
        yield Ok(Bytes::from(urlset_open()));

        let mut chunk = String::new();
        let mut pending = 0_usize;
        let mut written = 0_u64;
        while let Some(next) = locations.next().await {
            match next {
                Ok(loc) => {
                    push_url(&mut chunk, &loc);
                    pending += 1;
                    written += 1;
                    if pending == FLUSH_EVERY {
                        yield Ok(Bytes::from(std::mem::take(&mut chunk)));
                        pending = 0;
                    }
                }
                Err(err) => {
                    tracing::error!(sitemap = %label, error = %err, written, "sitemap stream interrupted");
                    break;
                }
            }
        }

        chunk.push_str(URLSET_CLOSE);
        yield Ok(Bytes::from(chunk));
        tracing::debug!(sitemap = %label, written, "sitemap streamed");
    })
}
