mod index;
mod pages;
mod service;
pub mod xml;

pub use pages::STATIC_PAGES;
pub use service::{SitemapQueryService, SitemapSettings};
pub use xml::XmlStream;
