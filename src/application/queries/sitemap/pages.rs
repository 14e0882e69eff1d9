use super::{
    SitemapQueryService,
    xml::{XmlStream, urlset_document},
};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        branch::{CatalogKind, PageWindow, page_count},
        errors::DomainResult,
    },
};
use futures::{StreamExt, stream};

/// Site-relative paths of the pages that exist independently of the catalog.
pub const STATIC_PAGES: [&str; 2] = ["/", "/banks"];

impl SitemapQueryService {
    /// Number of `page_size` pages needed to cover every entry of `kind`.
    pub async fn page_count(&self, kind: CatalogKind) -> ApplicationResult<u64> {
        ensure_paginated(kind)?;
        let total = self.catalog.count(kind).await?;
        Ok(page_count(total, self.settings.page_size))
    }

    /// One page of a paginated sitemap. Pages start at 1; a page past the
    /// end is an empty, well-formed `<urlset>`.
    pub fn stream_page(&self, kind: CatalogKind, page: u32) -> ApplicationResult<XmlStream> {
        ensure_paginated(kind)?;
        let window = PageWindow::for_page(page, self.settings.page_size)
            .map_err(|_| ApplicationError::not_found(format!("sitemap page {page} not found")))?;

        Ok(urlset_document(
            format!("{kind}-{page}"),
            self.entries(kind, Some(window)),
        ))
    }

    /// Every bank page (`Banks`) or every bank+state page (`States`).
    pub fn stream_listing(&self, kind: CatalogKind) -> ApplicationResult<XmlStream> {
        if kind.is_paginated() {
            return Err(ApplicationError::validation(format!(
                "{kind} sitemap is paginated"
            )));
        }
        Ok(urlset_document(kind.to_string(), self.entries(kind, None)))
    }

    pub fn stream_static(&self) -> XmlStream {
        let locations: Vec<DomainResult<String>> = STATIC_PAGES
            .iter()
            .map(|path| Ok(self.absolute(path)))
            .collect();
        urlset_document("static".into(), stream::iter(locations).boxed())
    }

    pub fn robots_txt(&self) -> String {
        format!(
            "User-agent: *\nAllow: /\n\nSitemap: {}\n",
            self.absolute("/sitemap.xml")
        )
    }
}

fn ensure_paginated(kind: CatalogKind) -> ApplicationResult<()> {
    if kind.is_paginated() {
        Ok(())
    } else {
        Err(ApplicationError::validation(format!(
            "{kind} sitemap is not paginated"
        )))
    }
}
