use super::{
    SitemapQueryService,
    xml::{SITEMAPINDEX_CLOSE, push_sitemap, sitemapindex_open},
};
use crate::domain::branch::CatalogKind;

impl SitemapQueryService {
    /// Render `/sitemap.xml`.
    ///
    /// Each paginated kind is counted once. A failed count is logged and that
    /// kind's pages are left out; the document is still closed.
    pub async fn render_index(&self) -> String {
        let lastmod = self.clock.today();
        let mut doc = sitemapindex_open();

        for name in ["static", "banks", "states"] {
            push_sitemap(
                &mut doc,
                &self.absolute(&format!("/sitemap-{name}.xml")),
                lastmod,
            );
        }

        for kind in CatalogKind::PAGINATED {
            match self.page_count(kind).await {
                Ok(pages) => {
                    for page in 1..=pages {
                        push_sitemap(
                            &mut doc,
                            &self.absolute(&format!("/sitemap-{kind}-{page}.xml")),
                            lastmod,
                        );
                    }
                }
                Err(err) => {
                    tracing::error!(kind = %kind, error = %err, "failed to count sitemap entries");
                }
            }
        }

        doc.push_str(SITEMAPINDEX_CLOSE);
        doc
    }
}
