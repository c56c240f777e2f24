use std::sync::Arc;
use tracing::{debug, info, warn};
use xr_core::{ArticleRecord, DateWindow, Result};

use crate::enrichers::ContentEnricher;
use crate::search::ArticleSource;

/// Runs one fetch-and-enrich pass over the search results.
#[derive(Clone)]
pub struct ArticleManager {
    source: Arc<dyn ArticleSource>,
    enricher: Arc<dyn ContentEnricher>,
    max_articles: usize,
}

impl ArticleManager {
    pub fn new(
        source: Arc<dyn ArticleSource>,
        enricher: Arc<dyn ContentEnricher>,
        max_articles: usize,
    ) -> Self {
        Self {
            source,
            enricher,
            max_articles,
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn enricher_name(&self) -> &str {
        self.enricher.name()
    }

    /// Fetches the window's articles and enriches them one at a time.
    /// Articles the enricher rejects are left out of the result.
    pub async fn collect(&self, window: &DateWindow) -> Result<Vec<ArticleRecord>> {
        let raw_articles = self.source.fetch_articles(window).await?;
        let fetched = raw_articles.len();
        let mut output = Vec::with_capacity(fetched.min(self.max_articles));

        for article in raw_articles.into_iter().take(self.max_articles) {
            if article.published_date().is_none() {
                warn!(
                    url = %article.url,
                    published_at = %article.published_at,
                    "Skipping article with malformed publish date"
                );
                continue;
            }

            let Some(content) = self.enricher.enrich(&article).await else {
                debug!(url = %article.url, "Dropping article without content");
                continue;
            };

            if let Some(record) = article.into_record(content) {
                info!("📰 {} ({})", record.title, record.source);
                output.push(record);
            }
        }

        info!(
            fetched,
            kept = output.len(),
            enricher = self.enricher.name(),
            "Collected articles"
        );
        Ok(output)
    }
}
