use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use xr_core::{RawArticle, Result};

pub mod jsonld;
pub mod scrape;
pub mod summary;

pub use scrape::ScrapeEnricher;
pub use summary::{SummaryEnricher, PLACEHOLDER};

#[async_trait]
pub trait ContentEnricher: Send + Sync {
    /// Returns the name of the enrichment strategy
    fn name(&self) -> &str;

    /// Returns the body text for an article, or `None` to drop it
    async fn enrich(&self, article: &RawArticle) -> Option<String>;
}

/// Which enrichment strategy the server runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrichMode {
    /// Reuse the summary fields from the search response.
    #[default]
    Summary,
    /// Download each article and extract its body text.
    Scrape,
}

impl FromStr for EnrichMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "scrape" => Ok(Self::Scrape),
            other => Err(format!("Invalid enrichment mode: {} (expected summary or scrape)", other)),
        }
    }
}

impl fmt::Display for EnrichMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summary => f.write_str("summary"),
            Self::Scrape => f.write_str("scrape"),
        }
    }
}

pub fn create_enricher(mode: EnrichMode, scrape_timeout: Duration) -> Result<Arc<dyn ContentEnricher>> {
    let enricher: Arc<dyn ContentEnricher> = match mode {
        EnrichMode::Summary => Arc::new(SummaryEnricher),
        EnrichMode::Scrape => Arc::new(ScrapeEnricher::new(scrape_timeout)?),
    };
    Ok(enricher)
}

/// Common utilities for enrichers
pub(crate) mod utils {
    use scraper::{ElementRef, Html, Selector};
    use url::Url;
    use xr_core::{Error, Result};

    use super::jsonld;

    const CONTAINER_SELECTORS: &[&str] = &[
        "[itemprop='articleBody']",
        "article",
        "main",
        ".post-content",
        ".entry-content",
        "#content",
    ];

    pub fn parse_url(url: &str) -> Result<Url> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(Error::InvalidUrl(format!("{}: unsupported scheme {}", url, scheme))),
        }
    }

    pub fn collapse_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Readable body text of an HTML page, or `None` if nothing usable was found.
    pub fn extract_text(html: &str) -> Option<String> {
        let document = Html::parse_document(html);

        if let Some(body) = jsonld::extract_article_body(&document) {
            return Some(body);
        }

        CONTAINER_SELECTORS
            .iter()
            .find_map(|selector| container_text(&document, selector))
            .or_else(|| join_paragraphs(document.root_element()))
    }

    /// Text of the richest element matching `selector`.
    fn container_text(document: &Html, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        document
            .select(&selector)
            .filter_map(join_paragraphs)
            .max_by_key(|text| text.len())
    }

    fn join_paragraphs(element: ElementRef<'_>) -> Option<String> {
        let paragraph = Selector::parse("p").ok()?;
        let paragraphs = element
            .select(&paragraph)
            .map(|p| collapse_whitespace(&p.text().collect::<String>()))
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>();

        if paragraphs.is_empty() {
            None
        } else {
            Some(paragraphs.join("\n\n"))
        }
    }
}
