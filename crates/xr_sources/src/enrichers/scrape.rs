use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use xr_core::{Error, RawArticle, Result};

use super::{utils, ContentEnricher};
use crate::search::USER_AGENT;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Downloads each article page and extracts its main text.
#[derive(Debug, Clone)]
pub struct ScrapeEnricher {
    client: Client,
}

impl ScrapeEnricher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    pub async fn scrape(&self, url: &str) -> Result<String> {
        let url = utils::parse_url(url)?;

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Extraction(format!("{} returned {}", url, status)));
        }
        let html = response.text().await?;

        let text = utils::extract_text(&html)
            .ok_or_else(|| Error::Extraction(format!("no readable text found at {}", url)))?;
        debug!(bytes = text.len(), "Extracted article text");
        Ok(text)
    }
}

#[async_trait]
impl ContentEnricher for ScrapeEnricher {
    fn name(&self) -> &str {
        "scrape"
    }

    #[instrument(level = "debug", skip_all, fields(url = %article.url))]
    async fn enrich(&self, article: &RawArticle) -> Option<String> {
        match self.scrape(&article.url).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(url = %article.url, error = %e, "Error parsing article");
                None
            }
        }
    }
}
