use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use xr_core::{ApiErrorBody, DateWindow, Error, NewsConfig, RawArticle, Result, SearchResponse};

pub const USER_AGENT: &str = concat!("xrnews/", env!("CARGO_PKG_VERSION"));

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Returns the name of the search backend
    fn name(&self) -> &str;

    /// Fetches one page of article summaries published inside `window`
    async fn fetch_articles(&self, window: &DateWindow) -> Result<Vec<RawArticle>>;
}

/// Client for the NewsAPI `/v2/everything` endpoint.
pub struct NewsApiClient {
    client: Client,
    config: Arc<NewsConfig>,
}

impl NewsApiClient {
    pub fn new(config: Arc<NewsConfig>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/v2/everything", self.config.base_url)
    }

    fn query_params(&self, window: &DateWindow) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.config.query.clone()),
            ("from", window.from_param()),
            ("to", window.to_param()),
            ("sortBy", self.config.sort_by.clone()),
            ("language", self.config.language.clone()),
            ("pageSize", self.config.page_size.to_string()),
            ("apiKey", self.config.api_key.clone()),
        ]
    }
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl ArticleSource for NewsApiClient {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn fetch_articles(&self, window: &DateWindow) -> Result<Vec<RawArticle>> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&self.query_params(window))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|err| err.message)
                .unwrap_or(body);
            return Err(Error::SearchApi {
                status: status.as_u16(),
                message,
            });
        }

        let payload = response.json::<SearchResponse>().await?;
        if payload.status != "ok" {
            return Err(Error::SearchApi {
                status: status.as_u16(),
                message: format!("unexpected response status '{}'", payload.status),
            });
        }

        debug!(
            total_results = payload.total_results,
            returned = payload.articles.len(),
            "Search API responded"
        );
        Ok(payload.articles)
    }
}
