use crate::{Error, Result};
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";
pub const DEFAULT_QUERY: &str = r#""XR" OR "Extended Reality" OR "AR" OR "VR" AND "AI""#;
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_SORT_BY: &str = "publishedAt";
pub const MAX_ARTICLES: u32 = 20;

/// Search settings shared by every request. Built once at startup.
#[derive(Clone)]
pub struct NewsConfig {
    pub api_key: String,
    pub base_url: String,
    pub query: String,
    pub language: String,
    pub sort_by: String,
    pub page_size: u32,
}

impl NewsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            query: DEFAULT_QUERY.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            page_size: MAX_ARTICLES,
        }
    }

    /// Reads the process environment. `.env` is expected to be loaded already.
    pub fn from_env() -> Result<Self> {
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.log_keys();
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("NEWS_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("NEWS_API_KEY environment variable not set".to_string()))?;

        Ok(Self::new(api_key))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn log_keys(&self) {
        tracing::info!(
            api_key = %preview(&self.api_key),
            language = %self.language,
            page_size = self.page_size,
            "Config loaded"
        );
    }
}

impl fmt::Debug for NewsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsConfig")
            .field("api_key", &preview(&self.api_key))
            .field("base_url", &self.base_url)
            .field("query", &self.query)
            .field("language", &self.language)
            .field("sort_by", &self.sort_by)
            .field("page_size", &self.page_size)
            .finish()
    }
}

fn preview(val: &str) -> String {
    let head: String = val.chars().take(4).collect();
    format!("{}...({} chars)", head, val.chars().count())
}
