use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of the `/articles` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub source: String,
    pub url: String,
    pub date: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Article summary as returned by the search API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub source: RawSource,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: String,
    pub content: Option<String>,
}

impl RawArticle {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn source_name(&self) -> &str {
        self.source.name.as_deref().unwrap_or_default()
    }

    /// The `YYYY-MM-DD` prefix of `publishedAt`, if it is a real date.
    pub fn published_date(&self) -> Option<&str> {
        let prefix = self.published_at.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()?;
        Some(prefix)
    }

    pub fn into_record(self, content: String) -> Option<ArticleRecord> {
        let date = self.published_date()?.to_string();
        Some(ArticleRecord {
            title: self.title.unwrap_or_default(),
            source: self.source.name.unwrap_or_default(),
            url: self.url,
            date,
            content,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

/// Error envelope the search API sends with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub status: String,
    pub code: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(published_at: &str) -> RawArticle {
        RawArticle {
            source: RawSource {
                id: None,
                name: Some("TechWire".to_string()),
            },
            title: Some("AI headsets surge".to_string()),
            url: "http://example.com/a".to_string(),
            published_at: published_at.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_published_date_truncates_timestamp() {
        assert_eq!(raw("2024-03-05T10:00:00Z").published_date(), Some("2024-03-05"));
        assert_eq!(raw("2024-03-05T23:59:59+05:00").published_date(), Some("2024-03-05"));
    }

    #[test]
    fn test_published_date_rejects_garbage() {
        assert_eq!(raw("").published_date(), None);
        assert_eq!(raw("2024-3-5").published_date(), None);
        assert_eq!(raw("yesterday at noon").published_date(), None);
    }

    #[test]
    fn test_into_record() {
        let record = raw("2024-03-05T10:00:00Z")
            .into_record("Short summary".to_string())
            .unwrap();
        assert_eq!(record.date.len(), 10);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"title":"AI headsets surge","source":"TechWire","url":"http://example.com/a","date":"2024-03-05","content":"Short summary"}"#
        );
    }

    #[test]
    fn test_deserialize_search_response() {
        let body = r#"{
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": {"id": null, "name": "TechWire"},
                "author": null,
                "title": "AI headsets surge",
                "description": "Short summary",
                "url": "http://example.com/a",
                "urlToImage": null,
                "publishedAt": "2024-03-05T10:00:00Z",
                "content": null
            }]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_results, 1);
        let article = &response.articles[0];
        assert_eq!(article.source_name(), "TechWire");
        assert_eq!(article.description.as_deref(), Some("Short summary"));
        assert!(article.content.is_none());
    }
}
