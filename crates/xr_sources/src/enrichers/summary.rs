use async_trait::async_trait;
use xr_core::RawArticle;

use super::ContentEnricher;

pub const PLACEHOLDER: &str = "No summary available";

/// Uses the search API's own summary text. Never drops an article.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryEnricher;

impl SummaryEnricher {
    pub fn pick(article: &RawArticle) -> String {
        [article.description.as_deref(), article.content.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
            .unwrap_or(PLACEHOLDER)
            .to_string()
    }
}

#[async_trait]
impl ContentEnricher for SummaryEnricher {
    fn name(&self) -> &str {
        "summary"
    }

    async fn enrich(&self, article: &RawArticle) -> Option<String> {
        Some(Self::pick(article))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(description: Option<&str>, content: Option<&str>) -> RawArticle {
        RawArticle {
            description: description.map(str::to_string),
            content: content.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_prefers_description() {
        let a = article(Some("Short summary"), Some("Longer content [+1200 chars]"));
        assert_eq!(SummaryEnricher::pick(&a), "Short summary");
    }

    #[test]
    fn test_falls_back_to_content() {
        assert_eq!(SummaryEnricher::pick(&article(None, Some("Body"))), "Body");
        assert_eq!(SummaryEnricher::pick(&article(Some("  "), Some("Body"))), "Body");
    }

    #[test]
    fn test_keeps_original_text() {
        let a = article(Some("  Short summary\n"), None);
        assert_eq!(SummaryEnricher::pick(&a), "  Short summary\n");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(SummaryEnricher::pick(&article(None, None)), PLACEHOLDER);
        assert_eq!(SummaryEnricher::pick(&article(Some(""), Some("\n"))), PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_enrich_never_drops() {
        let enriched = SummaryEnricher.enrich(&article(None, None)).await;
        assert_eq!(enriched.as_deref(), Some(PLACEHOLDER));
    }
}
