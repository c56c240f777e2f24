use scraper::{Html, Selector};
use serde_json::Value;

/// Extracts the `articleBody` from JSON-LD metadata in the HTML document.
/// Looks through plain objects, arrays and `@graph` collections.
pub fn extract_article_body(document: &Html) -> Option<String> {
    let script_selector = Selector::parse("script[type='application/ld+json']").ok()?;

    document.select(&script_selector).find_map(|script| {
        let raw = script.text().collect::<String>();
        serde_json::from_str::<Value>(raw.trim())
            .ok()
            .and_then(|json| find_article_body(&json))
    })
}

fn find_article_body(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items.iter().find_map(find_article_body),
        Value::Object(obj) => {
            if let Some(body) = obj.get("articleBody").and_then(|b| b.as_str()) {
                let body = body.trim();
                if !body.is_empty() {
                    return Some(body.to_string());
                }
            }
            obj.get("@graph").and_then(find_article_body)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_body_from_object() {
        let html = r#"
            <script type="application/ld+json">
                {"@type": "NewsArticle", "headline": "AI", "articleBody": "  Full text here.  "}
            </script>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(extract_article_body(&document).as_deref(), Some("Full text here."));
    }

    #[test]
    fn test_article_body_from_graph() {
        let html = r#"
            <script type="application/ld+json">{"@type": "Organization", "name": "TechWire"}</script>
            <script type="application/ld+json">
                {"@context": "https://schema.org", "@graph": [
                    {"@type": "WebPage"},
                    {"@type": "Article", "articleBody": "Graph body."}
                ]}
            </script>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(extract_article_body(&document).as_deref(), Some("Graph body."));
    }

    #[test]
    fn test_invalid_or_empty_json_ld() {
        let html = r#"
            <script type="application/ld+json">{ not json</script>
            <script type="application/ld+json">{"articleBody": "   "}</script>
        "#;
        let document = Html::parse_document(html);
        assert!(extract_article_body(&document).is_none());
    }
}
