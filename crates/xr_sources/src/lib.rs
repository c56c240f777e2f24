pub mod enrichers;
pub mod manager;
pub mod search;

pub use enrichers::{create_enricher, ContentEnricher, EnrichMode};
pub use manager::ArticleManager;
pub use search::{ArticleSource, NewsApiClient};
