pub mod config;
pub mod error;
pub mod types;
pub mod window;

pub use config::NewsConfig;
pub use error::{Error, Result};
pub use types::{ApiErrorBody, ArticleRecord, RawArticle, RawSource, SearchResponse};
pub use window::DateWindow;
