use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Search API returned {status}: {message}")]
    SearchApi { status: u16, message: String },

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_api_display() {
        let err = Error::SearchApi {
            status: 401,
            message: "Your API key is invalid".to_string(),
        };
        assert_eq!(err.to_string(), "Search API returned 401: Your API key is invalid");
    }
}
