//! Fragment fetching.
//!
//! [`Fetcher`] is the router's view of the network: a GET for a mapped URL,
//! resolving to the response body as text. [`HttpFetcher`] is the provided
//! implementation over a shared [`reqwest::Client`].
use crate::errors::FetchError;

/// Fetches a fragment URL and returns its body as text.
///
/// Success means an HTTP 2xx response whose body could be read; anything
/// else is a [`FetchError`]. Implementations suspend at the request and at
/// the body read, which is what lets a newer navigation start while an
/// older one is still in flight.
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP implementation of [`Fetcher`].
///
/// Route tables usually carry relative URLs (`pages/page-faq.html`); in the
/// original deployment the document base resolved them. Outside a document
/// there is none, so an explicit base URL can be configured instead.
pub struct HttpFetcher {
    client: reqwest::Client,
    base: Option<String>,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self { client: reqwest::Client::new(), base: None }
    }

    /// A fetcher resolving relative URLs against `base`.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), base: Some(base.into()) }
    }

    fn absolute(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }

        match &self.base {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/')),
            None => url.to_string(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let url = self.absolute(url);

        let response = self.client.get(&url).send().await.map_err(|source| {
            FetchError::Transport { url: url.clone(), source: Box::new(source) }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status: status.as_u16() });
        }

        response
            .text()
            .await
            .map_err(|source| FetchError::Transport { url, source: Box::new(source) })
    }
}

#[cfg(test)]
mod tests {
    use super::HttpFetcher;

    #[test]
    fn test_absolute_joins_relative_url_with_base() {
        let fetcher = HttpFetcher::with_base("http://localhost:8080/");
        assert_eq!(
            fetcher.absolute("pages/page-faq.html"),
            "http://localhost:8080/pages/page-faq.html"
        );
    }

    #[test]
    fn test_absolute_keeps_absolute_url() {
        let fetcher = HttpFetcher::with_base("http://localhost:8080");
        assert_eq!(
            fetcher.absolute("https://example.org/pages/page-faq.html"),
            "https://example.org/pages/page-faq.html"
        );
    }

    #[test]
    fn test_absolute_without_base_is_passthrough() {
        let fetcher = HttpFetcher::new();
        assert_eq!(fetcher.absolute("pages/page-faq.html"), "pages/page-faq.html");
    }
}
