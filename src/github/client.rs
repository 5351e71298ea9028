//! GitHub HTTP client for API interactions

use log::{debug, error};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{GhError, Result};

/// GitHub API client
pub struct GithubClient {
    client: Client,
    token: String,
    base_url: String,
}

impl GithubClient {
    /// Create a new GitHub client
    ///
    /// `base_url` is normally `https://api.github.com` but can point at a
    /// GitHub Enterprise Server instance or a mock server in tests.
    pub fn new(token: String, base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL for building API request URLs
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", api::ACCEPT)
            .header("User-Agent", api::USER_AGENT)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Fetch all pages from a paginated API endpoint, sequentially
    ///
    /// Issues a GET against `first_url`, then keeps following the
    /// `rel="next"` target of the `Link` response header until no next page
    /// is advertised. Items are accumulated in page order.
    ///
    /// Any non-success status is logged with its body and returned as
    /// `GhError::Api`; callers that tolerate specific responses (e.g. the
    /// SAML enforcement case) match on that variant.
    pub async fn fetch_all_pages<T>(&self, first_url: String, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut all_items = Vec::new();
        let mut next_url = Some(first_url);
        let mut page = 1u32;

        while let Some(url) = next_url.take() {
            debug!("Fetching page {} from: {}", page, url);

            let response = self.get(&url).send().await?;
            let status = response.status();

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                error!(
                    "Failed to fetch {}: {} - {}",
                    error_context,
                    status.as_u16(),
                    body
                );
                return Err(GhError::Api {
                    status: status.as_u16(),
                    body,
                });
            }

            next_url = response
                .headers()
                .get(reqwest::header::LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_next_link);

            let items: Vec<T> = response.json().await?;
            debug!("Page {} returned {} items", page, items.len());
            all_items.extend(items);
            page += 1;
        }

        debug!(
            "Fetched {} total items for {}",
            all_items.len(),
            error_context
        );
        Ok(all_items)
    }
}

/// Extract the `rel="next"` URL from a `Link` response header
///
/// The header is a comma-separated list of `<url>; rel="relation"` entries
/// (RFC 8288). Returns `None` when no next relation is present, which ends
/// pagination.
pub(crate) fn parse_next_link(header: &str) -> Option<String> {
    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let url_part = parts.next()?.trim();
        let is_next = parts
            .any(|param| matches!(param.trim(), r#"rel="next""# | "rel=next"));
        if is_next {
            return Some(
                url_part
                    .trim_start_matches('<')
                    .trim_end_matches('>')
                    .to_string(),
            );
        }
    }
    None
}

#[cfg(test)]
impl GithubClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url.to_string())
    }
}
