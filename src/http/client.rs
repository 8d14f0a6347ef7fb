//! HEAD-request URL checker.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::status::UrlStatus;

/// Redirect hops followed before a URL is reported as a network error.
pub const MAX_REDIRECTS: usize = 10;

/// Probes a URL for reachability.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckUrl: Send + Sync {
    async fn check_url(&self, url: &str) -> UrlStatus;
}

/// [`CheckUrl`] over a shared reqwest client. Timeout and redirect policy
/// come from how the client was built. Failed requests are not retried.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a URL checker wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CheckUrl for HttpClient {
    #[tracing::instrument(skip(self))]
    async fn check_url(&self, url: &str) -> UrlStatus {
        debug!("HEAD {}...", url);

        let status = match self.client.head(url).send().await {
            Ok(response) => UrlStatus::from_status(response.status()),
            Err(e) => UrlStatus::from_error(&e),
        };

        debug!("HEAD {} -> {:?}", url, status);
        status
    }
}
