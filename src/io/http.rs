use async_trait::async_trait;
use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::{Fetch, FetchError};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of attempts for timeouts and connection failures
pub const DEFAULT_MAX_RETRY: u32 = 10;

/// HTTP source downloading the whole archive with a single GET
pub struct HttpFetcher {
    client: Client,
    url: String,
    transferred_bytes: AtomicU64,
    max_retry: u32,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with the default timeout and retry budget
    pub fn new(url: String) -> Result<Self, FetchError> {
        Self::with_options(url, DEFAULT_TIMEOUT, DEFAULT_MAX_RETRY)
    }

    /// Create a new HTTP fetcher
    ///
    /// `max_retry` is the total number of attempts made when a request
    /// times out or fails to connect; it is clamped to at least one.
    pub fn with_options(url: String, timeout: Duration, max_retry: u32) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url,
            transferred_bytes: AtomicU64::new(0),
            max_retry: max_retry.max(1),
        })
    }

    /// Get total bytes transferred from network
    pub fn transferred_bytes(&self) -> u64 {
        self.transferred_bytes.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let mut retry_count = 0;

        loop {
            match self.client.get(&self.url).send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if !status.is_success() {
                        return Err(FetchError::Status {
                            url: self.url.clone(),
                            status,
                        });
                    }

                    let bytes = resp.bytes().await?;
                    self.transferred_bytes
                        .fetch_add(bytes.len() as u64, Ordering::Relaxed);
                    tracing::debug!(url = %self.url, bytes = bytes.len(), "downloaded archive");

                    return Ok(bytes.to_vec());
                }
                Err(e) if e.is_timeout() || e.is_connect() => {
                    retry_count += 1;
                    if retry_count >= self.max_retry {
                        return Err(FetchError::RetriesExceeded {
                            url: self.url.clone(),
                            attempts: retry_count,
                        });
                    }
                    tracing::warn!(
                        "Connection error, retry {}/{}: {}",
                        retry_count,
                        self.max_retry,
                        e
                    );
                    tokio::time::sleep(Duration::from_millis(500 * retry_count as u64)).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn source(&self) -> &str {
        &self.url
    }
}
