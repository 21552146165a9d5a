use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// The raw payload retrieved from a source. Owned by the fetcher until it
/// is handed to the tokenizer; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText(Vec<u8>);

impl RawText {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (connect failure, timeout).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    /// The response body could not be read.
    #[error("failed to read body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// A source of raw document text. Implemented by `HttpSource` in
/// production and by canned sources in tests.
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<RawText, FetchError>;
}

/// HTTP implementation backed by a shared `reqwest::Client`.
pub struct HttpSource {
    client: reqwest::Client,
    timeout: Duration,
    attempts: usize,
}

impl HttpSource {
    pub fn new(timeout: Duration, attempts: usize) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
            attempts: attempts.max(1),
        }
    }

    /// Sends the GET with bounded retries for transport errors. A response
    /// with any status counts as success here; status handling is the
    /// caller's job. Retries back off exponentially with jitter.
    async fn get_with_retry(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let mut delay_ms = 150u64;
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.client.get(url).timeout(self.timeout).send().await {
                Ok(response) => return Ok(response),
                Err(e) if attempt < self.attempts => {
                    tracing::warn!(
                        "Fetch attempt {}/{} for {} failed: {}",
                        attempt,
                        self.attempts,
                        url,
                        e
                    );
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
                Err(e) => {
                    return Err(FetchError::Request {
                        url: url.to_string(),
                        source: e,
                    });
                }
            }
        }
    }
}

#[async_trait]
impl TextSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<RawText, FetchError> {
        let response = self.get_with_retry(url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        tracing::debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(RawText::new(body.to_vec()))
    }
}
