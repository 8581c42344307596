// Shared HTTP client for the Roblox public APIs.
//
// A thin reqwest wrapper with a bounded per-request timeout, a fixed
// identifying User-Agent, and a retry loop: transient upstream statuses
// (429 and the common 5xx gateway codes) are retried with exponential
// backoff plus jitter, capped at a small attempt count. One client is
// built per process and shared by every fetcher.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Identifying request header sent with every call.
pub const USER_AGENT: &str = "muster/0.1 (roblox-user-verifier)";

/// Maximum number of retry attempts after the initial request.
const MAX_RETRIES: u32 = 2;

/// Base delay for exponential backoff (doubles each retry).
const BASE_BACKOFF: Duration = Duration::from_millis(300);

/// Maximum backoff delay to cap exponential growth.
const MAX_BACKOFF: Duration = Duration::from_secs(8);

/// Statuses worth retrying: rate limiting and transient gateway failures.
fn is_retryable(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}

/// HTTP client shared across all Roblox API fetchers.
pub struct RobloxClient {
    client: reqwest::Client,
}

impl RobloxClient {
    /// Build the client with the configured per-request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// GET a JSON endpoint with query parameters and deserialize the response.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!(url = url, "GET request");
        let response = self
            .send_with_retry(|| self.client.get(url).query(query))
            .await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize response from {url}"))
    }

    /// POST a JSON body and deserialize the response.
    pub async fn post_json<T: DeserializeOwned>(&self, url: &str, body: &Value) -> Result<T> {
        debug!(url = url, "POST request");
        let response = self
            .send_with_retry(|| self.client.post(url).json(body))
            .await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize response from {url}"))
    }

    /// GET a document and decode the body as text, replacing undecodable
    /// bytes rather than failing. Used for the live blacklist CSV.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        debug!(url = url, "GET request (text)");
        let response = self.send_with_retry(|| self.client.get(url)).await?;
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Send a request, retrying transient upstream statuses with backoff.
    ///
    /// The builder closure is invoked fresh for each attempt since a
    /// `RequestBuilder` is consumed by `send()`. Non-retryable failures and
    /// exhausted retries surface as errors; callers map those to absence.
    async fn send_with_retry<F>(&self, build: F) -> Result<reqwest::Response>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut attempt = 0u32;

        loop {
            match build().send().await {
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) if is_retryable(response.status()) && attempt < MAX_RETRIES => {
                    warn!(
                        status = %response.status(),
                        attempt = attempt + 1,
                        "Transient upstream status, backing off"
                    );
                }
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    anyhow::bail!("Request returned {status}: {body}");
                }
                Err(e) => return Err(e).context("Request failed"),
            }

            attempt += 1;

            // Exponential backoff: base * 2^attempt, capped at MAX_BACKOFF.
            let backoff = BASE_BACKOFF.saturating_mul(1u32 << attempt).min(MAX_BACKOFF);

            // Add jitter: +/- 25% of the backoff to avoid thundering herd.
            // The nanosecond component of the current time provides enough
            // variation without pulling in `rand` for this alone.
            let nanos = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .subsec_nanos();
            let jitter = (nanos % 500) as f64 / 1000.0 - 0.25;
            let delay = backoff.mul_f64(1.0 + jitter);

            tokio::time::sleep(delay).await;
        }
    }
}
