use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{BflError, Result};
use crate::types::{AsyncTask, JobHandle, JobResult, Payload, ValidationErrors};

/// Default public API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.bfl.ai";

/// Environment variable holding the API key for [`BflClient::from_env`].
pub const API_KEY_ENV: &str = "BFL_API_KEY";

/// Environment variable overriding the base URL for [`BflClient::from_env`].
pub const BASE_URL_ENV: &str = "BFL_BASE_URL";

const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);
const RESULT_TIMEOUT: Duration = Duration::from_secs(10);

fn normalize(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Async client for the BFL image generation API.
///
/// Holds the API key and base URL; submits tasks, fetches result snapshots,
/// and polls jobs to completion. Cheap to clone: the underlying HTTP client
/// is connection-pooled and safe to share across concurrent jobs.
///
/// # Example
/// ```no_run
/// use bfl_rs::{BflClient, FluxDev, PollOptions};
/// use std::time::Duration;
///
/// # async fn example() -> bfl_rs::Result<()> {
/// let client = BflClient::new("my-api-key");
/// let task = FluxDev {
///     prompt: "a lighthouse at dusk".into(),
///     ..Default::default()
/// };
/// let handle = client.submit(&task).await?;
/// let envelope = client
///     .poll::<bfl_rs::GenerateResult, bfl_rs::GenerateDetails>(
///         &handle,
///         &PollOptions::new(Duration::from_secs(120)),
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BflClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl BflClient {
    /// Create a new client with the given API key, pointing at the public API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Create a client from the `BFL_API_KEY` environment variable, with an
    /// optional `BFL_BASE_URL` override.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| BflError::MissingApiKey)?;
        if api_key.is_empty() {
            return Err(BflError::MissingApiKey);
        }
        let client = Self::new(api_key);
        Ok(match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => client.with_base_url(url),
            _ => client,
        })
    }

    /// Point the client at a different endpoint (regional cluster, test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize(base_url.into());
        self
    }

    /// Use a custom `reqwest::Client` (for connection pooling, timeouts, TLS).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Submit ──────────────────────────────────────────────────────

    /// Submit a task for async execution. Returns a handle for polling.
    ///
    /// POSTs the serialized task to its endpoint with the `X-Key` header.
    /// Fails with [`BflError::MissingApiKey`] before any network traffic if
    /// the client has no key, and with [`BflError::Validation`] when the API
    /// rejects the parameters (HTTP 422).
    pub async fn submit<T: AsyncTask>(&self, task: &T) -> Result<JobHandle> {
        if self.api_key.is_empty() {
            return Err(BflError::MissingApiKey);
        }

        let url = task.action_url(&self.base_url);
        let body = serde_json::to_string(task).map_err(BflError::Serialize)?;

        let resp = self
            .http
            .post(&url)
            .timeout(SUBMIT_TIMEOUT)
            .header("X-Key", self.api_key.as_str())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| BflError::Network {
                context: format!("Failed to reach the BFL API at {}", url),
                source: e,
            })?;

        let wire: SubmitResponse = decode_response(resp, "submit response").await?;
        tracing::debug!("Submitted {} task: job {}", T::FAMILY, wire.id);

        Ok(JobHandle {
            id: wire.id,
            polling_url: wire.polling_url,
            webhook_url: wire.webhook_url,
            family: T::FAMILY,
        })
    }

    // ── Results ─────────────────────────────────────────────────────

    /// Fetch the current result envelope for a job by ID.
    ///
    /// This is a point-in-time snapshot: the returned envelope may be in any
    /// status, and no family validation is possible from a bare ID. Use
    /// [`BflClient::poll`] to wait for completion.
    ///
    /// [`BflClient::poll`]: crate::client::BflClient::poll
    pub async fn get_result<R, D>(&self, id: &str) -> Result<JobResult<R, D>>
    where
        R: Payload,
        D: Payload,
    {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/v1/get_result", self.base_url),
            &[("id", id)],
        )
        .map_err(|e| BflError::InvalidResponse(format!("Bad result URL: {}", e)))?;

        let resp = self
            .http
            .get(url)
            .timeout(RESULT_TIMEOUT)
            .send()
            .await
            .map_err(|e| BflError::Network {
                context: format!("Failed to fetch result for job {}", id),
                source: e,
            })?;

        decode_response(resp, "result envelope").await
    }

    /// GET a polling URL once and decode the envelope.
    pub(crate) async fn fetch_envelope<R, D>(&self, polling_url: &str) -> Result<JobResult<R, D>>
    where
        R: Payload,
        D: Payload,
    {
        let resp = self
            .http
            .get(polling_url)
            .timeout(RESULT_TIMEOUT)
            .send()
            .await
            .map_err(|e| BflError::Network {
                context: format!("Failed to poll {}", polling_url),
                source: e,
            })?;

        decode_response(resp, "result envelope").await
    }
}

/// Wire shape of a successful submit response.
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    id: String,
    polling_url: String,
    webhook_url: Option<String>,
}

/// Apply the API's three-way response contract: 200 decodes as `T`, 422
/// decodes as a validation error set, anything else is surfaced as an HTTP
/// error with its status and raw body.
async fn decode_response<T: DeserializeOwned>(resp: reqwest::Response, context: &str) -> Result<T> {
    let status = resp.status().as_u16();
    let body = resp.text().await.map_err(|e| BflError::Network {
        context: format!("Failed to read {}", context),
        source: e,
    })?;

    match status {
        200 => serde_json::from_str(&body).map_err(|e| BflError::Decode {
            context: context.to_string(),
            source: e,
        }),
        422 => {
            let errors: ValidationErrors =
                serde_json::from_str(&body).map_err(|e| BflError::Decode {
                    context: format!("validation detail in {}", context),
                    source: e,
                })?;
            Err(BflError::Validation(errors))
        }
        _ => Err(BflError::Http { status, body }),
    }
}
