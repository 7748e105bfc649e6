use std::time::Duration;

use thiserror::Error;

use crate::types::{JobStatus, TaskFamily, ValidationErrors};

/// Errors returned by BFL API operations.
#[derive(Error, Debug)]
pub enum BflError {
    /// The client has no API key. Raised before any network call.
    #[error("API key is not set")]
    MissingApiKey,

    /// Task parameters could not be encoded as JSON.
    #[error("Failed to encode task parameters: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Network-level request failure with context.
    #[error("{context}: {source}")]
    Network {
        context: String,
        source: reqwest::Error,
    },

    /// The API returned a status other than 200 or 422.
    #[error("BFL API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The API rejected the request with field-level validation errors (422).
    #[error("{0}")]
    Validation(ValidationErrors),

    /// A response body did not parse as the expected shape.
    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: String,
        source: serde_json::Error,
    },

    /// The response parsed but was missing required content.
    #[error("{0}")]
    InvalidResponse(String),

    /// The requested payload types belong to a different task family than
    /// the one the job was submitted under.
    #[error("Job {id} was submitted as a {submitted} task, cannot decode its result as {requested}")]
    FamilyMismatch {
        id: String,
        submitted: TaskFamily,
        requested: TaskFamily,
    },

    /// The job reached a terminal status other than `Ready`.
    #[error("Job {id} ended in status '{status}'")]
    JobFailed { id: String, status: JobStatus },

    /// Polling exceeded its deadline before the job reached a terminal status.
    #[error("Timed out after polling for {}s", .waited.as_secs())]
    Timeout { waited: Duration },

    /// Polling was aborted through the caller-supplied cancellation flag.
    #[error("Polling was cancelled")]
    Cancelled,
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, BflError>;
