use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// The two result-shape families the API produces.
///
/// Image generation jobs decode into [`GenerateResult`] / [`GenerateDetails`];
/// fine-tune jobs decode into [`FinetuneResult`] / [`FinetuneDetails`]. The
/// family is recorded on the [`JobHandle`] at submit time and checked again
/// before results are decoded.
///
/// [`GenerateResult`]: crate::generate::GenerateResult
/// [`GenerateDetails`]: crate::generate::GenerateDetails
/// [`FinetuneResult`]: crate::finetune::FinetuneResult
/// [`FinetuneDetails`]: crate::finetune::FinetuneDetails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFamily {
    /// Image generation endpoints (`/v1/flux-*`).
    Generate,
    /// Model fine-tuning (`/v1/finetune`).
    Finetune,
}

impl fmt::Display for TaskFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskFamily::Generate => f.write_str("generate"),
            TaskFamily::Finetune => f.write_str("finetune"),
        }
    }
}

/// A task that can be submitted to the BFL API.
///
/// Implementations provide the endpoint the task is POSTed to and declare
/// which result family their jobs produce.
pub trait AsyncTask: Serialize {
    /// Result family produced by this task.
    const FAMILY: TaskFamily;

    /// Full URL of the endpoint this task is submitted to.
    fn action_url(&self, base_url: &str) -> String;
}

/// A payload shape carried by the result envelope of one task family.
///
/// Implemented by the concrete result and details types; lets the client
/// verify that the types a caller decodes into match the family the job
/// was submitted under.
pub trait Payload: DeserializeOwned {
    /// The family whose envelopes carry this payload.
    const FAMILY: TaskFamily;
}

/// Handle to a submitted job, returned by [`BflClient::submit`].
///
/// [`BflClient::submit`]: crate::client::BflClient::submit
#[derive(Debug, Clone)]
pub struct JobHandle {
    /// Server-assigned job ID.
    pub id: String,
    /// URL to poll for the job's result.
    pub polling_url: String,
    /// Webhook delivery URL, echoed back when the task requested one.
    pub webhook_url: Option<String>,
    /// Family of the submitted task, recorded client-side and used to
    /// validate result decoding.
    pub family: TaskFamily,
}

/// Lifecycle status of a submitted job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    /// The server has no result record for this ID yet. Not terminal: a
    /// freshly submitted job can report this for a beat.
    #[serde(rename = "Task not found")]
    TaskNotFound,
    /// Queued or running.
    Pending,
    /// The request was rejected by input moderation.
    #[serde(rename = "Request Moderated")]
    RequestModerated,
    /// The generated output was withheld by content moderation.
    #[serde(rename = "Content Moderated")]
    ContentModerated,
    /// Finished successfully; the envelope carries the result payload.
    Ready,
    /// The job failed server-side.
    Error,
}

impl JobStatus {
    /// The wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::TaskNotFound => "Task not found",
            JobStatus::Pending => "Pending",
            JobStatus::RequestModerated => "Request Moderated",
            JobStatus::ContentModerated => "Content Moderated",
            JobStatus::Ready => "Ready",
            JobStatus::Error => "Error",
        }
    }

    /// Whether this status ends the job's lifecycle.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Ready
                | JobStatus::RequestModerated
                | JobStatus::ContentModerated
                | JobStatus::Error
        )
    }

    /// Whether this status is a terminal failure.
    pub fn is_failure(&self) -> bool {
        self.is_terminal() && *self != JobStatus::Ready
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result envelope returned by the polling and `get_result` endpoints.
///
/// `result` and `details` are only meaningfully populated once `status` is
/// [`JobStatus::Ready`]. Everything except `status` is optional on the
/// wire: in-flight jobs can report as little as `{"status": "Pending"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobResult<R, D> {
    /// Job ID, when the server echoes it.
    #[serde(default)]
    pub id: String,
    /// Current lifecycle status.
    pub status: JobStatus,
    /// Completion fraction in `[0, 1]`, when the server reports one.
    #[serde(default)]
    pub progress: Option<f64>,
    /// Result payload for the submitted task family.
    pub result: Option<R>,
    /// Details payload for the submitted task family.
    pub details: Option<D>,
}

/// One segment of a validation error's location path.
///
/// The API reports paths as mixed arrays of field names and array indices,
/// e.g. `["body", "width"]` or `["detail", 0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(u64),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// A single field-level violation reported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Path to the offending input field.
    #[serde(default)]
    pub loc: Vec<PathSegment>,
    /// Human-readable message.
    pub msg: String,
    /// Machine-readable violation type tag.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Violation {
    /// The location path joined with dots, e.g. `body.width`.
    pub fn path(&self) -> String {
        self.loc
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// The full, ordered set of violations from a 422 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(default)]
    pub detail: Vec<Violation>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.detail.len();
        if total == 0 {
            return f.write_str("Validation error");
        }
        for (i, violation) in self.detail.iter().enumerate() {
            write!(f, "Validation error ({}/{}): {}", i + 1, total, violation.msg)?;
            if !violation.loc.is_empty() {
                write!(f, " (at {})", violation.path())?;
            }
            if i != total - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
