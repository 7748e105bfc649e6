use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

use crate::client::BflClient;
use crate::error::{BflError, Result};
use crate::finetune::{FinetuneDetails, FinetuneResult, FluxFinetune};
use crate::generate::{GenerateDetails, GenerateResult, GenerateTask};
use crate::types::{JobHandle, JobResult, JobStatus, Payload};

/// Default delay between poll attempts.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default overall polling deadline.
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(300);

/// Controls for [`BflClient::poll`]: pacing, deadline, progress logging,
/// and cooperative cancellation.
///
/// Every poll loop runs against a deadline; [`PollOptions::new`] makes it
/// explicit and [`Default`] supplies 300 seconds.
#[derive(Debug, Clone)]
pub struct PollOptions {
    /// Delay between attempts. No backoff is applied.
    pub interval: Duration,
    /// Overall time allowed for the loop; exceeding it fails with
    /// [`BflError::Timeout`].
    pub timeout: Duration,
    /// Log a progress line every tenth attempt.
    pub verbose: bool,
    cancellation: Option<Arc<AtomicBool>>,
}

impl PollOptions {
    /// Options with the given overall deadline and default pacing.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Set the delay between poll attempts.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Enable or disable the periodic progress line.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set a flag that aborts the loop when stored `true`.
    ///
    /// The flag is checked at the top of every iteration, so a cancellation
    /// requested mid-delay is observed within one interval.
    pub fn with_cancellation(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancellation = Some(cancel);
        self
    }

    /// Whether cancellation has been requested.
    fn check_cancelled(&self) -> Result<()> {
        if let Some(ref cancel) = self.cancellation {
            if cancel.load(Ordering::Relaxed) {
                return Err(BflError::Cancelled);
            }
        }
        Ok(())
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_POLL_TIMEOUT,
            verbose: false,
            cancellation: None,
        }
    }
}

/// Outcome of a single poll attempt.
enum Attempt<R, D> {
    /// The job finished successfully; the envelope carries the payloads.
    Ready(JobResult<R, D>),
    /// The job is still in flight; keep polling.
    InFlight(JobStatus),
}

impl BflClient {
    /// Poll a job until it completes, fails, or the deadline passes.
    ///
    /// GETs the handle's polling URL once per interval. `Pending` and
    /// `Task not found` keep the loop going; `Ready` returns the envelope;
    /// the moderation and error statuses stop the loop with
    /// [`BflError::JobFailed`]. Transport, HTTP, validation, and decode
    /// failures propagate immediately; nothing is retried.
    ///
    /// The payload types must belong to the family the handle was submitted
    /// under, otherwise this fails with [`BflError::FamilyMismatch`] before
    /// touching the network.
    pub async fn poll<R, D>(
        &self,
        handle: &JobHandle,
        options: &PollOptions,
    ) -> Result<JobResult<R, D>>
    where
        R: Payload,
        D: Payload,
    {
        if R::FAMILY != handle.family {
            return Err(BflError::FamilyMismatch {
                id: handle.id.clone(),
                submitted: handle.family,
                requested: R::FAMILY,
            });
        }
        if D::FAMILY != handle.family {
            return Err(BflError::FamilyMismatch {
                id: handle.id.clone(),
                submitted: handle.family,
                requested: D::FAMILY,
            });
        }

        let started = Instant::now();
        let mut attempts: u64 = 0;
        loop {
            options.check_cancelled()?;
            if started.elapsed() >= options.timeout {
                return Err(BflError::Timeout {
                    waited: started.elapsed(),
                });
            }

            match self.poll_once::<R, D>(handle).await? {
                Attempt::Ready(envelope) => return Ok(envelope),
                Attempt::InFlight(status) => {
                    if options.verbose && attempts % 10 == 0 {
                        tracing::info!(
                            "Polling job {}... (status: {}, waited: {}s)",
                            handle.id,
                            status,
                            started.elapsed().as_secs()
                        );
                    }
                }
            }

            attempts += 1;
            tokio::time::sleep(options.interval).await;
        }
    }

    /// One transition of the poll loop: fetch the envelope and classify it.
    async fn poll_once<R, D>(&self, handle: &JobHandle) -> Result<Attempt<R, D>>
    where
        R: Payload,
        D: Payload,
    {
        let envelope: JobResult<R, D> = self.fetch_envelope(&handle.polling_url).await?;
        match envelope.status {
            JobStatus::Ready => Ok(Attempt::Ready(envelope)),
            status if status.is_failure() => Err(BflError::JobFailed {
                id: handle.id.clone(),
                status,
            }),
            status => Ok(Attempt::InFlight(status)),
        }
    }

    // ── Convenience wrappers ────────────────────────────────────────

    /// Submit an image generation task and poll it to completion.
    ///
    /// Wraps [`BflClient::submit`] and [`BflClient::poll`], unwrapping the
    /// generation payload from the terminal envelope.
    pub async fn generate<T: GenerateTask>(
        &self,
        task: &T,
        options: &PollOptions,
    ) -> Result<GenerateResult> {
        let handle = self.submit(task).await?;
        let envelope = self
            .poll::<GenerateResult, GenerateDetails>(&handle, options)
            .await?;
        envelope.result.ok_or_else(|| {
            BflError::InvalidResponse(format!(
                "Job {} is ready but the result payload is missing",
                handle.id
            ))
        })
    }

    /// Submit a fine-tune task and poll it to completion.
    ///
    /// Returns the whole terminal envelope: the fine-tune result payload is
    /// still an empty placeholder, so the envelope's `id` and `status` are
    /// the useful parts.
    pub async fn finetune(
        &self,
        task: &FluxFinetune,
        options: &PollOptions,
    ) -> Result<JobResult<FinetuneResult, FinetuneDetails>> {
        let handle = self.submit(task).await?;
        self.poll::<FinetuneResult, FinetuneDetails>(&handle, options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskFamily;

    fn handle(family: TaskFamily) -> JobHandle {
        JobHandle {
            id: "job-1".to_string(),
            // Unroutable on purpose: these tests must fail before any request
            polling_url: "http://127.0.0.1:1/poll/job-1".to_string(),
            webhook_url: None,
            family,
        }
    }

    #[test]
    fn test_poll_options_defaults() {
        let options = PollOptions::default();
        assert_eq!(options.interval, DEFAULT_POLL_INTERVAL);
        assert_eq!(options.timeout, DEFAULT_POLL_TIMEOUT);
        assert!(!options.verbose);
        assert!(options.check_cancelled().is_ok());
    }

    #[test]
    fn test_poll_options_chaining() {
        let options = PollOptions::new(Duration::from_secs(60))
            .with_interval(Duration::from_millis(250))
            .with_verbose(true);
        assert_eq!(options.timeout, Duration::from_secs(60));
        assert_eq!(options.interval, Duration::from_millis(250));
        assert!(options.verbose);
    }

    #[test]
    fn test_cancellation_flag() {
        let cancel = Arc::new(AtomicBool::new(false));
        let options = PollOptions::default().with_cancellation(cancel.clone());

        assert!(options.check_cancelled().is_ok());
        cancel.store(true, Ordering::Relaxed);
        match options.check_cancelled() {
            Err(BflError::Cancelled) => {}
            other => panic!("Expected Cancelled, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_poll_rejects_mismatched_family() {
        let client = BflClient::new("test-key");
        let result = client
            .poll::<GenerateResult, GenerateDetails>(
                &handle(TaskFamily::Finetune),
                &PollOptions::default(),
            )
            .await;

        match result {
            Err(BflError::FamilyMismatch {
                id,
                submitted,
                requested,
            }) => {
                assert_eq!(id, "job-1");
                assert_eq!(submitted, TaskFamily::Finetune);
                assert_eq!(requested, TaskFamily::Generate);
            }
            other => panic!("Expected FamilyMismatch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_poll_pre_cancelled_before_any_request() {
        let cancel = Arc::new(AtomicBool::new(true));
        let options = PollOptions::default().with_cancellation(cancel);

        let client = BflClient::new("test-key");
        let result = client
            .poll::<GenerateResult, GenerateDetails>(&handle(TaskFamily::Generate), &options)
            .await;
        assert!(matches!(result, Err(BflError::Cancelled)));
    }

    #[tokio::test]
    async fn test_poll_zero_timeout_expires_before_any_request() {
        let options = PollOptions::new(Duration::ZERO);
        let client = BflClient::new("test-key");
        let result = client
            .poll::<GenerateResult, GenerateDetails>(&handle(TaskFamily::Generate), &options)
            .await;
        assert!(matches!(result, Err(BflError::Timeout { .. })));
    }
}
