//! # bfl-rs
//!
//! Async Rust client for the [Black Forest Labs](https://api.bfl.ai) FLUX
//! image generation API.
//!
//! The API runs every task asynchronously: submitting one returns a job
//! handle, and the outcome is fetched by polling that handle until the job
//! reaches a terminal status. This crate provides typed task structs for
//! every FLUX endpoint (generation, inpainting, edge and depth guidance,
//! fine-tuning), plus a bounded polling loop and one-call helpers that
//! submit and wait in a single step.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bfl_rs::{BflClient, FluxPro11, PollOptions};
//! use std::time::Duration;
//!
//! # async fn example() -> bfl_rs::Result<()> {
//! // Reads the API key from BFL_API_KEY
//! let client = BflClient::from_env()?;
//!
//! let task = FluxPro11 {
//!     prompt: "A serene mountain lake at dawn".to_string(),
//!     ..Default::default()
//! };
//!
//! let options = PollOptions::new(Duration::from_secs(120)).with_verbose(true);
//! let image = client.generate(&task, &options).await?;
//!
//! println!("Image ready: {}", image.sample_url);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod finetune;
pub mod generate;
pub mod poll;
pub mod types;

pub use client::{BflClient, DEFAULT_BASE_URL};
pub use error::{BflError, Result};
pub use finetune::{
    FinetuneDetails, FinetuneMode, FinetunePriority, FinetuneResult, FinetuneType, FluxFinetune,
    LoraRank,
};
pub use generate::{
    FluxDev, FluxPro, FluxPro11, FluxPro11Ultra, FluxPro11UltraFinetuned, FluxProCanny,
    FluxProCannyFinetuned, FluxProDepth, FluxProDepthFinetuned, FluxProFill, FluxProFillFinetuned,
    FluxProFinetuned, GenerateDetails, GenerateResult, GenerateTask, OutputFormat,
};
pub use poll::{PollOptions, DEFAULT_POLL_INTERVAL, DEFAULT_POLL_TIMEOUT};
pub use types::{
    AsyncTask, JobHandle, JobResult, JobStatus, PathSegment, Payload, TaskFamily,
    ValidationErrors, Violation,
};
