use serde::{Deserialize, Serialize};

use crate::types::{AsyncTask, Payload, TaskFamily};

/// Captioning behaviour for the fine-tuned model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinetuneMode {
    /// Describe training images in full detail.
    #[default]
    General,
    Character,
    Style,
    Product,
}

/// What the fine-tuning process optimizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinetunePriority {
    /// Iteration speed over quality.
    Speed,
    /// Quality over speed.
    #[default]
    Quality,
    HighResOnly,
}

/// Kind of fine-tuning to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinetuneType {
    /// A standard LoRA adapter.
    Lora,
    /// Full fine-tuning with a post hoc LoRA extraction.
    #[default]
    Full,
}

/// Rank of the (extracted) LoRA model. The API accepts exactly 16 or 32,
/// as plain JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum LoraRank {
    Rank16,
    #[default]
    Rank32,
}

impl From<LoraRank> for u32 {
    fn from(rank: LoraRank) -> u32 {
        match rank {
            LoraRank::Rank16 => 16,
            LoraRank::Rank32 => 32,
        }
    }
}

impl TryFrom<u32> for LoraRank {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            16 => Ok(LoraRank::Rank16),
            32 => Ok(LoraRank::Rank32),
            other => Err(format!("Invalid LoRA rank {} (expected 16 or 32)", other)),
        }
    }
}

/// Task parameters for fine-tuning a FLUX model (`/v1/finetune`).
///
/// The training data is a ZIP of images, optionally with caption text files,
/// sent base64 encoded in `file_data`. [`FluxFinetune::with_training_archive`]
/// does the encoding.
#[derive(Debug, Clone, Serialize)]
pub struct FluxFinetune {
    /// Base64 encoded ZIP of training images and optional captions.
    pub file_data: String,
    /// Comment or name for the fine-tuned model, echoed back in the
    /// job's finetune details.
    pub finetune_comment: String,
    /// Trigger word for the fine-tuned model. Defaults to "TOK".
    pub trigger_word: String,
    pub mode: FinetuneMode,
    /// Fine-tuning iterations, 100 to 1000. Defaults to 300.
    pub iterations: u32,
    /// Learning rate, 1e-6 to 0.005. When unset the server picks 1e-5 for
    /// full fine-tuning and 1e-4 for LoRA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_rate: Option<f64>,
    /// Caption the training images automatically. Defaults to true.
    pub captioning: bool,
    pub priority: FinetunePriority,
    pub finetune_type: FinetuneType,
    pub lora_rank: LoraRank,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
}

impl FluxFinetune {
    /// Set `file_data` from the raw bytes of a training ZIP archive.
    pub fn with_training_archive(mut self, archive: &[u8]) -> Self {
        self.file_data = base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            archive,
        );
        self
    }
}

impl Default for FluxFinetune {
    fn default() -> Self {
        Self {
            file_data: String::new(),
            finetune_comment: String::new(),
            trigger_word: "TOK".to_string(),
            mode: FinetuneMode::default(),
            iterations: 300,
            learning_rate: None,
            captioning: true,
            priority: FinetunePriority::default(),
            finetune_type: FinetuneType::default(),
            lora_rank: LoraRank::default(),
            webhook_url: String::new(),
            webhook_secret: String::new(),
        }
    }
}

impl AsyncTask for FluxFinetune {
    const FAMILY: TaskFamily = TaskFamily::Finetune;

    fn action_url(&self, base_url: &str) -> String {
        format!("{}/v1/finetune", base_url)
    }
}

/// Result payload of a finished fine-tune job. The API does not document
/// its shape yet, so this stays an empty placeholder; the interesting part
/// of the terminal envelope is the job id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinetuneResult {}

impl Payload for FinetuneResult {
    const FAMILY: TaskFamily = TaskFamily::Finetune;
}

/// Details payload of a fine-tune job. Undocumented, see [`FinetuneResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinetuneDetails {}

impl Payload for FinetuneDetails {
    const FAMILY: TaskFamily = TaskFamily::Finetune;
}
