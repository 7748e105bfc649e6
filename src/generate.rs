use serde::{Deserialize, Serialize};

use crate::types::{AsyncTask, Payload, TaskFamily};

fn is_false(b: &bool) -> bool {
    !*b
}

/// Encoding of the generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Jpeg,
    Png,
}

/// Result payload of a finished generation job.
///
/// `sample_url` is a signed URL for the generated image; it expires, so
/// download promptly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResult {
    /// The prompt the image was generated from, after any upsampling.
    #[serde(default)]
    pub prompt: String,
    /// Signed URL of the generated image.
    #[serde(rename = "sample")]
    pub sample_url: String,
    /// Seed the generation actually used.
    #[serde(default)]
    pub seed: i64,
    #[serde(default)]
    pub start_time: f64,
    #[serde(default)]
    pub end_time: f64,
    /// Generation time in seconds.
    #[serde(default)]
    pub duration: f64,
}

impl Payload for GenerateResult {
    const FAMILY: TaskFamily = TaskFamily::Generate;
}

/// Details payload of a generation job.
///
/// TODO: fill in the fields once the API documents the details object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateDetails {}

impl Payload for GenerateDetails {
    const FAMILY: TaskFamily = TaskFamily::Generate;
}

/// Marker for tasks whose terminal envelope carries a [`GenerateResult`].
pub trait GenerateTask: AsyncTask {}

/// Task parameters for FLUX 1.1 \[pro\] (`/v1/flux-pro-1.1`).
#[derive(Debug, Clone, Serialize)]
pub struct FluxPro11 {
    /// Text prompt for image generation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prompt: String,
    /// Optional base64 encoded image to blend in via Flux Redux.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_prompt: String,
    /// Width of the image in pixels, a multiple of 32 between 256 and 1440.
    /// Defaults to 1024.
    pub width: u32,
    /// Height of the image in pixels, a multiple of 32 between 256 and 1440.
    /// Defaults to 768.
    pub height: u32,
    /// Rewrite the prompt automatically for more creative generation.
    pub prompt_upsampling: bool,
    /// Seed for reproducibility. Random when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Moderation tolerance from 0 (strictest) to 6 (least strict).
    /// Defaults to 2.
    pub safety_tolerance: u8,
    /// Image encoding. The server defaults to jpeg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    /// URL to notify when the job finishes.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    /// Secret for webhook signature verification.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
}

impl Default for FluxPro11 {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            image_prompt: String::new(),
            width: 1024,
            height: 768,
            prompt_upsampling: false,
            seed: None,
            safety_tolerance: 2,
            output_format: None,
            webhook_url: String::new(),
            webhook_secret: String::new(),
        }
    }
}

impl AsyncTask for FluxPro11 {
    const FAMILY: TaskFamily = TaskFamily::Generate;

    fn action_url(&self, base_url: &str) -> String {
        format!("{}/v1/flux-pro-1.1", base_url)
    }
}

impl GenerateTask for FluxPro11 {}

/// Task parameters for FLUX.1 \[pro\] (`/v1/flux-pro`).
#[derive(Debug, Clone, Serialize)]
pub struct FluxPro {
    /// Text prompt for image generation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prompt: String,
    /// Optional base64 encoded image to use as a generation prompt.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_prompt: String,
    /// Width in pixels, a multiple of 32 between 256 and 1440.
    pub width: u32,
    /// Height in pixels, a multiple of 32 between 256 and 1440.
    pub height: u32,
    /// Generation steps, 1 to 50. The server defaults to 40.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    pub prompt_upsampling: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Guidance scale, 1.5 to 5. Higher follows the prompt more closely at
    /// the cost of realism. The server defaults to 2.5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<f64>,
    pub safety_tolerance: u8,
    /// Guidance interval control, 1 to 4. The server defaults to 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
}

impl Default for FluxPro {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            image_prompt: String::new(),
            width: 1024,
            height: 768,
            steps: None,
            prompt_upsampling: false,
            seed: None,
            guidance: None,
            safety_tolerance: 2,
            interval: None,
            output_format: None,
            webhook_url: String::new(),
            webhook_secret: String::new(),
        }
    }
}

impl AsyncTask for FluxPro {
    const FAMILY: TaskFamily = TaskFamily::Generate;

    fn action_url(&self, base_url: &str) -> String {
        format!("{}/v1/flux-pro", base_url)
    }
}

impl GenerateTask for FluxPro {}

/// Task parameters for FLUX.1 \[dev\] (`/v1/flux-dev`).
#[derive(Debug, Clone, Serialize)]
pub struct FluxDev {
    /// Text prompt for image generation.
    pub prompt: String,
    /// Optional base64 encoded image to use as a generation prompt.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_prompt: String,
    /// Width in pixels, a multiple of 32 between 256 and 1440.
    pub width: u32,
    /// Height in pixels, a multiple of 32 between 256 and 1440.
    pub height: u32,
    /// Generation steps, 1 to 50. The server defaults to 28.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    pub prompt_upsampling: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Guidance scale, 1.5 to 5. The server defaults to 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<f64>,
    pub safety_tolerance: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
}

impl Default for FluxDev {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            image_prompt: String::new(),
            width: 1024,
            height: 768,
            steps: None,
            prompt_upsampling: false,
            seed: None,
            guidance: None,
            safety_tolerance: 2,
            output_format: None,
            webhook_url: String::new(),
            webhook_secret: String::new(),
        }
    }
}

impl AsyncTask for FluxDev {
    const FAMILY: TaskFamily = TaskFamily::Generate;

    fn action_url(&self, base_url: &str) -> String {
        format!("{}/v1/flux-dev", base_url)
    }
}

impl GenerateTask for FluxDev {}

/// Task parameters for FLUX 1.1 \[pro\] Ultra (`/v1/flux-pro-1.1-ultra`).
#[derive(Debug, Clone, Serialize)]
pub struct FluxPro11Ultra {
    /// Text prompt for image generation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prompt: String,
    pub prompt_upsampling: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Aspect ratio between 21:9 and 9:21. Defaults to "16:9".
    pub aspect_ratio: String,
    pub safety_tolerance: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    /// Generate less processed, more natural-looking images.
    pub raw: bool,
    /// Optional image to remix, base64 encoded.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_prompt: String,
    /// Blend between the prompt and the image prompt, 0 to 1.
    /// Defaults to 0.1.
    pub image_prompt_strength: f64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
}

impl Default for FluxPro11Ultra {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            prompt_upsampling: false,
            seed: None,
            aspect_ratio: "16:9".to_string(),
            safety_tolerance: 2,
            output_format: None,
            raw: false,
            image_prompt: String::new(),
            image_prompt_strength: 0.1,
            webhook_url: String::new(),
            webhook_secret: String::new(),
        }
    }
}

impl AsyncTask for FluxPro11Ultra {
    const FAMILY: TaskFamily = TaskFamily::Generate;

    fn action_url(&self, base_url: &str) -> String {
        format!("{}/v1/flux-pro-1.1-ultra", base_url)
    }
}

impl GenerateTask for FluxPro11Ultra {}

/// Task parameters for FLUX.1 Fill \[pro\] inpainting
/// (`/v1/flux-pro-1.0-fill`).
#[derive(Debug, Clone, Serialize)]
pub struct FluxProFill {
    /// Base64 encoded image to modify. May carry an alpha mask.
    pub image: String,
    /// Base64 encoded black-and-white mask, same dimensions as the image.
    /// White marks the areas to inpaint. Optional when the image carries an
    /// alpha mask.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mask: String,
    /// Description of the changes to make in the masked area.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prompt: String,
    /// Generation steps, 15 to 50. The server defaults to 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub prompt_upsampling: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Guidance strength, 1.5 to 100. The server defaults to 60.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    pub safety_tolerance: u8,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
}

impl Default for FluxProFill {
    fn default() -> Self {
        Self {
            image: String::new(),
            mask: String::new(),
            prompt: String::new(),
            steps: None,
            prompt_upsampling: false,
            seed: None,
            guidance: None,
            output_format: None,
            safety_tolerance: 2,
            webhook_url: String::new(),
            webhook_secret: String::new(),
        }
    }
}

impl AsyncTask for FluxProFill {
    const FAMILY: TaskFamily = TaskFamily::Generate;

    fn action_url(&self, base_url: &str) -> String {
        format!("{}/v1/flux-pro-1.0-fill", base_url)
    }
}

impl GenerateTask for FluxProFill {}

/// Task parameters for FLUX.1 Canny \[pro\] edge-guided generation
/// (`/v1/flux-pro-1.0-canny`).
#[derive(Debug, Clone, Serialize)]
pub struct FluxProCanny {
    /// Text prompt for image generation.
    pub prompt: String,
    /// Base64 encoded control image, used when no preprocessed image is
    /// given.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub control_image: String,
    /// Pre-processed edge map that bypasses the Canny preprocessing step.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preprocessed_image: String,
    /// Low threshold for Canny edge detection, 0 to 500. The server
    /// defaults to 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canny_low_threshold: Option<u32>,
    /// High threshold for Canny edge detection, 0 to 500. The server
    /// defaults to 200.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canny_high_threshold: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub prompt_upsampling: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Generation steps, 15 to 50. The server defaults to 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    /// Guidance strength, 1 to 100. The server defaults to 30.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<f64>,
    pub safety_tolerance: u8,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
}

impl Default for FluxProCanny {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            control_image: String::new(),
            preprocessed_image: String::new(),
            canny_low_threshold: None,
            canny_high_threshold: None,
            prompt_upsampling: false,
            seed: None,
            steps: None,
            output_format: None,
            guidance: None,
            safety_tolerance: 2,
            webhook_url: String::new(),
            webhook_secret: String::new(),
        }
    }
}

impl AsyncTask for FluxProCanny {
    const FAMILY: TaskFamily = TaskFamily::Generate;

    fn action_url(&self, base_url: &str) -> String {
        format!("{}/v1/flux-pro-1.0-canny", base_url)
    }
}

impl GenerateTask for FluxProCanny {}

/// Task parameters for FLUX.1 Depth \[pro\] depth-guided generation
/// (`/v1/flux-pro-1.0-depth`).
#[derive(Debug, Clone, Serialize)]
pub struct FluxProDepth {
    /// Text prompt for image generation.
    pub prompt: String,
    /// Base64 encoded control image.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub control_image: String,
    /// Pre-processed depth map that bypasses the preprocessing step.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preprocessed_image: String,
    #[serde(skip_serializing_if = "is_false")]
    pub prompt_upsampling: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Generation steps, 15 to 50. The server defaults to 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    /// Guidance strength, 1 to 100. The server defaults to 15.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<f64>,
    pub safety_tolerance: u8,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
}

impl Default for FluxProDepth {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            control_image: String::new(),
            preprocessed_image: String::new(),
            prompt_upsampling: false,
            seed: None,
            steps: None,
            output_format: None,
            guidance: None,
            safety_tolerance: 2,
            webhook_url: String::new(),
            webhook_secret: String::new(),
        }
    }
}

impl AsyncTask for FluxProDepth {
    const FAMILY: TaskFamily = TaskFamily::Generate;

    fn action_url(&self, base_url: &str) -> String {
        format!("{}/v1/flux-pro-1.0-depth", base_url)
    }
}

impl GenerateTask for FluxProDepth {}

/// Task parameters for FLUX.1 \[pro\] with a fine-tuned model
/// (`/v1/flux-pro-finetuned`).
#[derive(Debug, Clone, Serialize)]
pub struct FluxProFinetuned {
    /// ID of the fine-tuned model to use.
    pub finetune_id: String,
    /// Influence of the fine-tuned model, 0 (none) to 2. Defaults to 1.1.
    pub finetune_strength: f64,
    /// Generation steps, 1 to 50. Defaults to 40.
    pub steps: u32,
    /// Guidance scale, 1.5 to 5. Defaults to 2.5.
    pub guidance: f64,
    /// Text prompt for image generation.
    pub prompt: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_prompt: String,
    pub width: u32,
    pub height: u32,
    pub prompt_upsampling: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    pub safety_tolerance: u8,
    pub output_format: OutputFormat,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
}

impl Default for FluxProFinetuned {
    fn default() -> Self {
        Self {
            finetune_id: String::new(),
            finetune_strength: 1.1,
            steps: 40,
            guidance: 2.5,
            prompt: String::new(),
            image_prompt: String::new(),
            width: 1024,
            height: 768,
            prompt_upsampling: false,
            seed: None,
            safety_tolerance: 2,
            output_format: OutputFormat::Jpeg,
            webhook_url: String::new(),
            webhook_secret: String::new(),
        }
    }
}

impl AsyncTask for FluxProFinetuned {
    const FAMILY: TaskFamily = TaskFamily::Generate;

    fn action_url(&self, base_url: &str) -> String {
        format!("{}/v1/flux-pro-finetuned", base_url)
    }
}

impl GenerateTask for FluxProFinetuned {}

/// Task parameters for FLUX.1 Depth \[pro\] with a fine-tuned model
/// (`/v1/flux-pro-1.0-depth-finetuned`).
#[derive(Debug, Clone, Serialize)]
pub struct FluxProDepthFinetuned {
    /// ID of the fine-tuned model to use.
    pub finetune_id: String,
    /// Influence of the fine-tuned model, 0 (none) to 2. Defaults to 1.1.
    pub finetune_strength: f64,
    pub prompt: String,
    /// Base64 encoded control image.
    pub control_image: String,
    pub prompt_upsampling: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Generation steps, 15 to 50. Defaults to 50.
    pub steps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    /// Guidance strength, 1 to 100. Defaults to 15.
    pub guidance: f64,
    pub safety_tolerance: u8,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
}

impl Default for FluxProDepthFinetuned {
    fn default() -> Self {
        Self {
            finetune_id: String::new(),
            finetune_strength: 1.1,
            prompt: String::new(),
            control_image: String::new(),
            prompt_upsampling: false,
            seed: None,
            steps: 50,
            output_format: None,
            guidance: 15.0,
            safety_tolerance: 2,
            webhook_url: String::new(),
            webhook_secret: String::new(),
        }
    }
}

impl AsyncTask for FluxProDepthFinetuned {
    const FAMILY: TaskFamily = TaskFamily::Generate;

    fn action_url(&self, base_url: &str) -> String {
        format!("{}/v1/flux-pro-1.0-depth-finetuned", base_url)
    }
}

impl GenerateTask for FluxProDepthFinetuned {}

/// Task parameters for FLUX.1 Canny \[pro\] with a fine-tuned model
/// (`/v1/flux-pro-1.0-canny-finetuned`).
#[derive(Debug, Clone, Serialize)]
pub struct FluxProCannyFinetuned {
    /// ID of the fine-tuned model to use.
    pub finetune_id: String,
    /// Influence of the fine-tuned model, 0 (none) to 2. Defaults to 1.1.
    pub finetune_strength: f64,
    pub prompt: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub control_image: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preprocessed_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canny_low_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canny_high_threshold: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub prompt_upsampling: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<f64>,
    pub safety_tolerance: u8,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
}

impl Default for FluxProCannyFinetuned {
    fn default() -> Self {
        Self {
            finetune_id: String::new(),
            finetune_strength: 1.1,
            prompt: String::new(),
            control_image: String::new(),
            preprocessed_image: String::new(),
            canny_low_threshold: None,
            canny_high_threshold: None,
            prompt_upsampling: false,
            seed: None,
            steps: None,
            output_format: None,
            guidance: None,
            safety_tolerance: 2,
            webhook_url: String::new(),
            webhook_secret: String::new(),
        }
    }
}

impl AsyncTask for FluxProCannyFinetuned {
    const FAMILY: TaskFamily = TaskFamily::Generate;

    fn action_url(&self, base_url: &str) -> String {
        format!("{}/v1/flux-pro-1.0-canny-finetuned", base_url)
    }
}

impl GenerateTask for FluxProCannyFinetuned {}

/// Task parameters for FLUX.1 Fill \[pro\] with a fine-tuned model
/// (`/v1/flux-pro-1.0-fill-finetuned`).
#[derive(Debug, Clone, Serialize)]
pub struct FluxProFillFinetuned {
    /// ID of the fine-tuned model to use.
    pub finetune_id: String,
    /// Influence of the fine-tuned model, 0 (none) to 2. Defaults to 1.1.
    pub finetune_strength: f64,
    /// Base64 encoded image to modify. May carry an alpha mask.
    pub image: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mask: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub prompt_upsampling: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    pub safety_tolerance: u8,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
}

impl Default for FluxProFillFinetuned {
    fn default() -> Self {
        Self {
            finetune_id: String::new(),
            finetune_strength: 1.1,
            image: String::new(),
            mask: String::new(),
            prompt: String::new(),
            steps: None,
            prompt_upsampling: false,
            seed: None,
            guidance: None,
            output_format: None,
            safety_tolerance: 2,
            webhook_url: String::new(),
            webhook_secret: String::new(),
        }
    }
}

impl AsyncTask for FluxProFillFinetuned {
    const FAMILY: TaskFamily = TaskFamily::Generate;

    fn action_url(&self, base_url: &str) -> String {
        format!("{}/v1/flux-pro-1.0-fill-finetuned", base_url)
    }
}

impl GenerateTask for FluxProFillFinetuned {}

/// Task parameters for FLUX 1.1 \[pro\] Ultra with a fine-tuned model
/// (`/v1/flux-pro-1.1-ultra-finetuned`).
#[derive(Debug, Clone, Serialize)]
pub struct FluxPro11UltraFinetuned {
    /// ID of the fine-tuned model to use.
    pub finetune_id: String,
    /// Influence of the fine-tuned model, 0 (none) to 2. Defaults to 1.1.
    pub finetune_strength: f64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prompt: String,
    pub prompt_upsampling: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Aspect ratio between 21:9 and 9:21. Defaults to "16:9".
    pub aspect_ratio: String,
    pub safety_tolerance: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    pub raw: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_prompt: String,
    /// Blend between the prompt and the image prompt, 0 to 1.
    /// Defaults to 0.1.
    pub image_prompt_strength: f64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_secret: String,
}

impl Default for FluxPro11UltraFinetuned {
    fn default() -> Self {
        Self {
            finetune_id: String::new(),
            finetune_strength: 1.1,
            prompt: String::new(),
            prompt_upsampling: false,
            seed: None,
            aspect_ratio: "16:9".to_string(),
            safety_tolerance: 2,
            output_format: None,
            raw: false,
            image_prompt: String::new(),
            image_prompt_strength: 0.1,
            webhook_url: String::new(),
            webhook_secret: String::new(),
        }
    }
}

impl AsyncTask for FluxPro11UltraFinetuned {
    const FAMILY: TaskFamily = TaskFamily::Generate;

    fn action_url(&self, base_url: &str) -> String {
        format!("{}/v1/flux-pro-1.1-ultra-finetuned", base_url)
    }
}

impl GenerateTask for FluxPro11UltraFinetuned {}
