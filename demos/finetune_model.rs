//! Fine-tune a FLUX model on a ZIP archive of training images.
//!
//! Requires a BFL API key in the BFL_API_KEY environment variable and a
//! training archive: a ZIP of images, optionally with matching caption
//! text files.
//!
//! ```sh
//! BFL_API_KEY=... cargo run --example finetune_model -- training_images.zip
//! ```

use bfl_rs::{BflClient, FinetuneMode, FluxFinetune, PollOptions};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bfl_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let archive_path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: finetune_model <training_archive.zip>");
            return Ok(());
        }
    };

    let client = BflClient::from_env()?;

    let archive = std::fs::read(&archive_path)?;
    println!("Read {} ({} bytes)", archive_path, archive.len());

    let task = FluxFinetune {
        finetune_comment: "my custom style".to_string(),
        mode: FinetuneMode::Style,
        ..Default::default()
    }
    .with_training_archive(&archive);

    // Fine-tuning runs for a long time; poll slowly with a long deadline
    let options = PollOptions::new(Duration::from_secs(3600))
        .with_interval(Duration::from_secs(5))
        .with_verbose(true);
    let envelope = client.finetune(&task, &options).await?;

    println!("Fine-tune job {} finished: {}", envelope.id, envelope.status);
    println!("Pass it as finetune_id to the *-finetuned endpoints");

    Ok(())
}
