//! Generate a single image from a text prompt and download it.
//!
//! Requires a BFL API key in the BFL_API_KEY environment variable.
//!
//! ```sh
//! BFL_API_KEY=... cargo run --example generate_image
//! ```

use bfl_rs::{BflClient, FluxPro11, GenerateDetails, GenerateResult, PollOptions};
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

    let client = BflClient::from_env()?;

    let task = FluxPro11 {
        prompt: "a beautiful sunset over mountains, golden hour, photorealistic".to_string(),
        width: 1024,
        height: 768,
        ..Default::default()
    };

    // Submit, then poll the returned handle until the job leaves the queue
    let handle = client.submit(&task).await?;
    println!("Submitted job: {}", handle.id);

    let options = PollOptions::new(Duration::from_secs(120)).with_verbose(true);
    let envelope = client
        .poll::<GenerateResult, GenerateDetails>(&handle, &options)
        .await?;

    match envelope.result {
        Some(image) => {
            println!("Generated in {:.1}s (seed {})", image.duration, image.seed);

            // The sample URL is signed and expires, so download right away
            let bytes = reqwest::get(&image.sample_url).await?.bytes().await?;
            std::fs::write("sunset.jpg", &bytes)?;
            println!("Saved: sunset.jpg");
        }
        None => eprintln!("Job finished without a result payload"),
    }

    Ok(())
}
