//! NEST gateway recognition example
//!
//! Performs a single recognition call against the gateway with configuration
//! sourced from the environment.
//!
//! # Usage
//!
//! ```bash
//! NEST_SECRET_KEY=<secret> cargo run --example recognize --package nest-grpc -- sample.pcm
//! ```

use anyhow::Result;
use nest_core::{ClientConfig, RecognitionConfig, RecognitionRequest};
use nest_grpc::NestClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    tracing::info!("gateway endpoint: {}", config.endpoint);

    let audio = match std::env::args().nth(1) {
        Some(path) => std::fs::read(path)?,
        None => Vec::new(),
    };
    tracing::info!("audio payload: {} bytes", audio.len());

    let client = NestClient::new(config)?;

    let request = RecognitionRequest::new(RecognitionConfig::default(), audio);
    let result = client.recognize(request).await?;

    println!("{}", result.contents);

    client.close().await?;
    Ok(())
}
