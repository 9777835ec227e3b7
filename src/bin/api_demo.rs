//! Protocol Builder API demo.
//!
//! Walks the full endpoint surface of a running Protocol Builder server and
//! prints what comes back. Expects the server at http://localhost:3001 unless
//! `PB_BASE_URL` says otherwise.
//!
//! Usage:
//!   cargo run --bin api-demo
//!   PB_BASE_URL=http://localhost:8080 RUST_LOG=debug cargo run --bin api-demo

use protocol_builder_client::{demo, ApiClientBuilder, DEFAULT_BASE_URL};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    let base_url =
        std::env::var("PB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let client = ApiClientBuilder::new().base_url(&base_url).build()?;
    demo::run(&client).await?;
    Ok(())
}
