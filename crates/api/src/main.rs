//! RoadQuest entry point
//!
//! Loads configuration, assembles the podium against the configured
//! recommendation service, and prints it as JSON. Useful as a smoke test of
//! the whole flow without a frontend attached.

use anyhow::Context;
use roadquest_api::{get_podium, AppContext};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = roadquest_infra::config::load().context("failed to load configuration")?;
    let ctx = AppContext::new(config).context("failed to build application context")?;

    let podium = get_podium(&ctx).await.context("failed to assemble podium")?;
    println!("{}", serde_json::to_string_pretty(&podium)?);

    Ok(())
}
