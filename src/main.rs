//! deckgen - Build presentation assets for training videos
//!
//! Entry point for the deckgen CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use deckgen::cli::{commands, Cli};
use deckgen::config::{ProjectLayout, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    let settings = Settings::load(&cli.project_root)?;
    let layout = ProjectLayout::new(cli.project_root, cli.parent_dir);

    commands::build_deck(&settings, &layout).await?;

    Ok(())
}
