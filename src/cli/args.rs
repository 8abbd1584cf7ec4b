//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// deckgen - Build presentation assets for training videos
#[derive(Parser, Debug)]
#[command(name = "deckgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the deck project root
    #[arg(long)]
    pub project_root: PathBuf,

    /// Directory containing the source videos (defaults to the project
    /// root's parent)
    #[arg(long)]
    pub parent_dir: Option<PathBuf>,
}
