//! deckgen - Build presentation assets for training videos
//!
//! Produces transcripts, structured summaries, and a JSON deck manifest
//! for a fixed catalog of training videos.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod deck;
pub mod engine;
pub mod locate;
pub mod transcribe;

use thiserror::Error;

/// Main error type for deckgen
#[derive(Error, Debug)]
pub enum DeckgenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Curated data error: {0}")]
    Data(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DeckgenError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "deckgen";
