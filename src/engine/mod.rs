//! Transcription engine integration
//!
//! Probes for an available speech-to-text capability and wraps whichever
//! one answered behind a common trait.

mod cli;
mod probe;
mod whisper;

pub use probe::detect_engine;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::config::Settings;

/// A probed transcription capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// External `whisper` CLI
    WhisperCli,
    /// External `faster-whisper` CLI
    FasterWhisperCli,
    /// In-process whisper-rs binding
    WhisperLib,
}

impl EngineKind {
    /// Executable name, for the CLI engines.
    pub fn command(&self) -> Option<&'static str> {
        match self {
            Self::WhisperCli => Some("whisper"),
            Self::FasterWhisperCli => Some("faster-whisper"),
            Self::WhisperLib => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WhisperCli => "whisper",
            Self::FasterWhisperCli => "faster-whisper",
            Self::WhisperLib => "whisper-rs",
        }
    }
}

/// One transcription backend.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Engine name for log lines.
    fn name(&self) -> &'static str;

    /// Produce plain transcript text for one audio file.
    ///
    /// CLI engines also write their own text file into `transcript_dir`;
    /// the returned string is the trimmed transcript content either way.
    /// An `Ok` value is never empty.
    async fn transcribe(&self, audio_path: &Path, transcript_dir: &Path) -> Result<String>;
}

/// Build a transcriber from a probe result and runtime settings.
pub fn build_transcriber(
    kind: EngineKind,
    settings: &Settings,
    project_root: &Path,
) -> Result<Box<dyn Transcriber>> {
    if let Some(command) = kind.command() {
        return Ok(Box::new(cli::CliTranscriber::new(command, settings)));
    }

    Ok(Box::new(whisper::LibTranscriber::new(
        settings,
        project_root,
    )?))
}
