//! External whisper CLI invocation.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::config::Settings;
use crate::engine::Transcriber;

/// Transcriber backed by an external whisper-style CLI.
pub struct CliTranscriber {
    command: &'static str,
    model: String,
    timeout: Duration,
}

impl CliTranscriber {
    pub fn new(command: &'static str, settings: &Settings) -> Self {
        Self {
            command,
            model: settings.whisper.model.clone(),
            timeout: Duration::from_secs(settings.whisper.transcribe_timeout_secs),
        }
    }
}

#[async_trait]
impl Transcriber for CliTranscriber {
    fn name(&self) -> &'static str {
        self.command
    }

    async fn transcribe(&self, audio_path: &Path, transcript_dir: &Path) -> Result<String> {
        let output = Command::new(self.command)
            .arg(audio_path)
            .arg("--model")
            .arg(&self.model)
            .arg("--output_format")
            .arg("txt")
            .arg("--output_dir")
            .arg(transcript_dir)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, output)
            .await
            .with_context(|| format!("{} timed out", self.command))?
            .with_context(|| format!("Failed to run {}", self.command))?;

        if !output.status.success() {
            anyhow::bail!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        // The CLI names its text output after the audio file stem.
        let stem = audio_path
            .file_stem()
            .with_context(|| format!("Audio path has no file stem: {}", audio_path.display()))?;
        let text_path = transcript_dir.join(format!("{}.txt", stem.to_string_lossy()));

        let text = std::fs::read_to_string(&text_path).with_context(|| {
            format!("Missing transcription output: {}", text_path.display())
        })?;

        let text = text.trim();
        if text.is_empty() {
            anyhow::bail!("{} produced an empty transcript", self.command);
        }

        Ok(text.to_string())
    }
}
