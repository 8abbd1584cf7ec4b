//! Build settings management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{DeckgenError, Result};

/// Optional configuration file looked up in the project root.
const CONFIG_FILE: &str = "deckgen.toml";

/// Main build settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Whisper transcription settings
    #[serde(default)]
    pub whisper: WhisperSettings,

    /// Deck output settings
    #[serde(default)]
    pub deck: DeckSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperSettings {
    /// Whisper model to use (tiny, base, small, medium, large)
    #[serde(default = "default_model")]
    pub model: String,

    /// Directory holding ggml model files; relative paths resolve against
    /// the project root
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,

    /// Seconds to wait for a CLI candidate to answer `--help`
    #[serde(default = "default_probe_timeout")]
    pub cli_probe_timeout_secs: u64,

    /// Seconds to wait for one external transcription run
    #[serde(default = "default_transcribe_timeout")]
    pub transcribe_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckSettings {
    /// Prefix joined with a located video's file name in the manifest
    #[serde(default = "default_video_prefix")]
    pub video_prefix: String,

    /// Value recorded as each manifest entry's duration until real
    /// durations are extracted
    #[serde(default = "default_duration_placeholder")]
    pub duration_placeholder: String,
}

// Default value functions

fn default_model() -> String {
    "base".to_string()
}

fn default_models_dir() -> PathBuf {
    PathBuf::from("assets/models")
}

fn default_probe_timeout() -> u64 {
    10
}

fn default_transcribe_timeout() -> u64 {
    600
}

fn default_video_prefix() -> String {
    "../".to_string()
}

fn default_duration_placeholder() -> String {
    "Unknown".to_string()
}

impl Default for WhisperSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            models_dir: default_models_dir(),
            cli_probe_timeout_secs: default_probe_timeout(),
            transcribe_timeout_secs: default_transcribe_timeout(),
        }
    }
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            video_prefix: default_video_prefix(),
            duration_placeholder: default_duration_placeholder(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            whisper: WhisperSettings::default(),
            deck: DeckSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from `deckgen.toml` in the project root, if present.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&content).map_err(|e| {
            DeckgenError::Config(format!("{}: {}", config_path.display(), e))
        })?;

        Ok(settings)
    }

    /// Path to the ggml model file consumed by the whisper-rs binding.
    pub fn model_path(&self, project_root: &Path) -> PathBuf {
        let models_dir = if self.whisper.models_dir.is_absolute() {
            self.whisper.models_dir.clone()
        } else {
            project_root.join(&self.whisper.models_dir)
        };
        models_dir.join(format!("ggml-{}.bin", self.whisper.model))
    }
}
