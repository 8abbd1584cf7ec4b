//! In-process transcription using whisper-rs

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::config::Settings;
use crate::engine::Transcriber;

/// Transcriber backed by the whisper-rs binding.
pub struct LibTranscriber {
    ctx: WhisperContext,
}

impl LibTranscriber {
    /// Load the configured ggml model.
    pub fn new(settings: &Settings, project_root: &Path) -> Result<Self> {
        let model_path = settings.model_path(project_root);

        if !model_path.exists() {
            anyhow::bail!(
                "Whisper model not found at {}. Place a ggml-{}.bin there to enable in-process transcription.",
                model_path.display(),
                settings.whisper.model
            );
        }

        let model_path = model_path
            .to_str()
            .context("Model path is not valid UTF-8")?;
        let ctx = WhisperContext::new_with_params(model_path, WhisperContextParameters::default())
            .context("Failed to load Whisper model")?;

        Ok(Self { ctx })
    }
}

#[async_trait]
impl Transcriber for LibTranscriber {
    fn name(&self) -> &'static str {
        "whisper-rs"
    }

    async fn transcribe(&self, audio_path: &Path, _transcript_dir: &Path) -> Result<String> {
        let samples = load_audio(audio_path)?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        let mut state = self
            .ctx
            .create_state()
            .context("Failed to create Whisper state")?;
        state
            .full(params, &samples)
            .context("Whisper inference failed")?;

        let num_segments = state
            .full_n_segments()
            .context("Failed to get segment count")?;

        let mut text = String::new();
        for i in 0..num_segments {
            let segment = state
                .full_get_segment_text(i)
                .context("Failed to get segment text")?;
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(segment);
        }

        if text.is_empty() {
            anyhow::bail!("Whisper inference produced no text");
        }

        Ok(text)
    }
}

/// Load a WAV file as f32 samples at 16kHz mono, the format Whisper expects.
fn load_audio(path: &Path) -> Result<Vec<f32>> {
    let reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open audio file: {}", path.display()))?;

    let spec = reader.spec();
    let channels = spec.channels as usize;

    let samples: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 16) => reader
            .into_samples::<i16>()
            .filter_map(|s| s.ok())
            .map(|s| s as f32 / 32768.0)
            .collect(),
        (hound::SampleFormat::Float, 32) => {
            reader.into_samples::<f32>().filter_map(|s| s.ok()).collect()
        }
        _ => anyhow::bail!(
            "Unsupported audio format: {:?} {}bit",
            spec.sample_format,
            spec.bits_per_sample
        ),
    };

    // Mix down to mono
    let samples = if channels > 1 {
        samples
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    // Whisper expects 16kHz input
    let samples = if spec.sample_rate != 16000 {
        resample(&samples, spec.sample_rate, 16000)
    } else {
        samples
    };

    Ok(samples)
}

/// Linear resampling, good enough for speech input.
fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    let ratio = from_rate as f64 / to_rate as f64;
    let new_len = (samples.len() as f64 / ratio) as usize;

    (0..new_len)
        .map(|i| {
            let src_pos = i as f64 * ratio;
            let src_idx = src_pos as usize;
            let frac = (src_pos - src_idx as f64) as f32;

            match (samples.get(src_idx), samples.get(src_idx + 1)) {
                (Some(a), Some(b)) => a * (1.0 - frac) + b * frac,
                (Some(a), None) => *a,
                _ => 0.0,
            }
        })
        .collect()
}
