//! Transcript acquisition
//!
//! Resolves one transcript per catalog key: cached file first, then the
//! probed engine, then the curated fallback string.

use anyhow::{Context, Result};
use std::collections::BTreeMap;

use crate::catalog::VideoSpec;
use crate::config::ProjectLayout;
use crate::engine::Transcriber;

/// Resolve transcripts for every catalog entry, in catalog order.
///
/// Each key is fully resolved and persisted before the next begins. Engine
/// failures degrade to the curated fallback and never abort the run.
pub async fn acquire_all(
    catalog: &[VideoSpec],
    layout: &ProjectLayout,
    transcriber: Option<&dyn Transcriber>,
) -> Result<BTreeMap<String, String>> {
    let mut transcripts = BTreeMap::new();

    for spec in catalog {
        let text = acquire_one(spec, layout, transcriber).await?;
        transcripts.insert(spec.key.to_string(), text);
    }

    Ok(transcripts)
}

/// Resolve one transcript, stopping at the first source that succeeds.
pub async fn acquire_one(
    spec: &VideoSpec,
    layout: &ProjectLayout,
    transcriber: Option<&dyn Transcriber>,
) -> Result<String> {
    let transcript_path = layout.transcript_path(spec.key);

    // Reuse a cached transcript if it has any content
    if transcript_path.exists() {
        let text = std::fs::read_to_string(&transcript_path).with_context(|| {
            format!("Failed to read transcript: {}", transcript_path.display())
        })?;
        let text = text.trim();
        if !text.is_empty() {
            tracing::info!("{}: using existing transcript", spec.key);
            return Ok(text.to_string());
        }
    }

    let audio_path = layout.audio_path(spec.key);
    if audio_path.exists() {
        if let Some(engine) = transcriber {
            tracing::info!("{}: transcribing with {}", spec.key, engine.name());

            match engine.transcribe(&audio_path, &layout.transcript_dir()).await {
                Ok(text) => {
                    std::fs::write(&transcript_path, &text).with_context(|| {
                        format!("Failed to write transcript: {}", transcript_path.display())
                    })?;
                    tracing::info!("{}: transcribed", spec.key);
                    return Ok(text);
                }
                Err(e) => {
                    tracing::warn!("{}: transcription failed, falling back: {:#}", spec.key, e);
                }
            }
        }
    }

    tracing::info!("{}: using fallback transcript", spec.key);
    std::fs::write(&transcript_path, spec.fallback_transcript).with_context(|| {
        format!("Failed to write transcript: {}", transcript_path.display())
    })?;

    Ok(spec.fallback_transcript.to_string())
}
