//! CLI command implementation

use anyhow::Result;

use crate::catalog::CATALOG;
use crate::config::{ProjectLayout, Settings};
use crate::deck;
use crate::engine;
use crate::transcribe;

/// Run the full deck build: transcripts, then summaries, then the manifest.
pub async fn build_deck(settings: &Settings, layout: &ProjectLayout) -> Result<()> {
    layout.ensure_dirs()?;

    println!();
    println!("=== Deck Builder ===");
    println!();

    // Probe once per invocation; the result travels down the pipeline
    // explicitly.
    let transcriber = match engine::detect_engine(settings, layout.root()).await {
        Some(kind) => match engine::build_transcriber(kind, settings, layout.root()) {
            Ok(transcriber) => {
                println!("Engine: {}", transcriber.name());
                Some(transcriber)
            }
            Err(e) => {
                tracing::warn!("Engine {} is unusable: {:#}", kind.label(), e);
                println!("Engine: {} unusable (will use fallback transcripts)", kind.label());
                None
            }
        },
        None => {
            println!("Engine: not found (will use fallback transcripts)");
            None
        }
    };

    println!();
    println!("--- Transcription ---");
    let transcripts = transcribe::acquire_all(CATALOG, layout, transcriber.as_deref()).await?;
    // Transcripts are persisted for the presentation layer; the summaries
    // below are curated content, not derived from them.
    tracing::debug!("Resolved {} transcripts", transcripts.len());

    println!();
    println!("--- Summaries ---");
    for spec in CATALOG {
        let record = spec.summary()?;
        deck::write_summary(&layout.summary_path(spec.key), &record)?;
        println!("  {}: [OK]", spec.key);
    }

    println!();
    println!("--- Deck Data ---");
    let manifest = deck::build_manifest(CATALOG, settings, layout)?;
    let data_path = layout.deck_data_path();
    deck::write_manifest(&data_path, &manifest)?;
    println!("  [OK] {}", data_path.display());

    println!();
    println!("=== Done ===");
    println!();

    Ok(())
}
