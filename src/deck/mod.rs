//! Deck artifact generation
//!
//! Renders curated summaries to markdown and assembles the deck manifest.

mod manifest;
mod summary;

pub use manifest::{build_manifest, write_manifest, DeckData, VideoEntry};
pub use summary::{render_markdown, write_summary};
