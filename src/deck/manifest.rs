//! Deck manifest assembly and serialization.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

use crate::catalog::VideoSpec;
use crate::config::{ProjectLayout, Settings};
use crate::locate::find_video;

/// Top-level manifest document consumed by the slide renderer.
#[derive(Debug, Serialize)]
pub struct DeckData {
    pub videos: Map<String, Value>,
}

/// One manifest entry.
#[derive(Debug, Serialize)]
pub struct VideoEntry {
    /// Relative path to the located video, or null when none was found
    pub filename: Option<String>,

    /// Duration placeholder until real durations are extracted
    pub duration: String,

    /// Curated summary sections
    pub summary: Map<String, Value>,
}

/// Assemble the manifest: one entry per catalog key, in catalog order.
///
/// A missing video file becomes a null `filename`, not an error.
pub fn build_manifest(
    catalog: &[VideoSpec],
    settings: &Settings,
    layout: &ProjectLayout,
) -> Result<DeckData> {
    let mut videos = Map::new();

    for spec in catalog {
        let located = find_video(layout.videos_dir(), spec.pattern, spec.extension)?;
        let filename = located.and_then(|path| {
            path.file_name().map(|name| {
                format!("{}{}", settings.deck.video_prefix, name.to_string_lossy())
            })
        });

        let record = spec.summary()?;
        let entry = VideoEntry {
            filename,
            duration: settings.deck.duration_placeholder.clone(),
            summary: record.sections,
        };

        videos.insert(spec.key.to_string(), serde_json::to_value(entry)?);
    }

    Ok(DeckData { videos })
}

/// Serialize the manifest with 2-space indentation and write it, replacing
/// any previous file. Non-ASCII text is preserved unescaped.
pub fn write_manifest(path: &Path, deck: &DeckData) -> Result<()> {
    let json = serde_json::to_string_pretty(deck)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write manifest: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use std::path::PathBuf;

    fn test_layout(videos_dir: &Path) -> ProjectLayout {
        ProjectLayout::new(
            PathBuf::from("/tmp/deckgen-tests/deck"),
            Some(videos_dir.to_path_buf()),
        )
    }

    #[test]
    fn located_video_gets_prefixed_relative_filename() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Morales2026THRIVE-Belize_final.mp4"), b"").unwrap();

        let deck =
            build_manifest(CATALOG, &Settings::default(), &test_layout(dir.path())).unwrap();

        let v2 = deck.videos.get("v2").unwrap();
        assert_eq!(
            v2.get("filename").unwrap(),
            "../Morales2026THRIVE-Belize_final.mp4"
        );
    }

    #[test]
    fn missing_video_yields_null_filename() {
        let dir = tempfile::tempdir().unwrap();

        let deck =
            build_manifest(CATALOG, &Settings::default(), &test_layout(dir.path())).unwrap();

        for spec in CATALOG {
            let entry = deck.videos.get(spec.key).unwrap();
            assert!(entry.get("filename").unwrap().is_null());
            assert_eq!(entry.get("duration").unwrap(), "Unknown");
            assert!(entry.get("summary").unwrap().is_object());
        }
    }

    #[test]
    fn entries_follow_catalog_order() {
        let dir = tempfile::tempdir().unwrap();

        let deck =
            build_manifest(CATALOG, &Settings::default(), &test_layout(dir.path())).unwrap();

        let keys: Vec<_> = deck.videos.keys().map(String::as_str).collect();
        assert_eq!(keys, ["v1", "v2", "v3"]);
    }

    #[test]
    fn serialization_uses_two_space_indent_and_unescaped_text() {
        let mut summary = Map::new();
        summary.insert(
            "notes".to_string(),
            Value::Array(vec![Value::String("café".to_string())]),
        );
        let entry = VideoEntry {
            filename: None,
            duration: "Unknown".to_string(),
            summary,
        };
        let mut videos = Map::new();
        videos.insert("v1".to_string(), serde_json::to_value(entry).unwrap());
        let deck = DeckData { videos };

        let json = serde_json::to_string_pretty(&deck).unwrap();
        assert!(json.contains("\n  \"videos\""));
        assert!(json.contains("\"filename\": null"));
        assert!(json.contains("café"), "non-ASCII must stay unescaped");
    }

    #[test]
    fn write_manifest_overwrites_existing_file() {
        let videos_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let path = out_dir.path().join("deck_data.json");
        std::fs::write(&path, "stale").unwrap();

        let deck =
            build_manifest(CATALOG, &Settings::default(), &test_layout(videos_dir.path()))
                .unwrap();
        write_manifest(&path, &deck).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with('{'));
        let parsed: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.get("videos").unwrap().as_object().unwrap().len(), 3);
    }
}
