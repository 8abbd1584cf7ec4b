//! Static catalog of tracked videos.
//!
//! The curated summary records and fallback transcripts are versioned data
//! files under `data/`, embedded at compile time. The catalog itself is
//! fixed at process start and immutable.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{DeckgenError, Result};

/// Static description of one tracked video.
#[derive(Debug)]
pub struct VideoSpec {
    /// Logical video id, also the stem of its audio/transcript files
    pub key: &'static str,

    /// Case-insensitive substring matched against source file names
    pub pattern: &'static str,

    /// Expected video file extension, without the leading dot
    pub extension: &'static str,

    /// Curated transcript used when no cache and no engine are available
    pub fallback_transcript: &'static str,

    summary_json: &'static str,
}

/// Curated summary record for one video.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRecord {
    /// Markdown document title
    pub title: String,

    /// Ordered sections: a list of bullet strings, or a grouped mapping of
    /// sub-section name to bullet strings
    pub sections: Map<String, Value>,
}

/// All tracked videos, in deck order.
pub const CATALOG: &[VideoSpec] = &[
    VideoSpec {
        key: "v1",
        pattern: "Jewkes2021ElemOf_Video",
        extension: "mp4",
        fallback_transcript: include_str!("../data/fallbacks/v1.txt"),
        summary_json: include_str!("../data/summaries/v1.json"),
    },
    VideoSpec {
        key: "v2",
        pattern: "Morales2026THRIVE-Belize",
        extension: "mp4",
        fallback_transcript: include_str!("../data/fallbacks/v2.txt"),
        summary_json: include_str!("../data/summaries/v2.json"),
    },
    VideoSpec {
        key: "v3",
        pattern: "Morales2026TheManBox",
        extension: "mp4",
        fallback_transcript: include_str!("../data/fallbacks/v3.txt"),
        summary_json: include_str!("../data/summaries/v3.json"),
    },
];

impl VideoSpec {
    /// Parse this video's curated summary record.
    ///
    /// Section order follows the data file's declaration order.
    pub fn summary(&self) -> Result<SummaryRecord> {
        serde_json::from_str(self.summary_json).map_err(|e| {
            DeckgenError::Data(format!("summary record for {}: {}", self.key, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_videos_in_deck_order() {
        let keys: Vec<_> = CATALOG.iter().map(|spec| spec.key).collect();
        assert_eq!(keys, ["v1", "v2", "v3"]);
    }

    #[test]
    fn every_summary_record_parses() {
        for spec in CATALOG {
            let record = spec.summary().expect("summary data file should parse");
            assert!(!record.title.is_empty());
            assert!(!record.sections.is_empty());
        }
    }

    #[test]
    fn sections_keep_declaration_order() {
        let record = CATALOG[0].summary().unwrap();
        let names: Vec<_> = record.sections.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            [
                "design_elements",
                "implementation_elements",
                "specialist_toolkit_elements",
                "so_what",
            ]
        );
    }

    #[test]
    fn grouped_sections_keep_declaration_order() {
        let record = CATALOG[1].summary().unwrap();
        let clusters = record.sections.get("clusters").unwrap();
        let names: Vec<_> = clusters
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, ["self", "relationships", "community"]);
    }

    #[test]
    fn fallback_transcripts_are_single_nonempty_lines() {
        for spec in CATALOG {
            assert!(!spec.fallback_transcript.trim().is_empty());
            assert!(!spec.fallback_transcript.contains('\n'));
        }
    }
}
