//! Filesystem layout for one deck project.

use std::path::{Path, PathBuf};

use crate::Result;

/// Resolved paths for one project root and its source videos directory.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    videos_dir: PathBuf,
}

impl ProjectLayout {
    /// Resolve the layout. The videos directory defaults to the project
    /// root's parent.
    pub fn new(root: PathBuf, videos_dir: Option<PathBuf>) -> Self {
        let videos_dir = videos_dir.unwrap_or_else(|| {
            root.parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))
        });

        Self { root, videos_dir }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory scanned for source video files.
    pub fn videos_dir(&self) -> &Path {
        &self.videos_dir
    }

    /// Root of all generated assets.
    pub fn generated_dir(&self) -> PathBuf {
        self.root.join("assets").join("generated")
    }

    pub fn audio_dir(&self) -> PathBuf {
        self.generated_dir().join("audio")
    }

    pub fn transcript_dir(&self) -> PathBuf {
        self.generated_dir().join("transcripts")
    }

    pub fn summary_dir(&self) -> PathBuf {
        self.generated_dir().join("summaries")
    }

    pub fn deck_data_path(&self) -> PathBuf {
        self.generated_dir().join("deck_data.json")
    }

    pub fn audio_path(&self, key: &str) -> PathBuf {
        self.audio_dir().join(format!("{}.wav", key))
    }

    pub fn transcript_path(&self, key: &str) -> PathBuf {
        self.transcript_dir().join(format!("{}.txt", key))
    }

    pub fn summary_path(&self, key: &str) -> PathBuf {
        self.summary_dir().join(format!("{}_summary.md", key))
    }

    /// Ensure all generated-asset directories exist
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(self.audio_dir())?;
        std::fs::create_dir_all(self.transcript_dir())?;
        std::fs::create_dir_all(self.summary_dir())?;
        Ok(())
    }
}
