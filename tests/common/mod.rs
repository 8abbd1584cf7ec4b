use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run the binary with raw arguments and a scrubbed PATH.
#[allow(dead_code)]
pub fn run_deckgen(args: &[&str]) -> Output {
    TestProject::new().run_raw(args)
}

/// Isolated deck project rooted inside a temp directory.
///
/// The project root lives one level below the temp dir so the default
/// parent-dir resolution has a real directory to scan for videos. PATH is
/// pointed at an empty directory so engine probes never find a host
/// whisper install.
pub struct TestProject {
    dir: TempDir,
    root: PathBuf,
    empty_path: TempDir,
}

#[allow(dead_code)]
impl TestProject {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp project dir");
        let root = dir.path().join("deck");
        std::fs::create_dir_all(&root).expect("create project root");

        Self {
            dir,
            root,
            empty_path: tempfile::tempdir().expect("create empty PATH dir"),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Default videos directory (the project root's parent).
    pub fn videos_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn generated_dir(&self) -> PathBuf {
        self.root.join("assets").join("generated")
    }

    pub fn transcript_path(&self, key: &str) -> PathBuf {
        self.generated_dir().join("transcripts").join(format!("{}.txt", key))
    }

    pub fn summary_path(&self, key: &str) -> PathBuf {
        self.generated_dir()
            .join("summaries")
            .join(format!("{}_summary.md", key))
    }

    pub fn deck_data_path(&self) -> PathBuf {
        self.generated_dir().join("deck_data.json")
    }

    /// Run a full build against this project.
    pub fn build(&self) -> Output {
        let root = self.root.display().to_string();
        self.run_raw(&["--project-root", &root])
    }

    pub fn run_raw(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_deckgen"))
            .args(args)
            .env("PATH", self.empty_path.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to execute deckgen binary")
    }
}

#[allow(dead_code)]
pub fn assert_success(output: &Output, what: &str) {
    assert!(
        output.status.success(),
        "{} should succeed\nstdout:\n{}\nstderr:\n{}",
        what,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}
