//! Transcription engine availability probe.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::config::Settings;
use crate::engine::EngineKind;

/// CLI candidates tried in priority order, before the library binding.
const CLI_CANDIDATES: [EngineKind; 2] = [EngineKind::WhisperCli, EngineKind::FasterWhisperCli];

/// Detect the first available transcription engine, or `None`.
///
/// Runs once per invocation; the result is handed down the pipeline
/// explicitly rather than cached anywhere.
pub async fn detect_engine(settings: &Settings, project_root: &Path) -> Option<EngineKind> {
    let timeout = Duration::from_secs(settings.whisper.cli_probe_timeout_secs);

    for candidate in CLI_CANDIDATES {
        if let Some(command) = candidate.command() {
            if cli_responds(command, timeout).await {
                tracing::debug!("Probe: {} responded", command);
                return Some(candidate);
            }
        }
    }

    // The library binding is usable only with its model weights on disk.
    if settings.model_path(project_root).exists() {
        return Some(EngineKind::WhisperLib);
    }

    None
}

/// A CLI candidate counts as available if `<command> --help` can be spawned
/// and finishes within the timeout. The exit code is not checked.
async fn cli_responds(command: &str, timeout: Duration) -> bool {
    let status = Command::new(command)
        .arg("--help")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .status();

    matches!(tokio::time::timeout(timeout, status).await, Ok(Ok(_)))
}
