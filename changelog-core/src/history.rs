//! History extraction via `git log`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{ChangelogError, Result};

/// Arguments passed to git: the full history, rename and copy aware, one
/// status line per changed file per commit.
pub const LOG_ARGS: [&str; 5] = [
    "log",
    "--no-color",
    "--find-renames",
    "--find-copies",
    "--name-status",
];

#[derive(Debug, Clone)]
pub struct HistoryExtractor {
    git: PathBuf,
    repo_dir: Option<PathBuf>,
}

impl HistoryExtractor {
    /// Find `git` on `PATH`.
    pub fn locate() -> Result<Self> {
        let git = which::which("git")
            .map_err(|e| ChangelogError::Extraction(format!("git not found on PATH: {e}")))?;
        Ok(Self::with_program(git))
    }

    /// Use a specific git executable.
    pub fn with_program(git: impl Into<PathBuf>) -> Self {
        Self {
            git: git.into(),
            repo_dir: None,
        }
    }

    /// Run git in `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.repo_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.git
    }

    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.git);
        if let Some(dir) = &self.repo_dir {
            command.current_dir(dir);
        }
        command
            .args(LOG_ARGS)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }

    /// Run git to completion and return its stdout as text.
    pub fn extract(&self) -> Result<String> {
        self.capture(self.command())
    }

    fn capture(&self, mut command: Command) -> Result<String> {
        debug!(command = %render_command(&command), "extracting history");

        let output = command.output().map_err(|e| {
            ChangelogError::Extraction(format!("running {}: {e}", self.git.display()))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ChangelogError::Extraction(format!(
                "`{}` exited with {}: {}",
                render_command(&command),
                output.status,
                stderr.trim()
            )));
        }

        debug!(bytes = output.stdout.len(), "history captured");
        String::from_utf8(output.stdout)
            .map_err(|e| ChangelogError::Extraction(format!("git output is not valid UTF-8: {e}")))
    }
}

fn render_command(command: &Command) -> String {
    let mut parts = vec![command.get_program().to_string_lossy().into_owned()];
    parts.extend(command.get_args().map(|arg| arg.to_string_lossy().into_owned()));
    parts.join(" ")
}
