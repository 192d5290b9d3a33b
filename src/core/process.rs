use crate::core::error::{Result, VenvPipError};
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::io::IsTerminal;
use std::time::Duration;
use tokio::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

// `Err` only when the process could not be started; non-zero exits come back in `CapturedOutput`.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn execute(&self, argv: &[OsString]) -> Result<CapturedOutput>;
}

pub fn display_argv(argv: &[OsString]) -> String {
    argv.iter()
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct ProcessExecutor {
    spinner: bool,
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self {
            spinner: std::io::stdout().is_terminal(),
        }
    }

    pub fn with_spinner(mut self, spinner: bool) -> Self {
        self.spinner = spinner;
        self
    }

    fn start_spinner(&self, label: &str) -> Result<Option<ProgressBar>> {
        if !self.spinner {
            return Ok(None);
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed}] {msg}")
                .map_err(|e| anyhow::anyhow!("invalid spinner template: {}", e))?,
        );
        pb.set_message(label.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Ok(Some(pb))
    }
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessExecutor {
    async fn execute(&self, argv: &[OsString]) -> Result<CapturedOutput> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| VenvPipError::CommandFailed("empty command line".to_string()))?;

        let line = display_argv(argv);
        tracing::debug!("exec: {}", line);

        let spinner = self.start_spinner(&line)?;

        let output = Command::new(program).args(args).output().await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        let output = output.map_err(|e| {
            VenvPipError::CommandFailed(format!("{}: {}", program.to_string_lossy(), e))
        })?;

        let captured = CapturedOutput {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        tracing::debug!("exit {}: {}", captured.exit_code, program.to_string_lossy());

        Ok(captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_prefers_stderr() {
        let out = CapturedOutput {
            exit_code: 1,
            stdout: "some progress\n".to_string(),
            stderr: "ERROR: No matching distribution\n".to_string(),
        };
        assert_eq!(out.diagnostic(), "ERROR: No matching distribution");
        assert!(!out.success());
    }

    #[test]
    fn diagnostic_falls_back_to_stdout() {
        let out = CapturedOutput {
            exit_code: 2,
            stdout: "  WARNING: Skipping foo as it is not installed.\n".to_string(),
            stderr: String::new(),
        };
        assert_eq!(
            out.diagnostic(),
            "WARNING: Skipping foo as it is not installed."
        );
    }

    #[tokio::test]
    async fn empty_argv_is_rejected() {
        let executor = ProcessExecutor::new().with_spinner(false);
        let err = executor.execute(&[]).await.unwrap_err();
        assert!(err.to_string().contains("empty command line"));
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let executor = ProcessExecutor::new().with_spinner(false);
        let argv = vec![OsString::from("venv-pip-definitely-not-a-real-binary")];
        let err = executor.execute(&argv).await.unwrap_err();
        assert!(matches!(err, VenvPipError::CommandFailed(_)));
    }
}
