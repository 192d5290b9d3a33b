use crate::core::error::{Result, VenvPipError};
use crate::core::CommandRunner;
use colored::Colorize;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENV_DIR_NAME: &str = ".venv";

pub fn resolve_env_path(target: &Path, env_dir_name: &str) -> PathBuf {
    // Compare raw bytes so non-UTF-8 names ending in the suffix still match.
    let already_env = target
        .file_name()
        .is_some_and(|n| n.as_encoded_bytes().ends_with(env_dir_name.as_bytes()));

    if already_env {
        target.to_path_buf()
    } else {
        target.join(env_dir_name)
    }
}

pub struct Provisioner<'a, R: CommandRunner> {
    runner: &'a R,
    interpreter: String,
    env_dir_name: String,
}

impl<'a, R: CommandRunner> Provisioner<'a, R> {
    pub fn new(runner: &'a R, interpreter: &str, env_dir_name: &str) -> Self {
        Self {
            runner,
            interpreter: interpreter.to_string(),
            env_dir_name: env_dir_name.to_string(),
        }
    }

    pub fn creation_argv(&self, env_path: &Path) -> Vec<OsString> {
        vec![
            OsString::from(&self.interpreter),
            OsString::from("-m"),
            OsString::from("venv"),
            env_path.as_os_str().to_os_string(),
        ]
    }

    /// Resolve the environment path and, when `create` is set, build the
    /// environment there. Nothing else should run after an `EnvCreation` error.
    pub async fn provision<W: Write>(
        &self,
        target: &Path,
        create: bool,
        out: &mut W,
    ) -> Result<PathBuf> {
        let env_path = resolve_env_path(target, &self.env_dir_name);

        if !create {
            // Existing environments are trusted as-is.
            writeln!(
                out,
                "{} Using existing virtual environment in {}",
                "ℹ".blue().bold(),
                env_path.display().to_string().yellow()
            )?;
            return Ok(env_path);
        }

        writeln!(
            out,
            "{} Creating virtual environment in {}...",
            "⚙".blue().bold(),
            env_path.display().to_string().yellow()
        )?;

        let stderr = match self.runner.execute(&self.creation_argv(&env_path)).await {
            Ok(output) if output.success() => None,
            Ok(output) => Some(output.diagnostic()),
            Err(e) => Some(e.to_string()),
        };

        if let Some(stderr) = stderr {
            writeln!(
                out,
                "{} Error creating virtual environment: {}",
                "✗".red().bold(),
                stderr
            )?;
            return Err(VenvPipError::EnvCreation {
                path: env_path,
                stderr,
            });
        }

        writeln!(
            out,
            "{} Virtual environment created successfully.",
            "✓".green().bold()
        )?;

        Ok(env_path)
    }
}
