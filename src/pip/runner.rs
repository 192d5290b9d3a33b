use crate::core::error::Result;
use crate::core::CommandRunner;
use crate::pip::outcome::{PackageOutcome, RunReport};
use crate::venv::PlatformLayout;
use colored::Colorize;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

pub const COMPLETION_MARKER: &str = "Packages process completed.";

pub struct PackageRunner<'a, R: CommandRunner> {
    runner: &'a R,
    interpreter: String,
    layout: PlatformLayout,
}

impl<'a, R: CommandRunner> PackageRunner<'a, R> {
    pub fn new(runner: &'a R, interpreter: &str, layout: PlatformLayout) -> Self {
        Self {
            runner,
            interpreter: interpreter.to_string(),
            layout,
        }
    }

    pub fn primary_argv(
        &self,
        env_path: &Path,
        verb: &str,
        params: &[String],
        package: &str,
    ) -> Vec<OsString> {
        let pip = self.layout.executable(env_path, "pip");
        let mut argv = vec![pip.into_os_string(), OsString::from(verb)];
        argv.extend(params.iter().map(OsString::from));
        argv.push(OsString::from(package));
        argv
    }

    pub fn fallback_argv(&self, verb: &str, params: &[String], package: &str) -> Vec<OsString> {
        let mut argv = vec![
            OsString::from(&self.interpreter),
            OsString::from("-m"),
            OsString::from("pip"),
            OsString::from(verb),
        ];
        argv.extend(params.iter().map(OsString::from));
        argv.push(OsString::from(package));
        argv
    }

    // Err carries the diagnostic of a failed or unspawnable process.
    async fn attempt(&self, argv: &[OsString]) -> std::result::Result<(), String> {
        match self.runner.execute(argv).await {
            Ok(output) if output.success() => Ok(()),
            Ok(output) => Err(output.diagnostic()),
            Err(e) => Err(e.to_string()),
        }
    }

    pub async fn run_package<W: Write>(
        &self,
        env_path: &Path,
        verb: &str,
        params: &[String],
        package: &str,
        out: &mut W,
    ) -> Result<PackageOutcome> {
        writeln!(
            out,
            "{} Attempting to {} {}...",
            "→".blue().bold(),
            verb,
            package.cyan()
        )?;

        let primary_error = match self
            .attempt(&self.primary_argv(env_path, verb, params, package))
            .await
        {
            Ok(()) => {
                writeln!(
                    out,
                    "{} {} {}ed successfully using pip.",
                    "✓".green().bold(),
                    package.cyan(),
                    verb
                )?;
                return Ok(PackageOutcome::SucceededPrimary);
            }
            Err(e) => e,
        };

        writeln!(
            out,
            "{} Error {}ing {} with pip: {}",
            "✗".red().bold(),
            verb,
            package.cyan(),
            primary_error
        )?;
        writeln!(out, "  Trying with {} -m pip...", self.interpreter)?;

        let outcome = match self
            .attempt(&self.fallback_argv(verb, params, package))
            .await
        {
            Ok(()) => {
                writeln!(
                    out,
                    "{} {} {}ed successfully using {} -m pip.",
                    "✓".green().bold(),
                    package.cyan(),
                    verb,
                    self.interpreter
                )?;
                PackageOutcome::SucceededFallback { primary_error }
            }
            Err(fallback_error) => {
                writeln!(
                    out,
                    "{} Error {}ing {} with {} -m pip: {}",
                    "✗".red().bold(),
                    verb,
                    package.cyan(),
                    self.interpreter,
                    fallback_error
                )?;
                writeln!(
                    out,
                    "{} Failed to {} {}. Please check the error message and try again manually.",
                    "✗".red().bold(),
                    verb,
                    package.cyan()
                )?;
                PackageOutcome::Failed {
                    primary_error,
                    fallback_error,
                }
            }
        };

        Ok(outcome)
    }

    /// Process every package in order. A failing package never stops the
    /// ones after it.
    pub async fn run<W: Write>(
        &self,
        env_path: &Path,
        packages: &[String],
        verb: &str,
        params: &[String],
        out: &mut W,
    ) -> Result<RunReport> {
        let mut report = RunReport::new(verb, env_path.to_path_buf());

        for package in packages {
            let outcome = self
                .run_package(env_path, verb, params, package, out)
                .await?;
            tracing::debug!("{}: {}", package, outcome.label());
            report.push(package, outcome);
        }

        writeln!(out, "{}", COMPLETION_MARKER.bold())?;
        Ok(report)
    }
}
