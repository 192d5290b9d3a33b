use crate::config::{split_words, LiveCommand, OperationRequest};
use crate::core::error::{Result, VenvPipError};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::Path;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

pub struct Prompter<R, W> {
    input: R,
    output: W,
    clear: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, clear: bool) -> Self {
        Self {
            input,
            output,
            clear,
        }
    }

    pub fn clear_screen(&mut self) -> Result<()> {
        if self.clear {
            write!(self.output, "{}", CLEAR_SCREEN)?;
            self.output.flush()?;
        }
        Ok(())
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(VenvPipError::InvalidRequest(
                "input closed before all questions were answered".to_string(),
            ));
        }
        Ok(answer.trim().to_string())
    }

    fn live(&mut self, verb: &str, params: &[String], packages: &[String]) -> Result<()> {
        let live = LiveCommand {
            verb,
            params,
            packages,
        };
        writeln!(self.output, "{} {}", "LIVE COMMAND:".bold(), live)?;
        Ok(())
    }

    pub fn collect_request(&mut self, base_dir: &Path, env_dir_name: &str) -> Result<OperationRequest> {
        self.clear_screen()?;
        let repo_path = self.ask(&format!(
            "Enter the path to the repository directory (Will append `{}` to this, unless it ends in `{}`): ",
            env_dir_name, env_dir_name
        ))?;

        self.clear_screen()?;
        let verb = self
            .ask("Enter the pip command to use (e.g., install, uninstall): ")?
            .to_lowercase();

        self.clear_screen()?;
        self.live(&verb, &[], &[])?;
        let params = split_words(&self.ask("Enter any pip parameters (e.g., --no-cache --verbose -r): ")?);

        self.clear_screen()?;
        self.live(&verb, &params, &[])?;
        let packages = split_words(
            &self.ask("Enter the names of the packages to process (e.g., requests pandas numpy): ")?,
        );

        self.clear_screen()?;
        self.live(&verb, &params, &packages)?;
        let create = self
            .ask("Create a new virtual environment? (y/n): ")?
            .eq_ignore_ascii_case("y");

        self.clear_screen()?;
        self.say(&"LOGS:".bold().to_string())?;

        Ok(OperationRequest {
            target: crate::core::resolve_path(base_dir, &repo_path),
            verb,
            params,
            packages,
            create,
        })
    }
}
