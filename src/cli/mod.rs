pub mod commands;
pub mod prompt;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "venv-pip",
    version,
    about = "Create a Python virtual environment and install or uninstall packages into it with pip",
    long_about = None
)]
pub struct Cli {
    /// Config file (default: per-user config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Python interpreter used for `-m venv` and the `-m pip` fallback
    #[arg(long, global = true, env = "VENV_PIP_PYTHON", value_name = "PYTHON")]
    pub python: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Repository directory (the environment directory name is appended unless already present)
    #[arg(long, default_value = ".")]
    pub path: String,

    /// Create a new virtual environment before running pip
    #[arg(short, long)]
    pub create: bool,

    /// Extra pip parameter; can be repeated (e.g., -p --no-cache-dir)
    #[arg(short = 'p', long = "param", allow_hyphen_values = true, value_name = "PARAM")]
    pub params: Vec<String>,

    /// Print a JSON report after the log
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 if any package operation fails
    #[arg(long)]
    pub strict: bool,

    /// Extra pip parameters after `--`
    #[arg(last = true, value_name = "PIP_ARGS")]
    pub trailing: Vec<String>,
}

impl RunArgs {
    pub fn all_params(&self) -> Vec<String> {
        self.params
            .iter()
            .chain(self.trailing.iter())
            .cloned()
            .collect()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run any pip command for each package
    Run {
        /// pip command (e.g., install, uninstall, download)
        verb: String,

        /// Packages to process, in order
        packages: Vec<String>,

        #[command(flatten)]
        args: RunArgs,
    },

    /// Install packages (shortcut for 'run install')
    Install {
        /// Packages to install, in order
        packages: Vec<String>,

        #[command(flatten)]
        args: RunArgs,
    },

    /// Uninstall packages (shortcut for 'run uninstall')
    Uninstall {
        /// Packages to uninstall, in order
        packages: Vec<String>,

        #[command(flatten)]
        args: RunArgs,
    },

    /// Answer prompts to build and run a request (default when no command is given)
    Interactive {
        /// Do not clear the screen between prompts
        #[arg(long)]
        no_clear: bool,
    },

    /// Show the config file location and effective settings
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,
    },
}

pub async fn run(cli: Cli) -> crate::core::error::Result<()> {
    let ctx = commands::Context::load(cli.config, cli.python).await?;

    match cli.command {
        Some(Commands::Run {
            verb,
            packages,
            args,
        }) => commands::run::execute(&ctx, verb, packages, args).await,

        Some(Commands::Install { packages, args }) => {
            commands::run::execute(&ctx, "install".to_string(), packages, args).await
        }

        Some(Commands::Uninstall { packages, args }) => {
            commands::run::execute(&ctx, "uninstall".to_string(), packages, args).await
        }

        Some(Commands::Interactive { no_clear }) => {
            commands::interactive::execute(&ctx, no_clear).await
        }

        Some(Commands::Config { init }) => commands::config::execute(&ctx, init).await,

        None => commands::interactive::execute(&ctx, false).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_collects_params_from_flags_and_trailing() {
        let cli = Cli::try_parse_from([
            "venv-pip",
            "install",
            "requests",
            "numpy",
            "--path",
            "proj",
            "-p",
            "--no-cache-dir",
            "--",
            "--upgrade",
            "-q",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Install { packages, args }) => {
                assert_eq!(packages, vec!["requests", "numpy"]);
                assert_eq!(args.path, "proj");
                assert!(!args.create);
                assert_eq!(args.all_params(), vec!["--no-cache-dir", "--upgrade", "-q"]);
            }
            _ => panic!("expected install"),
        }
    }

    #[test]
    fn run_takes_verb_first() {
        let cli = Cli::try_parse_from(["venv-pip", "run", "download", "wheel", "--create", "--strict"])
            .unwrap();

        match cli.command {
            Some(Commands::Run {
                verb,
                packages,
                args,
            }) => {
                assert_eq!(verb, "download");
                assert_eq!(packages, vec!["wheel"]);
                assert!(args.create);
                assert!(args.strict);
                assert_eq!(args.path, ".");
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["venv-pip", "--python", "python3.12"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.python.as_deref(), Some("python3.12"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
