use crate::cli::commands::{run, Context};
use crate::cli::prompt::Prompter;
use crate::core::error::Result;
use std::env;
use std::io::{self, IsTerminal};

pub async fn execute(ctx: &Context, no_clear: bool) -> Result<()> {
    let current_dir = env::current_dir()?;
    let settings = ctx.settings(false);

    let stdout = io::stdout();
    let clear = !no_clear && stdout.is_terminal();

    let request = {
        let mut prompter = Prompter::new(io::stdin().lock(), stdout.lock(), clear);
        prompter.collect_request(&current_dir, &settings.env_dir_name)?
    };

    run::process(&settings, &request, false).await
}
