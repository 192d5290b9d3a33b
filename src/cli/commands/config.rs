use crate::cli::commands::Context;
use crate::core::error::Result;
use colored::Colorize;

pub async fn execute(ctx: &Context, init: bool) -> Result<()> {
    let path = ctx.config_mgr.config_path().display().to_string();

    if init {
        ctx.config_mgr.init().await?;
        println!("{} Wrote default config to {}", "✓".green().bold(), path.yellow());
        return Ok(());
    }

    let settings = ctx.settings(false);
    let state = if ctx.config_mgr.exists() {
        "found".green()
    } else {
        "not found, using defaults".yellow()
    };

    println!("{} {} ({})", "Config file:".bold(), path, state);
    println!("  Interpreter: {}", settings.interpreter.cyan());
    println!("  Layout: {}", settings.layout.to_str().cyan());
    println!(
        "  Environment directory: {}",
        settings.env_dir_name.cyan()
    );
    println!(
        "  Strict: {}",
        settings.strict.to_string().cyan()
    );

    Ok(())
}
