use crate::cli::commands::Context;
use crate::cli::RunArgs;
use crate::config::{validate_request, validate_settings, OperationRequest, Settings};
use crate::core::error::{Result, VenvPipError};
use crate::core::{resolve_path, ProcessExecutor};
use crate::operation::create_and_process;
use crate::pip::{PackageOutcome, RunReport};
use colored::Colorize;
use std::env;
use std::io;

pub async fn execute(
    ctx: &Context,
    verb: String,
    packages: Vec<String>,
    args: RunArgs,
) -> Result<()> {
    let current_dir = env::current_dir()?;

    let request = OperationRequest {
        target: resolve_path(&current_dir, &args.path),
        verb: verb.to_lowercase(),
        params: args.all_params(),
        packages,
        create: args.create,
    };

    process(&ctx.settings(args.strict), &request, args.json).await
}

pub async fn process(settings: &Settings, request: &OperationRequest, json: bool) -> Result<()> {
    validate_settings(settings)?;
    validate_request(request)?;

    let executor = ProcessExecutor::new();
    let report = create_and_process(&executor, settings, request, &mut io::stdout()).await?;

    print_summary(&report);

    if json {
        println!("{}", report.to_json()?);
    }

    check_strict(&report, settings.strict)
}

fn print_summary(report: &RunReport) {
    if report.packages.is_empty() {
        return;
    }

    println!();
    for entry in &report.packages {
        let status = match entry.outcome {
            PackageOutcome::SucceededPrimary => "✓ pip".green(),
            PackageOutcome::SucceededFallback { .. } => "✓ -m pip".yellow(),
            PackageOutcome::Failed { .. } => "✗ failed".red(),
        };
        println!("  {} {}", status.bold(), entry.package.cyan());
    }
}

fn check_strict(report: &RunReport, strict: bool) -> Result<()> {
    let failed = report.failed_count();
    if strict && failed > 0 {
        return Err(VenvPipError::PackagesFailed {
            failed,
            total: report.packages.len(),
        });
    }
    Ok(())
}
