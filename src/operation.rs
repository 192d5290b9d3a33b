use crate::config::{OperationRequest, Settings};
use crate::core::error::Result;
use crate::core::CommandRunner;
use crate::pip::{PackageRunner, RunReport};
use crate::venv::Provisioner;
use std::io::Write;

/// Provision the environment, then run the package operations against it.
/// No package is attempted when creation was requested and failed.
pub async fn create_and_process<R: CommandRunner, W: Write>(
    runner: &R,
    settings: &Settings,
    request: &OperationRequest,
    out: &mut W,
) -> Result<RunReport> {
    let provisioner = Provisioner::new(runner, &settings.interpreter, &settings.env_dir_name);
    let env_path = provisioner
        .provision(&request.target, request.create, out)
        .await?;

    let packages = PackageRunner::new(runner, &settings.interpreter, settings.layout);
    packages
        .run(&env_path, &request.packages, &request.verb, &request.params, out)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VenvPipError;
    use crate::pip::runner::COMPLETION_MARKER;
    use crate::pip::PackageOutcome;
    use crate::testing::ScriptedRunner;
    use crate::venv::PlatformLayout;
    use std::path::PathBuf;

    fn settings() -> Settings {
        Settings {
            interpreter: "python3".to_string(),
            layout: PlatformLayout::Posix,
            env_dir_name: ".venv".to_string(),
            strict: false,
        }
    }

    fn request(packages: &[&str], verb: &str, params: &[&str], create: bool) -> OperationRequest {
        OperationRequest {
            target: PathBuf::from("repo"),
            verb: verb.to_string(),
            params: params.iter().map(|s| s.to_string()).collect(),
            packages: packages.iter().map(|s| s.to_string()).collect(),
            create,
        }
    }

    #[tokio::test]
    async fn create_then_install_with_fallback() {
        let runner = ScriptedRunner::new(vec![
            ScriptedRunner::ok(),
            ScriptedRunner::ok(),
            ScriptedRunner::fail("ERROR: Failed building wheel for numpy"),
            ScriptedRunner::ok(),
        ]);

        let mut out = Vec::<u8>::new();
        let report = create_and_process(
            &runner,
            &settings(),
            &request(&["requests", "numpy"], "install", &["--no-cache"], true),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(report.env_path, PathBuf::from("repo").join(".venv"));
        assert_eq!(report.packages[0].package, "requests");
        assert_eq!(report.packages[0].outcome.label(), "success-primary");
        assert_eq!(report.packages[1].package, "numpy");
        assert_eq!(report.packages[1].outcome.label(), "success-fallback");

        let calls = runner.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0][..3], ["python3", "-m", "venv"]);

        let log = String::from_utf8(out).unwrap();
        assert!(log.contains("Virtual environment created successfully."));
        assert_eq!(log.matches(COMPLETION_MARKER).count(), 1);
    }

    #[tokio::test]
    async fn failed_creation_attempts_no_packages() {
        let runner = ScriptedRunner::new(vec![ScriptedRunner::fail("No module named venv")]);

        let mut out = Vec::<u8>::new();
        let err = create_and_process(
            &runner,
            &settings(),
            &request(&["requests", "numpy"], "install", &[], true),
            &mut out,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, VenvPipError::EnvCreation { .. }));
        assert_eq!(runner.calls().len(), 1);

        let log = String::from_utf8(out).unwrap();
        assert!(!log.contains("Attempting"));
        assert!(!log.contains(COMPLETION_MARKER));
    }

    #[tokio::test]
    async fn reuse_goes_straight_to_packages() {
        let runner = ScriptedRunner::new(vec![ScriptedRunner::ok()]);

        let report = create_and_process(
            &runner,
            &settings(),
            &request(&["requests"], "install", &[], false),
            &mut Vec::<u8>::new(),
        )
        .await
        .unwrap();

        assert!(report.all_succeeded());
        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0][0].ends_with("pip"));
    }

    #[tokio::test]
    async fn uninstall_double_failure_completes() {
        let runner = ScriptedRunner::new(vec![
            ScriptedRunner::fail("primary: not installed"),
            ScriptedRunner::fail("fallback: not installed"),
        ]);

        let report = create_and_process(
            &runner,
            &settings(),
            &request(&["foo"], "uninstall", &[], false),
            &mut Vec::<u8>::new(),
        )
        .await
        .unwrap();

        assert_eq!(
            report.outcome_of("foo"),
            Some(&PackageOutcome::Failed {
                primary_error: "primary: not installed".to_string(),
                fallback_error: "fallback: not installed".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn empty_request_only_creates() {
        let runner = ScriptedRunner::new(vec![ScriptedRunner::ok()]);

        let mut out = Vec::<u8>::new();
        let report = create_and_process(
            &runner,
            &settings(),
            &request(&[], "install", &[], true),
            &mut out,
        )
        .await
        .unwrap();

        assert!(report.packages.is_empty());
        assert_eq!(runner.calls().len(), 1);
        assert_eq!(
            String::from_utf8(out).unwrap().matches(COMPLETION_MARKER).count(),
            1
        );
    }
}
