use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PackageOutcome {
    SucceededPrimary,
    SucceededFallback { primary_error: String },
    Failed {
        primary_error: String,
        fallback_error: String,
    },
}

impl PackageOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, PackageOutcome::Failed { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            PackageOutcome::SucceededPrimary => "success-primary",
            PackageOutcome::SucceededFallback { .. } => "success-fallback",
            PackageOutcome::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    pub package: String,
    #[serde(flatten)]
    pub outcome: PackageOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub verb: String,
    pub env_path: PathBuf,
    pub packages: Vec<PackageReport>,
}

impl RunReport {
    pub fn new(verb: &str, env_path: PathBuf) -> Self {
        Self {
            verb: verb.to_string(),
            env_path,
            packages: Vec::new(),
        }
    }

    pub fn push(&mut self, package: &str, outcome: PackageOutcome) {
        self.packages.push(PackageReport {
            package: package.to_string(),
            outcome,
        });
    }

    pub fn failed_count(&self) -> usize {
        self.packages
            .iter()
            .filter(|p| !p.outcome.is_success())
            .count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed_count() == 0
    }

    pub fn outcome_of(&self, package: &str) -> Option<&PackageOutcome> {
        self.packages
            .iter()
            .find(|p| p.package == package)
            .map(|p| &p.outcome)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
