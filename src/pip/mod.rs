pub mod outcome;
pub mod runner;

pub use outcome::{PackageOutcome, PackageReport, RunReport};
pub use runner::PackageRunner;
