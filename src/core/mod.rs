pub mod error;
pub mod path;
pub mod process;

pub use error::{Result, VenvPipError};
pub use path::resolve_path;
pub use process::{display_argv, CapturedOutput, CommandRunner, ProcessExecutor};
