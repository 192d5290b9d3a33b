pub mod layout;
pub mod provision;

pub use layout::PlatformLayout;
pub use provision::{resolve_env_path, Provisioner, DEFAULT_ENV_DIR_NAME};
