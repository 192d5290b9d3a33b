use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformLayout {
    Posix,
    Windows,
}

impl PlatformLayout {
    pub fn host() -> Self {
        if cfg!(windows) {
            PlatformLayout::Windows
        } else {
            PlatformLayout::Posix
        }
    }

    pub fn bin_dir_name(&self) -> &'static str {
        match self {
            PlatformLayout::Posix => "bin",
            PlatformLayout::Windows => "Scripts",
        }
    }

    pub fn exe_suffix(&self) -> &'static str {
        match self {
            PlatformLayout::Posix => "",
            PlatformLayout::Windows => ".exe",
        }
    }

    pub fn default_interpreter(&self) -> &'static str {
        match self {
            PlatformLayout::Posix => "python3",
            PlatformLayout::Windows => "python",
        }
    }

    pub fn bin_dir(&self, env_path: &Path) -> PathBuf {
        env_path.join(self.bin_dir_name())
    }

    pub fn executable(&self, env_path: &Path, name: &str) -> PathBuf {
        self.bin_dir(env_path)
            .join(format!("{}{}", name, self.exe_suffix()))
    }

    pub fn to_str(&self) -> &str {
        match self {
            PlatformLayout::Posix => "posix",
            PlatformLayout::Windows => "windows",
        }
    }
}
