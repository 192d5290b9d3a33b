use crate::venv::{PlatformLayout, DEFAULT_ENV_DIR_NAME};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct GlobalConfig {
    #[serde(default)]
    pub python: PythonConfig,
    #[serde(default)]
    pub venv: VenvConfig,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct PythonConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct VenvConfig {
    #[serde(default = "default_dir_name")]
    pub dir_name: String,
    #[serde(default)]
    pub layout: LayoutChoice,
}

impl Default for VenvConfig {
    fn default() -> Self {
        Self {
            dir_name: default_dir_name(),
            layout: LayoutChoice::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RunConfig {
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayoutChoice {
    #[default]
    Auto,
    Posix,
    Windows,
}

impl LayoutChoice {
    pub fn resolve(self) -> PlatformLayout {
        match self {
            LayoutChoice::Auto => PlatformLayout::host(),
            LayoutChoice::Posix => PlatformLayout::Posix,
            LayoutChoice::Windows => PlatformLayout::Windows,
        }
    }
}

fn default_dir_name() -> String {
    DEFAULT_ENV_DIR_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub interpreter: String,
    pub layout: PlatformLayout,
    pub env_dir_name: String,
    pub strict: bool,
}

impl Settings {
    pub fn resolve(config: &GlobalConfig, interpreter: Option<String>, strict: bool) -> Self {
        let layout = config.venv.layout.resolve();
        let interpreter = interpreter
            .or_else(|| config.python.interpreter.clone())
            .unwrap_or_else(|| layout.default_interpreter().to_string());

        Self {
            interpreter,
            layout,
            env_dir_name: config.venv.dir_name.clone(),
            strict: strict || config.run.strict,
        }
    }
}
