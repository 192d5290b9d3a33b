pub mod config;
pub mod interactive;
pub mod run;

use crate::config::{GlobalConfig, GlobalConfigManager, Settings};
use crate::core::error::Result;
use std::path::PathBuf;

pub struct Context {
    pub config_mgr: GlobalConfigManager,
    pub config: GlobalConfig,
    pub python: Option<String>,
}

impl Context {
    pub async fn load(config_path: Option<PathBuf>, python: Option<String>) -> Result<Self> {
        let config_mgr = match config_path {
            Some(path) => GlobalConfigManager::with_path(path),
            None => GlobalConfigManager::new()?,
        };
        let config = config_mgr.load().await?;

        Ok(Self {
            config_mgr,
            config,
            python,
        })
    }

    pub fn settings(&self, strict: bool) -> Settings {
        Settings::resolve(&self.config, self.python.clone(), strict)
    }
}
