use crate::config::schema::GlobalConfig;
use crate::config::validation::validate_global_config;
use crate::core::error::{Result, VenvPipError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tokio::fs;

const GLOBAL_CONFIG_FILE: &str = "config.toml";

pub struct GlobalConfigManager {
    config_path: PathBuf,
}

impl GlobalConfigManager {
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self {
            config_path: config_dir.join(GLOBAL_CONFIG_FILE),
        })
    }

    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    fn get_config_dir() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "venv-pip", "venv-pip") {
            Ok(proj_dirs.config_dir().to_path_buf())
        } else {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            Ok(PathBuf::from(home).join(".venv-pip"))
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    pub async fn load(&self) -> Result<GlobalConfig> {
        if !self.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).await?;
        let config: GlobalConfig = toml::from_str(&content)?;
        validate_global_config(&config)?;
        Ok(config)
    }

    pub async fn save(&self, config: &GlobalConfig) -> Result<()> {
        validate_global_config(config)?;
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await?;
        Ok(())
    }

    pub async fn init(&self) -> Result<GlobalConfig> {
        if self.exists() {
            return Err(VenvPipError::Config(format!(
                "{} already exists",
                self.config_path.display()
            )));
        }

        let config = GlobalConfig::default();
        self.save(&config).await?;
        Ok(config)
    }
}
