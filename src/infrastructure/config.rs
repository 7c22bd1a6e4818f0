use crate::domain::error::WorkflowError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// 单个翻译服务的配置项
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ServiceConfig {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub app_key: String,
    #[serde(default)]
    pub app_secret: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub services: Vec<ServiceConfig>,
    #[serde(default)]
    pub timeout: u64,
}

impl Config {
    /// Look up a service entry by name; a missing entry means that
    /// provider is disabled for the run.
    pub fn service(&self, name: &str) -> Option<&ServiceConfig> {
        self.services.iter().find(|s| s.name == name)
    }

    /// Shared deadline for one aggregation run; 0 or absent means 10s.
    pub fn timeout(&self) -> Duration {
        if self.timeout == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(self.timeout)
        }
    }
}

/// Default config location: `config.yaml` next to the executable, the way
/// Alfred bundles workflow assets.
pub fn default_config_path() -> Result<PathBuf, WorkflowError> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| WorkflowError::Config("cannot determine executable directory".to_string()))?;
    Ok(dir.join("config.yaml"))
}

pub fn load_config_from(path: &Path) -> Result<Config, WorkflowError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Load the services config. A missing or malformed file degrades to the
/// empty default so the workflow still answers with a diagnostic item
/// instead of failing the process.
pub fn load_config(path: Option<&Path>) -> Config {
    let resolved = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("无法定位配置文件: {}", e);
                return Config::default();
            }
        },
    };

    match load_config_from(&resolved) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("加载配置文件失败 {}: {}", resolved.display(), e);
            Config::default()
        }
    }
}
