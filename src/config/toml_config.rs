use crate::config::Settings;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&raw)?;
        Ok(config)
    }

    pub fn into_settings(self) -> Settings {
        Settings {
            api_base_url: self.api.base_url,
            cart_path: self.storage.path,
        }
    }
}
