//! 配置加载
//!
//! 配置文件位于 `~/.config/lunar/config.toml`，所有字段都有默认值，文件缺失时使用默认配置。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const APP_DIR: &str = "lunar";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 待办文件，默认为数据目录下的 todos.toml
    pub data_file: Option<PathBuf>,
    /// 日志文件，默认为数据目录下的 lunar.log
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
    /// 弹出设置面板时附带的标识
    pub dialog_tag: String,
    pub links: SupportLinks,
}

/// 支持对话框中的外部链接
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportLinks {
    pub star: String,
    pub donate: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            log_file: None,
            log_filter: "info".to_string(),
            dialog_tag: "bottom_sheet".to_string(),
            links: SupportLinks::default(),
        }
    }
}

impl Default for SupportLinks {
    fn default() -> Self {
        Self {
            star: "https://github.com/iamrasel/lunar-launcher".to_string(),
            donate: "https://iamrasel.github.io/donate".to_string(),
        }
    }
}

impl AppConfig {
    /// 从TOML文件加载配置
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| data_dir.join("todos.toml"))
    }

    pub fn log_path(&self, data_dir: &Path) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| data_dir.join("lunar.log"))
    }
}

/// 配置文件路径 (~/.config/lunar/config.toml)
pub fn config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_DIR).join("config.toml"))
}

/// 获取数据目录路径 (~/.local/share/lunar/)，不存在时创建
pub fn data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or(Error::DataDirUnavailable)?
        .join(APP_DIR);

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}
