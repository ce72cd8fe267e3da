//! 错误类型
//!
//! 存储、配置与日志初始化的失败都汇总到 [`Error`]，由调用方用 `?` 向上传递。

use std::io;
use std::path::PathBuf;

/// 应用级错误
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not locate the user data directory")]
    DataDirUnavailable,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize to-do list: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid log file path {0}")]
    InvalidLogPath(PathBuf),

    #[error("failed to install log subscriber: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
