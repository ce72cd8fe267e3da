use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// 覆盖配置中日志级别的环境变量
pub const LOG_ENV: &str = "LUNAR_LOG";

/// 初始化文件日志
///
/// 终端被 TUI 占用，日志只写入文件。
pub fn init(path: &Path, default_filter: &str) -> Result<()> {
    let directory = path
        .parent()
        .ok_or_else(|| Error::InvalidLogPath(path.to_path_buf()))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::InvalidLogPath(path.to_path_buf()))?;

    std::fs::create_dir_all(directory)?;
    let appender = tracing_appender::rolling::never(directory, file_name);

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(appender)
        .try_init()
        .map_err(Error::Logging)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_path_without_file_name() {
        match init(Path::new("/"), "info") {
            Err(Error::InvalidLogPath(p)) => assert_eq!(p, Path::new("/")),
            other => panic!("expected invalid path, got {other:?}"),
        }
    }
}
