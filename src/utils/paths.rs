//! 配置文件位置与读取

use crate::error::{PayrollError, Result};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = ".nomina";
const CONFIG_FILE_NAME: &str = "config.toml";

/// 默认配置文件：~/.nomina/config.toml
pub fn default_config_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| PayrollError::ConfigDirMissing("无法找到用户主目录".to_string()))
}

/// 读取配置文件内容；文件不存在时返回 None
pub fn read_config(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(PayrollError::Io(io::Error::new(
            e.kind(),
            format!("读取配置文件 {} 失败: {}", path.display(), e),
        ))),
    }
}
