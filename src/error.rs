//! 错误处理模块 (修复原则：明确抛出异常)

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("无效的工资输入: {0}")]
    InvalidSalary(String),

    #[error("配置目录不存在: {0}")]
    ConfigDirMissing(String),

    #[error("配置文件不存在: {0}")]
    ConfigNotFound(PathBuf),

    #[error("配置文件解析失败: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 详细的错误报告函数 (透明原则)
impl PayrollError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息，安静模式
    pub fn report(&self, verbose: bool) {
        if verbose {
            eprintln!("❌ 错误: {}", self);

            let mut current = self.source();
            let mut first = true;
            while let Some(cause) = current {
                if first {
                    eprintln!("  └─ 原因: {}", cause);
                    first = false;
                } else {
                    eprintln!("     └─ {}", cause);
                }
                current = cause.source();
            }
        } else {
            match self {
                PayrollError::Io(err) => eprintln!("IO错误: {}", err),
                PayrollError::ConfigNotFound(path) => {
                    eprintln!("配置文件不存在: {}", path.display())
                }
                PayrollError::ConfigParse { path, .. } => {
                    eprintln!("配置文件解析失败: {} (使用 --verbose 查看详情)", path.display())
                }
                _ => eprintln!("错误: {}", self),
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, PayrollError>;
