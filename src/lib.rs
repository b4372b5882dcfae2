//! Nomina - 交互式工资计算器
//!
//! 结构：
//! - core: 工资计算与内存记录存储
//! - menu / session: 菜单解析与交互循环
//! - config / cli: 配置文件与命令行参数

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod menu;
pub mod session;
pub mod types;
pub mod utils;

// 重新导出常用类型
pub use crate::core::{PayrollCalculator, PayrollStore};
pub use error::{PayrollError, Result};
pub use session::{Session, SessionEnd};
pub use types::{Config, Department, Employee};
