//! 工具模块

pub mod logger;
pub mod paths;
