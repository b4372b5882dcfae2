//! CLI 参数定义

use clap::Parser;
use std::path::PathBuf;

/// Nomina - 交互式工资计算器
#[derive(Parser, Debug)]
#[command(
    name = "nomina",
    version,
    about = "交互式工资计算器",
    long_about = "按部门税率和固定食堂扣款计算净工资，并打印报告（数据只保存在内存中）"
)]
pub struct Cli {
    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,

    /// 配置文件路径（默认 ~/.nomina/config.toml）
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 不打印启动标题
    #[arg(long)]
    pub no_banner: bool,
}
