//! Nomina 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给各模块
//! - stdout 只输出会话内容，日志和错误走 stderr
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

use clap::Parser;
use nomina::cli::Cli;
use nomina::error::Result;
use nomina::types::Config;
use nomina::utils::logger;
use nomina::{PayrollCalculator, PayrollStore, Session};

fn main() {
    // 解析 CLI 参数
    let cli = Cli::parse();

    // 配置初始化
    let config = match nomina::config::resolve(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            e.report(cli.verbose);
            std::process::exit(1);
        }
    };

    logger::init_logger(config.verbose, config.log_filter.as_deref());

    if let Err(e) = run_session(&config) {
        e.report(config.verbose);
        std::process::exit(1);
    }
}

/// 在标准输入输出上运行交互会话
fn run_session(config: &Config) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let store = PayrollStore::new(PayrollCalculator::new());
    let mut session = Session::new(stdin.lock(), stdout.lock(), store, config);
    session.run()?;

    Ok(())
}
