//! 日志初始化
//!
//! 日志只写 stderr，stdout 留给交互会话

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 选择过滤表达式：RUST_LOG > 配置 > 默认（verbose 时 debug，否则 warn）
pub fn build_filter(verbose: bool, configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match configured {
        Some(directives) => EnvFilter::new(directives),
        None if verbose => EnvFilter::new("nomina=debug"),
        None => EnvFilter::new("nomina=warn"),
    })
}

pub fn init_logger(verbose: bool, configured: Option<&str>) {
    let filter = build_filter(verbose, configured);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
