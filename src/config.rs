//! 配置加载
//!
//! 配置文件（TOML）可选；命令行参数优先于文件

use crate::cli::Cli;
use crate::error::{PayrollError, Result};
use crate::types::Config;
use crate::utils::paths;
use std::path::Path;
use tracing::debug;

/// 从文件加载配置（文件必须存在）
pub fn load_from_file(path: &Path) -> Result<Config> {
    let content =
        paths::read_config(path)?.ok_or_else(|| PayrollError::ConfigNotFound(path.to_path_buf()))?;
    parse(path, &content)
}

fn parse(path: &Path, content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|source| PayrollError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// 按命令行参数解析最终配置
///
/// - 指定 `--config` 时文件必须存在
/// - 默认路径 `~/.nomina/config.toml` 不存在时使用默认值
pub fn resolve(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_from_file(path)?,
        None => {
            let path = paths::default_config_path()?;
            match paths::read_config(&path)? {
                Some(content) => parse(&path, &content)?,
                None => Config::default(),
            }
        }
    };

    if cli.verbose {
        config.verbose = true;
    }
    if cli.no_banner {
        config.banner = false;
    }

    debug!(?config, "configuration resolved");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cli_with(config: Option<PathBuf>, verbose: bool, no_banner: bool) -> Cli {
        Cli {
            verbose,
            config,
            no_banner,
        }
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "verbose = true\nbanner = false\nlog_filter = \"nomina=trace\"\n",
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();
        assert!(config.verbose);
        assert!(!config.banner);
        assert_eq!(config.log_filter.as_deref(), Some("nomina=trace"));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "verbose = true\n").unwrap();

        let config = load_from_file(&path).unwrap();
        assert!(config.verbose);
        assert!(config.banner);
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "banner = \"sometimes\"\n").unwrap();

        assert!(matches!(
            load_from_file(&path),
            Err(PayrollError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let cli = cli_with(Some(temp_dir.path().join("nope.toml")), false, false);

        assert!(matches!(resolve(&cli), Err(PayrollError::ConfigNotFound(_))));
    }

    #[test]
    fn test_flags_override_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "verbose = false\nbanner = true\n").unwrap();

        let config = resolve(&cli_with(Some(path), true, true)).unwrap();
        assert!(config.verbose);
        assert!(!config.banner);
    }

    #[test]
    fn test_file_values_kept_without_flags() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "banner = false\n").unwrap();

        let config = resolve(&cli_with(Some(path), false, false)).unwrap();
        assert!(!config.verbose);
        assert!(!config.banner);
    }
}
