//! 日志系统配置模块
//! 支持结构化日志、日志级别配置和按天轮转的文件输出

use std::path::Path;

use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::config::LoggingConfig;

/// 初始化日志系统
///
/// 启用文件输出时返回的guard必须由调用方持有到进程结束，
/// 否则缓冲日志会丢失。
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    // 设置日志级别过滤器
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_writer = if config.enable_file_logging {
        let log_dir = config
            .log_file_path
            .as_ref()
            .and_then(|p| Path::new(p).parent())
            .unwrap_or_else(|| Path::new("./logs"));

        std::fs::create_dir_all(log_dir)?;

        let file_appender = rolling::daily(log_dir, "walletbridge.log");
        let (writer, guard) = non_blocking(file_appender);
        Some((writer, guard))
    } else {
        None
    };

    // 根据配置选择日志格式
    match (config.format.as_str(), file_writer) {
        ("json", Some((writer, guard))) => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(writer)
                        .with_timer(ChronoUtc::rfc_3339()),
                )
                .with(fmt::layer().json().with_timer(ChronoUtc::rfc_3339()))
                .init();
            Ok(Some(guard))
        }
        ("json", None) => {
            Registry::default()
                .with(filter)
                .with(fmt::layer().json().with_timer(ChronoUtc::rfc_3339()))
                .init();
            Ok(None)
        }
        (_, Some((writer, guard))) => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_timer(ChronoUtc::rfc_3339()),
                )
                .with(fmt::layer().with_timer(ChronoUtc::rfc_3339()))
                .init();
            Ok(Some(guard))
        }
        (_, None) => {
            Registry::default()
                .with(filter)
                .with(fmt::layer().with_timer(ChronoUtc::rfc_3339()))
                .init();
            Ok(None)
        }
    }
}
