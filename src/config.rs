//! 配置管理模块
//! 支持从环境变量和配置文件加载配置

use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::family::CeloValidator;

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub platform: PlatformConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
    pub enable_file_logging: bool,
    pub log_file_path: Option<String>,
}

/// 平台中介层配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Celo费用安全缓冲覆盖值（最小单位）；缺省用内置常量
    #[serde(default)]
    pub celo_fees_safety_buffer: Option<u64>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            enable_file_logging: false,
            log_file_path: None,
        }
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            celo_fees_safety_buffer: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            platform: PlatformConfig::default(),
        }
    }
}

impl Config {
    /// 加载配置：TOML文件 + 环境变量覆盖
    ///
    /// 文件不存在时退回默认值，环境变量始终优先。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        // 加载.env（仅本地开发场景存在）
        dotenvy::dotenv().ok();

        let mut config = match path {
            Some(p) if p.exists() => {
                let raw = std::fs::read_to_string(p)
                    .with_context(|| format!("failed to read config file {}", p.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("failed to parse config file {}", p.display()))?
            }
            _ => Self::default(),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("WALLETBRIDGE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("WALLETBRIDGE_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(buffer) = std::env::var("WALLETBRIDGE_CELO_FEES_SAFETY_BUFFER") {
            if let Ok(parsed) = buffer.parse::<u64>() {
                self.platform.celo_fees_safety_buffer = Some(parsed);
            }
        }
    }

    /// 按配置构建Celo校验器
    pub fn celo_validator(&self) -> CeloValidator {
        match self.platform.celo_fees_safety_buffer {
            Some(buffer) => CeloValidator::new(Decimal::from(buffer)),
            None => CeloValidator::default(),
        }
    }
}
