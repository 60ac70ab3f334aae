//! 基础设施模块：日志初始化与脱敏

pub mod log_redact;
pub mod logging;

pub use logging::init_logging;
