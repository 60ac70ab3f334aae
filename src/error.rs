//! 平台中介层统一错误类型
//!
//! 错误策略：所有错误直接抛给调用方，核心层不做恢复、不做重试。
//! 导航回调和格式化器抛出的错误原样透传，不二次包装。

use thiserror::Error;

/// 中介层错误分类
#[derive(Debug, Error)]
pub enum PlatformError {
    /// 请求的账户在上下文快照中不存在
    #[error("account not found")]
    AccountNotFound,

    /// 账户存在但类型不支持该操作（签名要求主账户）
    #[error("account provided should be the main one")]
    AccountTypeNotSupported,

    /// 原始载荷无法反序列化为目标链的领域对象
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// 请求的链family不被支持
    #[error("chain family not supported: {0}")]
    FamilyNotSupported(String),

    /// 格式化器/导航回调的错误原样透传
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlatformError {
    /// 稳定错误码（供上层UI做国际化映射）
    pub fn code(&self) -> &'static str {
        match self {
            Self::AccountNotFound => "account_not_found",
            Self::AccountTypeNotSupported => "account_type_not_supported",
            Self::InvalidPayload(_) => "invalid_payload",
            Self::FamilyNotSupported(_) => "family_not_supported",
            Self::Other(_) => "internal",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PlatformError::AccountNotFound.code(), "account_not_found");
        assert_eq!(
            PlatformError::AccountTypeNotSupported.code(),
            "account_type_not_supported"
        );
    }

    #[test]
    fn test_passthrough_message_preserved() {
        let source = anyhow::anyhow!("Some error");
        let err = PlatformError::from(source);
        assert_eq!(err.to_string(), "Some error");
    }
}
