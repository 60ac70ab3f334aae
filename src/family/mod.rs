//! 链family校验模块
//!
//! 每个family以相同的 `(account, transaction) -> TransactionStatus` 契约
//! 提供各自的草稿校验实现，由账户声明的family统一分发。

pub mod celo;

use crate::domain::{ChainFamily, MainAccount, Transaction, TransactionStatus};
use crate::error::{PlatformError, Result};

pub use celo::CeloValidator;

/// 各链family的交易草稿校验接口
///
/// 实现方收到的交易已通过family一致性检查，只需处理本family的变体；
/// 收到其它变体视为非法载荷。
pub trait TransactionValidator: Send + Sync {
    fn get_transaction_status(
        &self,
        account: &MainAccount,
        transaction: &Transaction,
    ) -> Result<TransactionStatus>;
}

/// 返回指定family的校验器；未接入校验的family返回None
pub fn for_family(family: ChainFamily) -> Option<Box<dyn TransactionValidator>> {
    match family {
        ChainFamily::Celo => Some(Box::new(CeloValidator::default())),
        ChainFamily::Ethereum | ChainFamily::Bitcoin => None,
    }
}

/// 按账户family分发交易草稿校验
///
/// 交易family与账户family不一致视为非法载荷。
pub fn get_transaction_status(
    account: &MainAccount,
    transaction: &Transaction,
) -> Result<TransactionStatus> {
    if transaction.family() != account.family {
        return Err(PlatformError::InvalidPayload(format!(
            "transaction family {} does not match account family {}",
            transaction.family(),
            account.family
        )));
    }

    let validator = for_family(account.family)
        .ok_or_else(|| PlatformError::FamilyNotSupported(account.family.to_string()))?;
    validator.get_transaction_status(account, transaction)
}
