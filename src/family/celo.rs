//! Celo交易草稿校验
//!
//! 纯函数：`(account, transaction) -> TransactionStatus`，无副作用、不缓存。
//! 金额解析依赖交易mode：unlock/vote用未投票锁仓额，revoke用对应投票额，
//! 其余用可花费余额减费用。

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::domain::{
    CeloOperationMode, CeloTransaction, MainAccount, StatusError, StatusField, StatusWarning,
    Transaction, TransactionStatus,
};
use crate::error::{PlatformError, Result};
use crate::family::TransactionValidator;

/// 为后续交易预留的费用缓冲：0.05 CELO，约够100笔交易
const FEES_SAFETY_BUFFER: u64 = 5_000_000_000_000_000;

static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("address regex"));

/// 地址格式校验（EVM风格，20字节hex）
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_RE.is_match(address)
}

/// Celo校验器
///
/// 费用缓冲可由配置覆盖，默认取[`FEES_SAFETY_BUFFER`]。
#[derive(Debug, Clone)]
pub struct CeloValidator {
    fees_safety_buffer: Decimal,
}

impl Default for CeloValidator {
    fn default() -> Self {
        Self {
            fees_safety_buffer: Decimal::from(FEES_SAFETY_BUFFER),
        }
    }
}

impl CeloValidator {
    pub fn new(fees_safety_buffer: Decimal) -> Self {
        Self { fees_safety_buffer }
    }

    pub fn fees_safety_buffer(&self) -> Decimal {
        self.fees_safety_buffer
    }

    /// 计算交易草稿的完整校验快照
    pub fn get_transaction_status(
        &self,
        account: &MainAccount,
        transaction: &CeloTransaction,
    ) -> TransactionStatus {
        let mut errors = BTreeMap::new();
        let mut warnings = BTreeMap::new();
        let use_all_amount = transaction.use_all_amount;
        let resources = account.celo_resources.as_ref();

        // 收款地址等于出款地址：无条件错误
        if account.fresh_address == transaction.recipient {
            errors.insert(
                StatusField::Recipient,
                StatusError::InvalidAddressBecauseDestinationIsAlsoSource,
            );
        }

        // 费用未加载或非正
        if !transaction.fees.map_or(false, |f| f > Decimal::ZERO) {
            errors.insert(StatusField::Fees, StatusError::FeeNotLoaded);
        }
        let estimated_fees = transaction.fees.unwrap_or(Decimal::ZERO);

        // 按mode解析实际花费金额
        let mut amount = if use_all_amount
            && matches!(
                transaction.mode,
                CeloOperationMode::Unlock | CeloOperationMode::Vote
            ) {
            resources
                .map(|r| r.nonvoting_locked_balance)
                .unwrap_or(Decimal::ZERO)
        } else if use_all_amount && transaction.mode == CeloOperationMode::Revoke {
            resources
                .and_then(|r| r.vote(&transaction.recipient, transaction.index))
                .map(|v| v.amount)
                .unwrap_or(Decimal::ZERO)
        } else if use_all_amount {
            account.spendable_balance - estimated_fees
        } else {
            transaction.amount
        };

        if amount < Decimal::ZERO {
            amount = Decimal::ZERO;
        }

        // 接近全额花费且存在锁仓余额：提示而非错误
        if resources.map_or(false, |r| r.locked_balance > Decimal::ZERO)
            && (use_all_amount || account.spendable_balance - amount < self.fees_safety_buffer)
        {
            warnings.insert(StatusField::Amount, StatusWarning::AllFundsSpent);
        }

        // 金额必填，零金额合法的mode豁免
        if !transaction.mode.allows_zero_amount() && amount <= Decimal::ZERO && !use_all_amount {
            errors.insert(StatusField::Amount, StatusError::AmountRequired);
        }

        let total_spent = amount + estimated_fees;

        // 按mode的上限做超支校验
        match transaction.mode {
            CeloOperationMode::Unlock | CeloOperationMode::Vote => {
                if let Some(r) = resources {
                    if amount > r.nonvoting_locked_balance {
                        errors.insert(StatusField::Amount, StatusError::NotEnoughBalance);
                    }
                }
            }
            CeloOperationMode::Revoke => {
                if let Some(vote) =
                    resources.and_then(|r| r.vote(&transaction.recipient, transaction.index))
                {
                    if amount > vote.amount {
                        errors.insert(StatusField::Amount, StatusError::NotEnoughBalance);
                    }
                }
            }
            _ => {
                if total_spent > account.spendable_balance {
                    errors.insert(StatusField::Amount, StatusError::NotEnoughBalance);
                }
            }
        }

        // 可花费余额连费用都不够
        if !errors.contains_key(&StatusField::Amount) && account.spendable_balance < estimated_fees
        {
            errors.insert(StatusField::Amount, StatusError::NotEnoughBalance);
        }

        // 地址格式校验仅适用于普通转账mode
        if transaction.mode == CeloOperationMode::Send {
            if transaction.recipient.is_empty() {
                errors.insert(StatusField::Recipient, StatusError::RecipientRequired);
            } else if !is_valid_address(&transaction.recipient) {
                errors.insert(StatusField::Recipient, StatusError::InvalidAddress);
            }
        }

        TransactionStatus {
            errors,
            warnings,
            estimated_fees,
            amount,
            total_spent,
        }
    }
}

impl TransactionValidator for CeloValidator {
    fn get_transaction_status(
        &self,
        account: &MainAccount,
        transaction: &Transaction,
    ) -> Result<TransactionStatus> {
        match transaction {
            Transaction::Celo(tx) => Ok(self.get_transaction_status(account, tx)),
            other => Err(PlatformError::InvalidPayload(format!(
                "expected celo transaction, got family {}",
                other.family()
            ))),
        }
    }
}
