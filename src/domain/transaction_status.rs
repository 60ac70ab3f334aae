//! 交易状态校验结果
//!
//! 每次调用从零重算，不缓存；返回后不可变。
//! errors阻断签名流程，warnings仅提示、不阻断。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 校验结果关联的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusField {
    Recipient,
    Fees,
    Amount,
}

/// 阻断性校验错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusError {
    /// 收款地址缺失
    RecipientRequired,
    /// 收款地址格式非法
    InvalidAddress,
    /// 收款地址与出款地址相同
    InvalidAddressBecauseDestinationIsAlsoSource,
    /// 费用未加载或非正
    FeeNotLoaded,
    /// 金额必填
    AmountRequired,
    /// 余额不足
    NotEnoughBalance,
}

/// 非阻断性提示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusWarning {
    /// 接近全额花费且存在锁仓余额
    AllFundsSpent,
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::RecipientRequired => "recipient is required",
            Self::InvalidAddress => "recipient address is invalid",
            Self::InvalidAddressBecauseDestinationIsAlsoSource => {
                "destination address is also the source"
            }
            Self::FeeNotLoaded => "fees are not loaded",
            Self::AmountRequired => "amount is required",
            Self::NotEnoughBalance => "not enough balance",
        };
        write!(f, "{}", msg)
    }
}

/// 交易草稿的完整校验快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStatus {
    /// 字段级阻断错误
    pub errors: BTreeMap<StatusField, StatusError>,
    /// 字段级提示
    pub warnings: BTreeMap<StatusField, StatusWarning>,
    /// 预估费用（未加载时为0）
    pub estimated_fees: Decimal,
    /// 解析后的实际花费金额
    pub amount: Decimal,
    /// 金额+费用
    pub total_spent: Decimal,
}

impl TransactionStatus {
    /// 没有任何阻断错误
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
