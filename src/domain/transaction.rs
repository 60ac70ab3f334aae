//! 交易领域模型与线上（wire）形态
//!
//! dApp侧载荷一律以family打标的原始形态进入，金额为十进制字符串；
//! 反序列化为领域形态后金额统一为Decimal。核心层按账户声明的family分发，
//! 自身保持链无关。

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 链family：交易反序列化与状态校验的分发标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
    Ethereum,
    Celo,
    Bitcoin,
}

impl ChainFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Celo => "celo",
            Self::Bitcoin => "bitcoin",
        }
    }
}

impl fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// dApp提交的原始交易（wire形态，金额为字符串）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum RawPlatformTransaction {
    Ethereum {
        amount: String,
        recipient: String,
        nonce: u64,
        #[serde(default)]
        data: Option<String>,
        #[serde(default)]
        gas_price: Option<String>,
        #[serde(default)]
        gas_limit: Option<String>,
    },
    Celo {
        mode: CeloOperationMode,
        amount: String,
        recipient: String,
        #[serde(default)]
        fees: Option<String>,
        #[serde(default)]
        use_all_amount: bool,
        #[serde(default)]
        index: Option<u32>,
    },
}

impl RawPlatformTransaction {
    pub fn family(&self) -> ChainFamily {
        match self {
            Self::Ethereum { .. } => ChainFamily::Ethereum,
            Self::Celo { .. } => ChainFamily::Celo,
        }
    }
}

/// 领域交易（金额为Decimal，最小单位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum Transaction {
    Ethereum(EthereumTransaction),
    Celo(CeloTransaction),
}

impl Transaction {
    pub fn family(&self) -> ChainFamily {
        match self {
            Self::Ethereum(_) => ChainFamily::Ethereum,
            Self::Celo(_) => ChainFamily::Celo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthereumTransaction {
    pub amount: Decimal,
    pub recipient: String,
    pub nonce: u64,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub gas_price: Option<Decimal>,
    #[serde(default)]
    pub gas_limit: Option<Decimal>,
}

/// Celo交易草稿
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeloTransaction {
    pub mode: CeloOperationMode,
    pub amount: Decimal,
    pub recipient: String,
    /// 预估费用；未加载时为None
    #[serde(default)]
    pub fees: Option<Decimal>,
    #[serde(default)]
    pub use_all_amount: bool,
    /// revoke模式下定位投票记录的序号
    #[serde(default)]
    pub index: Option<u32>,
}

/// Celo操作模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CeloOperationMode {
    Send,
    Lock,
    Unlock,
    Vote,
    Revoke,
    Activate,
    Register,
    Withdraw,
}

impl CeloOperationMode {
    /// 零金额合法的模式（金额必填校验对这些模式豁免）
    pub fn allows_zero_amount(&self) -> bool {
        matches!(self, Self::Register | Self::Withdraw | Self::Activate)
    }
}

/// 已签名交易（wire形态）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSignedTransaction {
    pub operation: RawOperation,
    pub signature: String,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

/// 链上操作记录（wire形态）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOperation {
    pub id: String,
    pub hash: String,
    #[serde(rename = "type")]
    pub operation_type: String,
    pub value: String,
    pub fee: String,
    #[serde(default)]
    pub senders: Vec<String>,
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub block_height: Option<u64>,
    #[serde(default)]
    pub block_hash: Option<String>,
    pub account_id: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// 已签名交易（领域形态）：由外部签名设备产出，核心层只读、只转发
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedOperation {
    pub operation: Operation,
    pub signature: String,
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub id: String,
    pub hash: String,
    pub operation_type: String,
    pub value: Decimal,
    pub fee: Decimal,
    pub senders: Vec<String>,
    pub recipients: Vec<String>,
    pub block_height: Option<u64>,
    pub block_hash: Option<String>,
    pub account_id: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// 预备签名的消息（格式化器产出，交给确认UI和签名设备）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageData {
    pub account_id: String,
    /// 派生路径
    pub path: String,
    pub derivation_mode: String,
    /// 展示给用户的消息
    pub message: String,
    /// 原始消息
    pub raw_message: String,
}
