//! 账户领域模型
//!
//! 封闭的账户类型判别：主账户 / 代币子账户 / 派生子账户。
//! 签名与广播只允许主账户；子账户可读余额，但不能独立签名。

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::transaction::ChainFamily;

/// 账户封闭判别类型
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Account {
    /// 主链账户（可签名、可广播、可接收）
    Account(MainAccount),
    /// 代币子账户（只读余额，归属某个主账户）
    TokenAccount(TokenAccount),
    /// 派生子账户（只读余额，归属某个主账户）
    ChildAccount(ChildAccount),
}

impl Account {
    pub fn id(&self) -> &str {
        match self {
            Self::Account(a) => &a.id,
            Self::TokenAccount(a) => &a.id,
            Self::ChildAccount(a) => &a.id,
        }
    }

    /// 子账户返回其归属主账户id；主账户返回None
    pub fn parent_id(&self) -> Option<&str> {
        match self {
            Self::Account(_) => None,
            Self::TokenAccount(a) => Some(&a.parent_id),
            Self::ChildAccount(a) => Some(&a.parent_id),
        }
    }

    pub fn spendable_balance(&self) -> Decimal {
        match self {
            Self::Account(a) => a.spendable_balance,
            Self::TokenAccount(a) => a.spendable_balance,
            Self::ChildAccount(a) => a.spendable_balance,
        }
    }

    pub fn is_main(&self) -> bool {
        matches!(self, Self::Account(_))
    }

    pub fn as_main(&self) -> Option<&MainAccount> {
        match self {
            Self::Account(a) => Some(a),
            _ => None,
        }
    }
}

/// 主链账户
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainAccount {
    pub id: String,
    pub name: String,
    /// 当前接收地址
    pub fresh_address: String,
    /// 接收地址的派生路径
    pub fresh_address_path: String,
    pub derivation_mode: String,
    /// 所属链family（决定交易反序列化和状态校验的分发）
    pub family: ChainFamily,
    pub currency: String,
    /// 余额（最小单位）
    pub balance: Decimal,
    /// 可花费余额（最小单位）
    pub spendable_balance: Decimal,
    pub block_height: u64,
    pub last_sync_date: DateTime<Utc>,
    /// Celo链专属资源（锁仓、投票）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub celo_resources: Option<CeloResources>,
}

/// 代币子账户
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenAccount {
    pub id: String,
    pub parent_id: String,
    pub token: String,
    pub balance: Decimal,
    pub spendable_balance: Decimal,
    pub creation_date: DateTime<Utc>,
}

/// 派生子账户
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildAccount {
    pub id: String,
    pub parent_id: String,
    pub currency: String,
    pub address: String,
    pub balance: Decimal,
    pub spendable_balance: Decimal,
    pub creation_date: DateTime<Utc>,
}

/// Celo链资源快照（随账户同步更新，核心层只读）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CeloResources {
    /// 锁仓总额
    pub locked_balance: Decimal,
    /// 未投票的锁仓额
    pub nonvoting_locked_balance: Decimal,
    /// 当前投票列表
    #[serde(default)]
    pub votes: Vec<CeloVote>,
}

/// Celo投票记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CeloVote {
    /// 验证人组地址
    pub validator_group: String,
    /// 同一组下的投票序号
    pub index: u32,
    pub amount: Decimal,
}

impl CeloResources {
    /// 按验证人组地址（和可选序号）查找投票
    pub fn vote(&self, validator_group: &str, index: Option<u32>) -> Option<&CeloVote> {
        self.votes.iter().find(|v| {
            v.validator_group == validator_group && index.map_or(true, |i| v.index == i)
        })
    }
}

/// dApp侧账户投影（带地址，不暴露内部结构）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformAccount {
    pub id: String,
    pub name: String,
    pub address: String,
    pub currency: String,
    pub balance: Decimal,
    pub spendable_balance: Decimal,
    pub block_height: u64,
    pub last_sync_date: DateTime<Utc>,
}

/// 在账户快照中按id解析账户
pub fn find_account_by_id<'a>(accounts: &'a [Account], id: &str) -> Option<&'a Account> {
    accounts.iter().find(|a| a.id() == id)
}

/// 子账户返回其归属主账户；主账户返回None
pub fn get_parent_account<'a>(account: &Account, accounts: &'a [Account]) -> Option<&'a Account> {
    let parent_id = account.parent_id()?;
    accounts.iter().find(|a| a.is_main() && a.id() == parent_id)
}
