//! 载荷转换协作者
//!
//! 核心层不把转换函数当作全局单例引用，而是通过构造注入的trait协作者
//! 持有，便于测试替换。默认实现覆盖wire形态到领域形态的全部转换。

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::{
    Account, CeloTransaction, EthereumTransaction, MainAccount, MessageData, Operation,
    PlatformAccount, RawPlatformTransaction, RawSignedTransaction, SignedOperation, Transaction,
};
use crate::error::{PlatformError, Result};

/// wire形态与领域形态之间的转换协作者
pub trait PlatformSerializer: Send + Sync {
    /// 原始交易 → 领域交易
    fn deserialize_transaction(&self, raw: &RawPlatformTransaction) -> Result<Transaction>;

    /// 原始已签名交易 → `SignedOperation`
    fn deserialize_signed_transaction(&self, raw: &RawSignedTransaction)
        -> Result<SignedOperation>;

    /// 为签名准备消息（可能因消息内容非法而失败，错误原样上抛）
    fn prepare_message_to_sign(&self, account: &MainAccount, message: &str) -> Result<MessageData>;

    /// 账户 → dApp侧投影；子账户的地址取自归属主账户
    fn account_to_platform_account(
        &self,
        account: &Account,
        parent: Option<&Account>,
    ) -> PlatformAccount;
}

/// 默认转换实现
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSerializer;

fn parse_amount(field: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value)
        .map_err(|e| PlatformError::InvalidPayload(format!("{}: {} ({})", field, value, e)))
}

fn parse_optional_amount(field: &str, value: &Option<String>) -> Result<Option<Decimal>> {
    value.as_deref().map(|v| parse_amount(field, v)).transpose()
}

fn parse_date(field: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| PlatformError::InvalidPayload(format!("{}: {} ({})", field, value, e)))
}

impl PlatformSerializer for DefaultSerializer {
    fn deserialize_transaction(&self, raw: &RawPlatformTransaction) -> Result<Transaction> {
        match raw {
            RawPlatformTransaction::Ethereum {
                amount,
                recipient,
                nonce,
                data,
                gas_price,
                gas_limit,
            } => Ok(Transaction::Ethereum(EthereumTransaction {
                amount: parse_amount("amount", amount)?,
                recipient: recipient.clone(),
                nonce: *nonce,
                data: data.clone(),
                gas_price: parse_optional_amount("gas_price", gas_price)?,
                gas_limit: parse_optional_amount("gas_limit", gas_limit)?,
            })),
            RawPlatformTransaction::Celo {
                mode,
                amount,
                recipient,
                fees,
                use_all_amount,
                index,
            } => Ok(Transaction::Celo(CeloTransaction {
                mode: *mode,
                amount: parse_amount("amount", amount)?,
                recipient: recipient.clone(),
                fees: parse_optional_amount("fees", fees)?,
                use_all_amount: *use_all_amount,
                index: *index,
            })),
        }
    }

    fn deserialize_signed_transaction(
        &self,
        raw: &RawSignedTransaction,
    ) -> Result<SignedOperation> {
        let op = &raw.operation;
        Ok(SignedOperation {
            operation: Operation {
                id: op.id.clone(),
                hash: op.hash.clone(),
                operation_type: op.operation_type.clone(),
                value: parse_amount("value", &op.value)?,
                fee: parse_amount("fee", &op.fee)?,
                senders: op.senders.clone(),
                recipients: op.recipients.clone(),
                block_height: op.block_height,
                block_hash: op.block_hash.clone(),
                account_id: op.account_id.clone(),
                date: op.date,
                extra: op.extra.clone(),
            },
            signature: raw.signature.clone(),
            expiration_date: raw
                .expiration_date
                .as_deref()
                .map(|d| parse_date("expiration_date", d))
                .transpose()?,
        })
    }

    fn prepare_message_to_sign(&self, account: &MainAccount, message: &str) -> Result<MessageData> {
        if message.is_empty() {
            return Err(PlatformError::InvalidPayload(
                "message to sign is empty".to_string(),
            ));
        }

        Ok(MessageData {
            account_id: account.id.clone(),
            path: account.fresh_address_path.clone(),
            derivation_mode: account.derivation_mode.clone(),
            message: message.to_string(),
            raw_message: format!("0x{}", hex::encode(message.as_bytes())),
        })
    }

    fn account_to_platform_account(
        &self,
        account: &Account,
        parent: Option<&Account>,
    ) -> PlatformAccount {
        match account {
            Account::Account(a) => PlatformAccount {
                id: a.id.clone(),
                name: a.name.clone(),
                address: a.fresh_address.clone(),
                currency: a.currency.clone(),
                balance: a.balance,
                spendable_balance: a.spendable_balance,
                block_height: a.block_height,
                last_sync_date: a.last_sync_date,
            },
            Account::TokenAccount(a) => {
                let parent_main = parent.and_then(Account::as_main);
                PlatformAccount {
                    id: a.id.clone(),
                    name: parent_main
                        .map(|p| format!("{} ({})", p.name, a.token))
                        .unwrap_or_else(|| a.token.clone()),
                    address: parent_main
                        .map(|p| p.fresh_address.clone())
                        .unwrap_or_default(),
                    currency: a.token.clone(),
                    balance: a.balance,
                    spendable_balance: a.spendable_balance,
                    block_height: parent_main.map(|p| p.block_height).unwrap_or(0),
                    last_sync_date: parent_main
                        .map(|p| p.last_sync_date)
                        .unwrap_or(a.creation_date),
                }
            }
            Account::ChildAccount(a) => PlatformAccount {
                id: a.id.clone(),
                name: a.currency.clone(),
                address: a.address.clone(),
                currency: a.currency.clone(),
                balance: a.balance,
                spendable_balance: a.spendable_balance,
                block_height: parent.and_then(Account::as_main).map(|p| p.block_height).unwrap_or(0),
                last_sync_date: parent
                    .and_then(Account::as_main)
                    .map(|p| p.last_sync_date)
                    .unwrap_or(a.creation_date),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChainFamily, RawOperation};
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn main_account() -> MainAccount {
        MainAccount {
            id: "js:2:ethereum:0x012:".to_string(),
            name: "Ethereum 1".to_string(),
            fresh_address: "0x0123".to_string(),
            fresh_address_path: "44'/60'/0'/0/0".to_string(),
            derivation_mode: String::new(),
            family: ChainFamily::Ethereum,
            currency: "ethereum".to_string(),
            balance: Decimal::from(100),
            spendable_balance: Decimal::from(90),
            block_height: 42,
            last_sync_date: Utc.timestamp_opt(0, 0).unwrap(),
            celo_resources: None,
        }
    }

    #[test]
    fn test_deserialize_ethereum_transaction() {
        let raw = RawPlatformTransaction::Ethereum {
            amount: "1000".to_string(),
            recipient: "0x0123456".to_string(),
            nonce: 8,
            data: Some("Some data...".to_string()),
            gas_price: Some("700000000".to_string()),
            gas_limit: None,
        };

        let tx = DefaultSerializer.deserialize_transaction(&raw).unwrap();
        match tx {
            Transaction::Ethereum(tx) => {
                assert_eq!(tx.amount, Decimal::from(1000));
                assert_eq!(tx.nonce, 8);
                assert_eq!(tx.gas_price, Some(Decimal::from(700_000_000)));
                assert_eq!(tx.gas_limit, None);
            }
            _ => panic!("expected ethereum transaction"),
        }
    }

    #[test]
    fn test_deserialize_transaction_bad_amount() {
        let raw = RawPlatformTransaction::Ethereum {
            amount: "0,7".to_string(),
            recipient: "0x0123456".to_string(),
            nonce: 0,
            data: None,
            gas_price: None,
            gas_limit: None,
        };

        let err = DefaultSerializer.deserialize_transaction(&raw).unwrap_err();
        assert!(matches!(err, PlatformError::InvalidPayload(_)));
    }

    #[test]
    fn test_deserialize_signed_transaction() {
        let raw = RawSignedTransaction {
            operation: RawOperation {
                id: "12".to_string(),
                hash: "123456".to_string(),
                operation_type: "OUT".to_string(),
                value: "1000".to_string(),
                fee: "21".to_string(),
                senders: vec!["0xaaa".to_string()],
                recipients: vec!["0xbbb".to_string()],
                block_height: None,
                block_hash: None,
                account_id: "12".to_string(),
                date: Utc.timestamp_opt(0, 0).unwrap(),
                extra: BTreeMap::new(),
            },
            signature: "Signature".to_string(),
            expiration_date: Some("2026-01-01T00:00:00Z".to_string()),
        };

        let signed = DefaultSerializer
            .deserialize_signed_transaction(&raw)
            .unwrap();
        assert_eq!(signed.operation.value, Decimal::from(1000));
        assert_eq!(signed.signature, "Signature");
        assert!(signed.expiration_date.is_some());
    }

    #[test]
    fn test_prepare_message_to_sign() {
        let account = main_account();
        let data = DefaultSerializer
            .prepare_message_to_sign(&account, "Message to sign")
            .unwrap();

        assert_eq!(data.message, "Message to sign");
        assert_eq!(data.path, "44'/60'/0'/0/0");
        assert_eq!(data.raw_message, "0x4d65737361676520746f207369676e");
    }

    #[test]
    fn test_prepare_empty_message_fails() {
        let account = main_account();
        let err = DefaultSerializer
            .prepare_message_to_sign(&account, "")
            .unwrap_err();
        assert!(matches!(err, PlatformError::InvalidPayload(_)));
    }

    #[test]
    fn test_token_account_projection_uses_parent_address() {
        let parent = Account::Account(main_account());
        let token = Account::TokenAccount(crate::domain::TokenAccount {
            id: "15".to_string(),
            parent_id: "js:2:ethereum:0x012:".to_string(),
            token: "usdc".to_string(),
            balance: Decimal::ZERO,
            spendable_balance: Decimal::ZERO,
            creation_date: Utc.timestamp_opt(0, 0).unwrap(),
        });

        let projected = DefaultSerializer.account_to_platform_account(&token, Some(&parent));
        assert_eq!(projected.address, "0x0123");
        assert_eq!(projected.currency, "usdc");
    }
}
