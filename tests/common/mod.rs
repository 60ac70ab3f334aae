//! 集成测试公共fixture
//!
//! 账户、清单与埋点记录器的构造工具。

use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use walletbridge::domain::{
    Account, AppManifest, ChainFamily, Currencies, MainAccount, RawOperation, RawSignedTransaction,
    TokenAccount,
};
use walletbridge::service::Tracking;

/// 构造主账户fixture，id形如 `js:2:ethereum:0x011:`
pub fn create_fixture_account(suffix: &str) -> Account {
    Account::Account(MainAccount {
        id: format!("js:2:ethereum:0x0{}:", suffix),
        name: format!("Ethereum {}", suffix),
        fresh_address: format!("0xfresh{}", suffix),
        fresh_address_path: "44'/60'/0'/0/0".to_string(),
        derivation_mode: String::new(),
        family: ChainFamily::Ethereum,
        currency: "ethereum".to_string(),
        balance: Decimal::from(1_000_000),
        spendable_balance: Decimal::from(1_000_000),
        block_height: 100,
        last_sync_date: Utc.timestamp_opt(0, 0).unwrap(),
        celo_resources: None,
    })
}

/// 构造代币子账户fixture
pub fn create_token_account(id: &str, parent_id: &str) -> Account {
    Account::TokenAccount(TokenAccount {
        id: id.to_string(),
        parent_id: parent_id.to_string(),
        token: "usdc".to_string(),
        balance: Decimal::ZERO,
        spendable_balance: Decimal::ZERO,
        creation_date: Utc.timestamp_opt(0, 0).unwrap(),
    })
}

pub fn create_app_manifest() -> AppManifest {
    AppManifest {
        id: "test-dapp".to_string(),
        name: "Test dApp".to_string(),
        url: "https://example.com".to_string(),
        homepage_url: None,
        api_version: "1.0.0".to_string(),
        manifest_version: "1.0.0".to_string(),
        branch: "debug".to_string(),
        private: false,
        currencies: Currencies::Wildcard("*".to_string()),
        permissions: vec![],
        categories: vec![],
        domains: vec![],
    }
}

pub fn create_raw_signed_transaction() -> RawSignedTransaction {
    RawSignedTransaction {
        operation: RawOperation {
            id: "12".to_string(),
            hash: "123456".to_string(),
            operation_type: "OUT".to_string(),
            value: "1000".to_string(),
            fee: "21".to_string(),
            senders: vec![],
            recipients: vec![],
            block_height: None,
            block_hash: None,
            account_id: "12".to_string(),
            date: Utc.timestamp_opt(0, 0).unwrap(),
            extra: Default::default(),
        },
        signature: "Signature".to_string(),
        expiration_date: None,
    }
}

/// 记录每个埋点事件触发次数
#[derive(Default)]
pub struct RecordingTracker {
    events: Mutex<Vec<&'static str>>,
}

impl RecordingTracker {
    fn record(&self, event: &'static str) {
        self.events.lock().unwrap().push(event);
    }

    pub fn count(&self, event: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| **e == event)
            .count()
    }
}

impl Tracking for RecordingTracker {
    fn receive_requested(&self, _: &AppManifest) {
        self.record("receive_requested");
    }
    fn receive_fail(&self, _: &AppManifest) {
        self.record("receive_fail");
    }
    fn complete_exchange_requested(&self, _: &AppManifest) {
        self.record("complete_exchange_requested");
    }
    fn complete_exchange_fail(&self, _: &AppManifest) {
        self.record("complete_exchange_fail");
    }
    fn broadcast_requested(&self, _: &AppManifest) {
        self.record("broadcast_requested");
    }
    fn broadcast_fail(&self, _: &AppManifest) {
        self.record("broadcast_fail");
    }
    fn sign_message_requested(&self, _: &AppManifest) {
        self.record("sign_message_requested");
    }
    fn sign_message_fail(&self, _: &AppManifest) {
        self.record("sign_message_fail");
    }
}
