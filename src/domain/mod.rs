//! Domain 模块
//!
//! 包含核心业务领域模型：账户、dApp清单、交易形态与校验结果

pub mod account;
pub mod manifest;
pub mod transaction;
pub mod transaction_status;

// Re-exports
// 重新导出常用类型
pub use account::{
    find_account_by_id, get_parent_account, Account, CeloResources, CeloVote, ChildAccount,
    MainAccount, PlatformAccount, TokenAccount,
};
pub use manifest::{AppManifest, Currencies};
pub use transaction::{
    CeloOperationMode, CeloTransaction, ChainFamily, EthereumTransaction, MessageData, Operation,
    RawOperation, RawPlatformTransaction, RawSignedTransaction, SignedOperation, Transaction,
};
pub use transaction_status::{StatusError, StatusField, StatusWarning, TransactionStatus};
