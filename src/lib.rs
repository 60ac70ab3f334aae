//! WalletBridge - 多链钱包dApp平台中介层核心
//!
//! 在dApp请求与钱包账户/签名管线之间做中介：地址披露、交换完成、
//! 交易广播、消息签名。UI渲染、链RPC与硬件签名均为外部协作者。
//! 核心层零私钥、零持久化、零全局状态。

pub mod config;
pub mod domain;
pub mod error;
pub mod family;
pub mod infrastructure;
pub mod service;

// 重新导出常用类型
pub use config::Config;
pub use error::{PlatformError, Result};

// 统一模块导出
pub mod prelude {
    pub use crate::{
        config::Config,
        domain::{Account, AppManifest, SignedOperation, Transaction, TransactionStatus},
        error::{PlatformError, Result},
        family::{CeloValidator, TransactionValidator},
        service::{
            CompleteExchangeRequest, PlatformContext, PlatformLogicService, PlatformSerializer,
            Tracking,
        },
    };
}
