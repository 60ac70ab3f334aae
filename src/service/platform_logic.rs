//! 平台中介层核心：dApp请求的四个处理操作
//!
//! 四个操作共享同一骨架：
//! 记"requested"埋点 → 解析账户 → （校验） → 转换载荷 → 交给确认UI回调，
//! 回调结果原样返回；任何解析/校验/转换失败记一次"fail"埋点后上抛。
//! 这保证了每个dApp触发的敏感动作（地址披露、签名、广播）在进入确认UI
//! 或签名设备之前都已被观测、且对非法输入干净拒绝。
//!
//! 上下文只在单次调用期间被借用，核心层不跨调用保留任何引用，
//! 也不主动拉取账户数据。

use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    find_account_by_id, get_parent_account, Account, AppManifest, MessageData,
    RawPlatformTransaction, RawSignedTransaction, SignedOperation, Transaction,
};
use crate::error::{PlatformError, Result};
use crate::infrastructure::log_redact::{redact_address, redact_message, redact_signature};
use crate::service::serializers::{DefaultSerializer, PlatformSerializer};
use crate::service::tracking::Tracking;

/// 请求级上下文：由调用方UI会话持有，核心层借用一次调用的时长
///
/// `accounts` 是已加载好的权威快照。
pub struct PlatformContext<'a> {
    pub manifest: &'a AppManifest,
    pub accounts: &'a [Account],
    pub tracking: &'a dyn Tracking,
}

/// dApp提交的交换完成请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteExchangeRequest {
    pub provider: String,
    pub from_account_id: String,
    #[serde(default)]
    pub to_account_id: Option<String>,
    pub transaction: RawPlatformTransaction,
    pub binary_payload: String,
    pub signature: String,
    pub fees_strategy: String,
    pub exchange_type: u32,
}

/// 交换描述符：主账户的parent为None，子账户的parent指向归属主账户
#[derive(Debug, Clone)]
pub struct Exchange {
    pub from_account: Account,
    pub from_parent_account: Option<Account>,
    pub to_account: Option<Account>,
    pub to_parent_account: Option<Account>,
}

/// 交给确认UI的完整交换参数
#[derive(Debug, Clone)]
pub struct CompleteExchangeUiRequest {
    pub provider: String,
    pub exchange: Exchange,
    pub transaction: Transaction,
    pub binary_payload: String,
    pub signature: String,
    pub fees_strategy: String,
    pub exchange_type: u32,
}

/// 中介层服务
///
/// 转换协作者通过构造注入，不引用全局单例。
pub struct PlatformLogicService {
    serializer: Arc<dyn PlatformSerializer>,
}

impl Default for PlatformLogicService {
    fn default() -> Self {
        Self::new(Arc::new(DefaultSerializer))
    }
}

impl PlatformLogicService {
    pub fn new(serializer: Arc<dyn PlatformSerializer>) -> Self {
        Self { serializer }
    }

    /// 接收地址披露
    ///
    /// 任意账户类型均可接收；地址取自dApp侧投影。
    pub async fn receive_on_account<R, F, Fut>(
        &self,
        context: &PlatformContext<'_>,
        account_id: &str,
        ui_navigation: F,
    ) -> Result<R>
    where
        F: FnOnce(AppManifest, Account, String) -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        context.tracking.receive_requested(context.manifest);
        debug!(trace_id = %Uuid::new_v4(), account_id, "platform receive requested");

        let account = match find_account_by_id(context.accounts, account_id) {
            Some(account) => account,
            None => {
                context.tracking.receive_fail(context.manifest);
                return Err(PlatformError::AccountNotFound);
            }
        };

        let parent = get_parent_account(account, context.accounts);
        let address = self
            .serializer
            .account_to_platform_account(account, parent)
            .address;
        debug!(account_id, address = %redact_address(&address), "disclosing receive address");

        ui_navigation(context.manifest.clone(), account.clone(), address).await
    }

    /// 交换完成
    ///
    /// `from_account_id` 必须解析成功；`to_account_id` 缺失或未命中时
    /// "to"侧整体为None。内嵌原始交易按账户链family反序列化。
    pub async fn complete_exchange<R, F, Fut>(
        &self,
        context: &PlatformContext<'_>,
        request: CompleteExchangeRequest,
        ui_navigation: F,
    ) -> Result<R>
    where
        F: FnOnce(CompleteExchangeUiRequest) -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        context.tracking.complete_exchange_requested(context.manifest);
        debug!(
            trace_id = %Uuid::new_v4(),
            from_account_id = %request.from_account_id,
            provider = %request.provider,
            "platform complete exchange requested"
        );

        let from_account = match find_account_by_id(context.accounts, &request.from_account_id) {
            Some(account) => account,
            None => {
                context.tracking.complete_exchange_fail(context.manifest);
                return Err(PlatformError::AccountNotFound);
            }
        };
        let from_parent_account = get_parent_account(from_account, context.accounts);

        let to_account = request
            .to_account_id
            .as_deref()
            .and_then(|id| find_account_by_id(context.accounts, id));
        let to_parent_account =
            to_account.and_then(|account| get_parent_account(account, context.accounts));

        let transaction = match self.serializer.deserialize_transaction(&request.transaction) {
            Ok(tx) => tx,
            Err(err) => {
                context.tracking.complete_exchange_fail(context.manifest);
                return Err(err);
            }
        };

        // 交易family必须与出款主账户的链family一致
        if let Some(main) = from_account.as_main().or_else(|| {
            from_parent_account.and_then(Account::as_main)
        }) {
            if transaction.family() != main.family {
                context.tracking.complete_exchange_fail(context.manifest);
                return Err(PlatformError::InvalidPayload(format!(
                    "transaction family {} does not match account family {}",
                    transaction.family(),
                    main.family
                )));
            }
        }

        let ui_request = CompleteExchangeUiRequest {
            provider: request.provider,
            exchange: Exchange {
                from_account: from_account.clone(),
                from_parent_account: from_parent_account.cloned(),
                to_account: to_account.cloned(),
                to_parent_account: to_parent_account.cloned(),
            },
            transaction,
            binary_payload: request.binary_payload,
            signature: request.signature,
            fees_strategy: request.fees_strategy,
            exchange_type: request.exchange_type,
        };

        ui_navigation(ui_request).await
    }

    /// 已签名交易广播
    pub async fn broadcast_transaction<R, F, Fut>(
        &self,
        context: &PlatformContext<'_>,
        account_id: &str,
        raw_signed_transaction: &RawSignedTransaction,
        ui_navigation: F,
    ) -> Result<R>
    where
        F: FnOnce(AppManifest, Account, SignedOperation) -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        context.tracking.broadcast_requested(context.manifest);
        debug!(trace_id = %Uuid::new_v4(), account_id, "platform broadcast requested");

        let account = match find_account_by_id(context.accounts, account_id) {
            Some(account) => account,
            None => {
                context.tracking.broadcast_fail(context.manifest);
                return Err(PlatformError::AccountNotFound);
            }
        };

        let signed_operation = match self
            .serializer
            .deserialize_signed_transaction(raw_signed_transaction)
        {
            Ok(signed) => signed,
            Err(err) => {
                context.tracking.broadcast_fail(context.manifest);
                return Err(err);
            }
        };
        debug!(
            account_id,
            operation_hash = %signed_operation.operation.hash,
            signature = %redact_signature(&signed_operation.signature),
            "forwarding signed operation to confirmation"
        );

        ui_navigation(context.manifest.clone(), account.clone(), signed_operation).await
    }

    /// 消息签名
    ///
    /// 仅主账户可签名；代币/派生子账户拒绝（区别于账户未找到）。
    /// 格式化器的错误在记完埋点后原样上抛。
    pub async fn sign_message<R, F, Fut>(
        &self,
        context: &PlatformContext<'_>,
        account_id: &str,
        message: &str,
        ui_navigation: F,
    ) -> Result<R>
    where
        F: FnOnce(Account, MessageData) -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        context.tracking.sign_message_requested(context.manifest);
        debug!(
            trace_id = %Uuid::new_v4(),
            account_id,
            message = %redact_message(message),
            "platform sign message requested"
        );

        let account = match find_account_by_id(context.accounts, account_id) {
            Some(account) => account,
            None => {
                context.tracking.sign_message_fail(context.manifest);
                return Err(PlatformError::AccountNotFound);
            }
        };

        let main_account = match account.as_main() {
            Some(main) => main,
            None => {
                context.tracking.sign_message_fail(context.manifest);
                return Err(PlatformError::AccountTypeNotSupported);
            }
        };

        let message_data = match self
            .serializer
            .prepare_message_to_sign(main_account, message)
        {
            Ok(data) => data,
            Err(err) => {
                context.tracking.sign_message_fail(context.manifest);
                return Err(err);
            }
        };

        ui_navigation(account.clone(), message_data).await
    }
}
