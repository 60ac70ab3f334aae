//! dApp请求埋点
//!
//! 同步、即发即忘的观测事件。每个敏感操作在解析账户之前记一次"requested"，
//! 校验/格式化失败时追加一次对应的"fail"。导航回调自身的拒绝由确认UI负责
//! 埋点，核心层不重复记录。
//!
//! trait方法全部带空默认实现：未覆写 = 不记录，等价于事件表中缺失该事件。

use tracing::info;

use crate::domain::AppManifest;

/// 埋点事件接收端
pub trait Tracking: Send + Sync {
    fn receive_requested(&self, _manifest: &AppManifest) {}
    fn receive_fail(&self, _manifest: &AppManifest) {}

    fn complete_exchange_requested(&self, _manifest: &AppManifest) {}
    fn complete_exchange_fail(&self, _manifest: &AppManifest) {}

    fn broadcast_requested(&self, _manifest: &AppManifest) {}
    fn broadcast_fail(&self, _manifest: &AppManifest) {}

    fn sign_message_requested(&self, _manifest: &AppManifest) {}
    fn sign_message_fail(&self, _manifest: &AppManifest) {}
}

/// 不记录任何事件
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracker;

impl Tracking for NoopTracker {}

/// 以结构化日志落埋点事件
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTracker;

impl TracingTracker {
    fn emit(&self, event: &'static str, manifest: &AppManifest) {
        info!(
            event,
            dapp_id = %manifest.id,
            dapp_branch = %manifest.branch,
            "platform tracking event"
        );
    }
}

impl Tracking for TracingTracker {
    fn receive_requested(&self, manifest: &AppManifest) {
        self.emit("platform_receive_requested", manifest);
    }

    fn receive_fail(&self, manifest: &AppManifest) {
        self.emit("platform_receive_fail", manifest);
    }

    fn complete_exchange_requested(&self, manifest: &AppManifest) {
        self.emit("platform_complete_exchange_requested", manifest);
    }

    fn complete_exchange_fail(&self, manifest: &AppManifest) {
        self.emit("platform_complete_exchange_fail", manifest);
    }

    fn broadcast_requested(&self, manifest: &AppManifest) {
        self.emit("platform_broadcast_requested", manifest);
    }

    fn broadcast_fail(&self, manifest: &AppManifest) {
        self.emit("platform_broadcast_fail", manifest);
    }

    fn sign_message_requested(&self, manifest: &AppManifest) {
        self.emit("platform_sign_message_requested", manifest);
    }

    fn sign_message_fail(&self, manifest: &AppManifest) {
        self.emit("platform_sign_message_fail", manifest);
    }
}
