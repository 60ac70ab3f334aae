pub mod platform_logic; // ✅ 核心: dApp请求中介
pub mod serializers; // 载荷转换协作者（构造注入）
pub mod tracking; // 埋点事件接收端

pub use platform_logic::{
    CompleteExchangeRequest, CompleteExchangeUiRequest, Exchange, PlatformContext,
    PlatformLogicService,
};
pub use serializers::{DefaultSerializer, PlatformSerializer};
pub use tracking::{NoopTracker, TracingTracker, Tracking};
