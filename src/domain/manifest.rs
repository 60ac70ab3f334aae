//! dApp清单描述
//!
//! 静态只读输入：调用方dApp的身份、权限和支持的币种。核心层绝不修改。

use serde::{Deserialize, Serialize};

/// dApp静态描述符
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppManifest {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub homepage_url: Option<String>,
    pub api_version: String,
    pub manifest_version: String,
    /// 发布渠道: stable | experimental | debug
    pub branch: String,
    #[serde(default)]
    pub private: bool,
    /// 允许的币种，"*" 表示全部
    #[serde(default = "default_currencies")]
    pub currencies: Currencies,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub domains: Vec<String>,
}

/// 币种白名单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Currencies {
    /// "*"：不限制
    Wildcard(String),
    List(Vec<String>),
}

fn default_currencies() -> Currencies {
    Currencies::Wildcard("*".to_string())
}

impl Currencies {
    pub fn allows(&self, currency: &str) -> bool {
        match self {
            Self::Wildcard(w) => w == "*",
            Self::List(list) => list.iter().any(|c| c == currency),
        }
    }
}
