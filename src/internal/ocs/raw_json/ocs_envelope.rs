use serde::{Deserialize, Serialize};

/// 创建分享的请求体
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareRequest<'a> {
    pub path: &'a str,
    pub share_type: u8,
    pub permissions: u8,
}

/// OCS 响应外层 `{ "ocs": { ... } }`
///
/// 所有字段都有默认值：缺字段时会在状态码检查阶段报错，而不是在反序列化阶段。
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct OcsEnvelope {
    pub ocs: OcsBody,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct OcsBody {
    pub meta: OcsMeta,
    /// 失败时服务端会返回空数组 `[]`，所以按任意 JSON 接收
    pub data: serde_json::Value,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct OcsMeta {
    /// 缺失时为 0
    pub statuscode: i64,
    pub message: Option<String>,
}

impl OcsBody {
    /// `data.url`，空字符串按缺失处理
    pub fn share_url(&self) -> Option<&str> {
        self.data
            .get("url")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}
