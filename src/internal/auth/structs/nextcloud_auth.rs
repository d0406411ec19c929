use core::fmt;
use std::sync::Arc;

use base64::Engine;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client,
};
use sha2::{Digest, Sha256};

use crate::internal::config::structs::nextcloud_config::NextcloudConfig;
use crate::internal::error::NextcloudError;

/// 认证结构体
///
/// 该结构体定位
/// - 持有带 Basic 认证与 OCS 请求头的 http 客户端
/// - 供 WebDAV 与 OCS 两套接口共用，连接池由 reqwest 内部管理
///
/// 默认Eq时会匹配实例地址、用户名和token，如果需要单独比较token，需使用eq_only_token方法
#[derive(Clone)]
pub struct NextcloudAuth {
    pub client: Client, // 内部是Arc，不需要特殊处理
    pub config: Arc<NextcloudConfig>, // 跨任务共享，避免深拷贝
    pub(crate) encrypted_token: Arc<String>, // 对外导出时，不允许直接访问，哪怕它是被加密的
}

impl NextcloudAuth {
    /// 根据配置创建认证结构体
    pub fn new(config: NextcloudConfig) -> Result<Self, NextcloudError> {
        let http_client = _InternalHttpClient::_create(&config)?;

        Ok(Self {
            client: http_client.client,
            config: Arc::new(config),
            encrypted_token: Arc::new(http_client.encrypted_token),
        })
    }

    /// 仅比较token是否相等
    pub fn eq_only_token(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
    }
}

impl PartialEq for NextcloudAuth {
    fn eq(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
            && self.config.instance_url() == other.config.instance_url()
            && self.config.username() == other.config.username()
    }
}

/// 防止debug泄漏账号
impl fmt::Debug for NextcloudAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NextcloudAuth")
            .field("instance_url", &self.config.instance_url())
            .field("client", &"<Client with hidden authorization>")
            .finish()
    }
}

/// 内部临时使用的http客户端结构体，在初始化NextcloudAuth时使用
struct _InternalHttpClient {
    client: Client,
    encrypted_token: String,
}

impl _InternalHttpClient {
    fn _encrypt_str(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// 创建http客户端，内部使用
    fn _create(config: &NextcloudConfig) -> Result<Self, NextcloudError> {
        let mut headers = HeaderMap::new();

        let token = base64::engine::general_purpose::STANDARD.encode(format!(
            "{}:{}",
            config.username(),
            config.password()
        ));

        let mut auth_value = HeaderValue::from_str(&format!("Basic {}", token))
            .map_err(|e| NextcloudError::Config(e.to_string()))?;
        auth_value.set_sensitive(true);

        headers.insert(AUTHORIZATION, auth_value);
        // OCS 接口要求该头
        headers.insert("OCS-APIRequest", HeaderValue::from_static("true"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| NextcloudError::Config(e.to_string()))?;

        let encrypted_token = Self::_encrypt_str(&token);

        Ok(Self { client: http_client, encrypted_token })
    }
}
