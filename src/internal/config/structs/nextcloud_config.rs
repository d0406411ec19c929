use core::fmt;
use std::{collections::HashMap, env, io::Read, path::Path, time::Duration};

use url::Url;

use crate::internal::error::NextcloudError;

/// 环境变量名
pub mod env_var_names {
    /// 实例根地址，如 `https://cloud.example.com`
    pub const NEXTCLOUD_URL: &str = "NEXTCLOUD_URL";
    pub const NEXTCLOUD_USERNAME: &str = "NEXTCLOUD_USERNAME";
    /// 密码或应用专用密码
    pub const NEXTCLOUD_PASSWORD: &str = "NEXTCLOUD_PASSWORD";
    /// 可选：所有相对路径的根目录
    pub const NEXTCLOUD_USAGE_FOLDER: &str = "NEXTCLOUD_USAGE_FOLDER";
    /// 可选：请求超时秒数
    pub const NEXTCLOUD_TIMEOUT_SECS: &str = "NEXTCLOUD_TIMEOUT_SECS";
}

/// 连接配置
///
/// 构建后不可变，构建时即完成校验；缺少必填项直接返回 [`NextcloudError::Config`]。
#[derive(Clone, PartialEq, Eq)]
pub struct NextcloudConfig {
    instance_url: String,
    username: String,
    password: String,
    usage_folder: Option<String>,
    timeout: Option<Duration>,
}

impl NextcloudConfig {
    pub fn new(
        instance_url: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, NextcloudError> {
        Ok(Self {
            instance_url: _format_instance_url(instance_url)?,
            username: _require("username", username)?,
            password: _require("password", password)?,
            usage_folder: None,
            timeout: None,
        })
    }

    /// 设置根目录，空白字符串视为未设置，首尾斜杠会被去掉
    pub fn with_usage_folder(mut self, usage_folder: &str) -> Self {
        let trimmed = usage_folder.trim().trim_matches('/');
        self.usage_folder =
            (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// 从进程环境变量读取配置
    pub fn from_env() -> Result<Self, NextcloudError> {
        Self::_from_lookup(|name| env::var(name).ok())
    }

    /// 读取环境变量，并以当前目录的 `.env` 补充缺失的项
    ///
    /// `.env` 不存在时忽略；文件存在但无法解析时返回 [`NextcloudError::Config`]。
    /// 不会修改进程环境变量。
    pub fn from_dotenv() -> Result<Self, NextcloudError> {
        let file_vars = _read_env_file(dotenvy::dotenv_iter(), ".env", true)?;
        Self::_from_lookup(|name| {
            env::var(name).ok().or_else(|| file_vars.get(name).cloned())
        })
    }

    /// 从指定的 env 文件加载，文件中的值优先于进程环境变量
    ///
    /// 文件不存在或无法解析都会返回 [`NextcloudError::Config`]，进程环境变量保持不变。
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, NextcloudError> {
        let path = path.as_ref();
        let file_vars = _read_env_file(
            dotenvy::from_path_iter(path),
            &path.display().to_string(),
            false,
        )?;
        Self::_from_lookup(|name| {
            file_vars.get(name).cloned().or_else(|| env::var(name).ok())
        })
    }

    fn _from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, NextcloudError> {
        use env_var_names::*;

        let read_var = |name: &str| {
            lookup(name).ok_or_else(|| {
                NextcloudError::Config(format!("缺少环境变量 {name}"))
            })
        };

        let mut config = Self::new(
            &read_var(NEXTCLOUD_URL)?,
            &read_var(NEXTCLOUD_USERNAME)?,
            &read_var(NEXTCLOUD_PASSWORD)?,
        )?;

        if let Some(folder) = lookup(NEXTCLOUD_USAGE_FOLDER) {
            config = config.with_usage_folder(&folder);
        }

        if let Some(raw) = lookup(NEXTCLOUD_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    NextcloudError::Config(format!(
                        "{NEXTCLOUD_TIMEOUT_SECS} 必须是正整数，当前为 {raw:?}"
                    ))
                })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// 实例根地址，不带尾部斜杠
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    pub fn usage_folder(&self) -> Option<&str> {
        self.usage_folder.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// 防止debug泄漏密码
impl fmt::Debug for NextcloudConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NextcloudConfig")
            .field("instance_url", &self.instance_url)
            .field("username", &self.username)
            .field("password", &"<hidden>")
            .field("usage_folder", &self.usage_folder)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// 将 env 文件解析为键值表
///
/// `optional` 为真时，文件不存在视为空表；其余打开或解析错误一律返回 Config 错误
pub(crate) fn _read_env_file<R: Read>(
    opened: Result<dotenvy::Iter<R>, dotenvy::Error>,
    source: &str,
    optional: bool,
) -> Result<HashMap<String, String>, NextcloudError> {
    let to_config_error = |e: dotenvy::Error| {
        NextcloudError::Config(format!("加载 env 文件失败 {source}: {e}"))
    };

    match opened {
        Ok(iter) => iter.collect::<Result<_, _>>().map_err(to_config_error),
        Err(e) if optional && e.not_found() => Ok(HashMap::new()),
        Err(e) => Err(to_config_error(e)),
    }
}

fn _require(field: &str, value: &str) -> Result<String, NextcloudError> {
    if value.trim().is_empty() {
        return Err(NextcloudError::Config(format!("{field} 不能为空")));
    }
    Ok(value.to_string())
}

fn _format_instance_url(url: &str) -> Result<String, NextcloudError> {
    let url = _require("instance_url", url)?;

    let parsed = Url::parse(url.trim()).map_err(|e| {
        NextcloudError::Config(format!("实例地址无效 {url:?}: {e}"))
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(NextcloudError::Config(format!(
            "实例地址必须是 http(s)，当前为 {}",
            parsed.scheme()
        )));
    }

    Ok(url.trim().trim_end_matches('/').to_string())
}
