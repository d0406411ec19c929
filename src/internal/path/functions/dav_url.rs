use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::internal::config::structs::nextcloud_config::NextcloudConfig;

/// 路径段中需要转义的字符（`/` 由调用方按段切分，不在此处理）
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'|')
    // http(s) 下 url 会把 `\` 当作 `/`
    .add(b'\\')
    .add(b'/');

/// OCS 分享接口的相对路径
const OCS_SHARES_ENDPOINT: &str = "ocs/v2.php/apps/files_sharing/api/v1/shares";

fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// 远端路径对应的 WebDAV 地址
///
/// `{instance}/remote.php/dav/files/{username}/{remote_path}`，各路径段会做百分号编码
pub fn dav_url(config: &NextcloudConfig, remote_path: &str) -> String {
    format!(
        "{}/remote.php/dav/files/{}/{}",
        config.instance_url(),
        encode_path(config.username()),
        encode_path(remote_path)
    )
}

/// 分享接口地址
pub fn ocs_shares_url(config: &NextcloudConfig) -> String {
    format!("{}/{}", config.instance_url(), OCS_SHARES_ENDPOINT)
}

/// 将 href（可能是完整 URL，也可能只是路径）规整为解码后、去掉尾部斜杠的路径
pub fn normalize_href(href: &str) -> String {
    let path = match Url::parse(href) {
        Ok(url) => url.path().to_string(),
        Err(_) => href.to_string(),
    };

    percent_decode_str(&path)
        .decode_utf8_lossy()
        .trim_end_matches('/')
        .to_string()
}

/// 远端目录在 PROPFIND 响应中应出现的 href（已规整），用于从列表中排除目录自身
pub fn self_href(config: &NextcloudConfig, remote_path: &str) -> String {
    normalize_href(&dav_url(config, remote_path))
}
