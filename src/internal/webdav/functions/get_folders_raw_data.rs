use quick_xml::de::from_str;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use tracing::debug;

use crate::internal::error::FailureReason;
use crate::internal::webdav::enums::{Depth, WebDavMethod};
use crate::internal::webdav::functions::send_checked::send_checked;
use crate::internal::webdav::status::LIST_OK;
use crate::webdav::structs::MultiStatus;

/// 列目录时使用的PROPFIND请求体，只请求需要的几个属性
pub const PROPFIND_BODY: &str = r#"<?xml version="1.0"?>
<d:propfind xmlns:d="DAV:" xmlns:oc="http://owncloud.org/ns" xmlns:nc="http://nextcloud.org/ns">
  <d:prop>
    <d:displayname/>
    <d:getcontenttype/>
    <d:getcontentlength/>
    <d:getlastmodified/>
    <d:resourcetype/>
  </d:prop>
</d:propfind>"#;

/// 获取原始webdav文件夹数据
pub async fn get_folders_raw_data(
    client: &reqwest::Client,
    absolute_url: &str,
    depth: &Depth,
) -> Result<MultiStatus, FailureReason> {
    // 组装请求头
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/xml"));
    headers.insert("Depth", HeaderValue::from_static(depth.as_str()));
    headers.insert(ACCEPT, HeaderValue::from_static("application/xml"));

    let method = WebDavMethod::PROPFIND
        .to_head_method()
        .map_err(FailureReason::InvalidRequest)?;

    debug!(url = absolute_url, depth = depth.as_str(), "PROPFIND");

    let res = send_checked(
        client
            .request(method, absolute_url)
            .headers(headers)
            .body(PROPFIND_BODY),
        LIST_OK,
    )
    .await?;

    let xml_text = res.text().await?;

    let multi_status: MultiStatus = from_str(&xml_text)?;

    Ok(multi_status)
}
