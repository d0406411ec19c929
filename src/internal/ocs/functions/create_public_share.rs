use reqwest::Client;
use tracing::debug;

use crate::internal::error::FailureReason;
use crate::internal::ocs::enums::{SharePermission, ShareType};
use crate::internal::ocs::raw_json::ocs_envelope::{CreateShareRequest, OcsEnvelope};
use crate::internal::webdav::status::{OCS_META_OK, SHARE_OK};

/// OCS 未给出 message 时使用的提示
const UNKNOWN_OCS_ERROR: &str = "Unknown OCS API error.";

/// 为远端路径创建只读公开链接，返回链接地址
pub(crate) async fn create_public_share(
    client: &Client,
    shares_url: &str,
    remote_path: &str,
) -> Result<String, FailureReason> {
    let payload = CreateShareRequest {
        path: remote_path,
        share_type: ShareType::PublicLink.code(),
        permissions: SharePermission::Read.bits(),
    };

    debug!(url = shares_url, path = remote_path, "POST share");

    let res = client.post(shares_url).json(&payload).send().await?;
    let status = res.status().as_u16();
    let body = res.bytes().await?;

    resolve_share_response(status, &body)
}

/// 解析分享接口响应
///
/// HTTP 状态码与 OCS 内层 `meta.statuscode` 需分别检查：HTTP 200 不代表分享成功。
pub fn resolve_share_response(
    status: u16,
    body: &[u8],
) -> Result<String, FailureReason> {
    if !SHARE_OK.contains(&status) {
        return Err(FailureReason::unexpected_status(
            status,
            String::from_utf8_lossy(body).into_owned(),
        ));
    }

    let envelope: OcsEnvelope = serde_json::from_slice(body)?;
    let ocs = envelope.ocs;

    if !OCS_META_OK.contains(&ocs.meta.statuscode) {
        return Err(FailureReason::Ocs {
            message: ocs
                .meta
                .message
                .unwrap_or_else(|| UNKNOWN_OCS_ERROR.to_string()),
            code: ocs.meta.statuscode,
        });
    }

    ocs.share_url()
        .map(str::to_string)
        .ok_or(FailureReason::MissingShareUrl)
}
