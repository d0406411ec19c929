use reqwest::header::HeaderValue;
use reqwest::Client;
use tracing::debug;

use crate::internal::error::FailureReason;
use crate::internal::webdav::enums::WebDavMethod;
use crate::internal::webdav::functions::send_checked::send_checked;
use crate::internal::webdav::status::{COPY_OK, MOVE_OK};

/// MOVE / COPY 共用：带 `Destination` 头发送到源地址
async fn relocate(
    client: &Client,
    method: WebDavMethod,
    source_url: &str,
    destination_url: &str,
    accepted: &[u16],
) -> Result<(), FailureReason> {
    let head_method =
        method.to_head_method().map_err(FailureReason::InvalidRequest)?;

    let destination = HeaderValue::from_str(destination_url)
        .map_err(|e| FailureReason::InvalidRequest(e.to_string()))?;

    debug!(
        method = method.as_str(),
        from = source_url,
        to = destination_url,
        "relocate"
    );

    send_checked(
        client
            .request(head_method, source_url)
            .header("Destination", destination),
        accepted,
    )
    .await?;

    Ok(())
}

/// 移动或重命名
pub(crate) async fn move_resource(
    client: &Client,
    source_url: &str,
    destination_url: &str,
) -> Result<(), FailureReason> {
    relocate(client, WebDavMethod::MOVE, source_url, destination_url, MOVE_OK)
        .await
}

pub(crate) async fn copy_resource(
    client: &Client,
    source_url: &str,
    destination_url: &str,
) -> Result<(), FailureReason> {
    relocate(client, WebDavMethod::COPY, source_url, destination_url, COPY_OK)
        .await
}
