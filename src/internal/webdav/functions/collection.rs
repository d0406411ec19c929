use reqwest::Client;
use tracing::{debug, warn};

use crate::internal::error::FailureReason;
use crate::internal::webdav::enums::WebDavMethod;
use crate::internal::webdav::functions::send_checked::send_checked;
use crate::internal::webdav::status::{DELETE_OK, MKCOL_OK};

/// MKCOL 创建目录，目录已存在（405）按成功处理
pub(crate) async fn make_collection(
    client: &Client,
    absolute_url: &str,
) -> Result<(), FailureReason> {
    let method = WebDavMethod::MKCOL
        .to_head_method()
        .map_err(FailureReason::InvalidRequest)?;

    debug!(url = absolute_url, "MKCOL");
    let res = send_checked(client.request(method, absolute_url), MKCOL_OK).await?;

    if res.status().as_u16() == 405 {
        warn!(url = absolute_url, "目录已存在，视为创建成功");
    }
    Ok(())
}

/// DELETE 删除文件或目录，目标不存在（404）按成功处理
pub(crate) async fn delete_resource(
    client: &Client,
    absolute_url: &str,
) -> Result<(), FailureReason> {
    debug!(url = absolute_url, "DELETE");
    let res = send_checked(client.delete(absolute_url), DELETE_OK).await?;

    if res.status().as_u16() == 404 {
        warn!(url = absolute_url, "目标不存在，视为删除成功");
    }
    Ok(())
}
