use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::internal::error::FailureReason;
use crate::internal::webdav::status::is_accepted;

/// 发送请求并按成功表检查状态码
///
/// 表外的状态码会读取响应体，连同状态码一起放进 [`FailureReason::UnexpectedStatus`]。
pub(crate) async fn send_checked(
    request: RequestBuilder,
    accepted: &[u16],
) -> Result<Response, FailureReason> {
    let res = request.send().await?;
    let status = res.status().as_u16();

    debug!(status, url = %res.url(), "收到响应");

    if is_accepted(accepted, status) {
        return Ok(res);
    }

    Err(unexpected_status(res).await)
}

/// 读取响应体构造状态码错误，响应体读取失败时以空串代替
pub(crate) async fn unexpected_status(res: Response) -> FailureReason {
    let status = res.status().as_u16();
    let body = res.text().await.unwrap_or_default();
    FailureReason::unexpected_status(status, body)
}
