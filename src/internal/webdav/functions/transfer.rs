//! 整文件上传与下载，内容完整驻留内存。

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::internal::error::FailureReason;
use crate::internal::remote_file::structs::remote_file_content::{
    RemoteFileContent, DEFAULT_MIME_TYPE,
};
use crate::internal::webdav::functions::send_checked::{
    send_checked, unexpected_status,
};
use crate::internal::webdav::status::{READ_OK, UPLOAD_OK};

/// 文件夹打包下载时期望的 Content-Type
const ZIP_MIME_TYPE: &str = "application/zip";

/// PUT 上传，已存在时覆盖
pub(crate) async fn put_file(
    client: &Client,
    absolute_url: &str,
    content: Bytes,
) -> Result<(), FailureReason> {
    debug!(url = absolute_url, bytes = content.len(), "PUT");
    send_checked(client.put(absolute_url).body(content), UPLOAD_OK).await?;
    Ok(())
}

/// GET 读取文件，`display_path` 仅用于 404 时的提示信息
pub(crate) async fn get_file(
    client: &Client,
    absolute_url: &str,
    display_path: &str,
) -> Result<RemoteFileContent, FailureReason> {
    debug!(url = absolute_url, "GET");
    let res = client.get(absolute_url).send().await?;

    match res.status() {
        StatusCode::NOT_FOUND => {
            Err(FailureReason::NotFound(display_path.to_string()))
        }
        s if READ_OK.contains(&s.as_u16()) => {
            let mime_type = header_str(&res, CONTENT_TYPE)
                .unwrap_or(DEFAULT_MIME_TYPE)
                .to_string();
            let bytes = res.bytes().await?;
            Ok(RemoteFileContent { bytes, mime_type })
        }
        _ => Err(unexpected_status(res).await),
    }
}

/// GET 打包下载文件夹，服务端须返回 `application/zip`
pub(crate) async fn get_folder_zip(
    client: &Client,
    absolute_url: &str,
    display_path: &str,
) -> Result<Bytes, FailureReason> {
    debug!(url = absolute_url, "GET (zip)");
    let res = client.get(absolute_url).send().await?;

    match res.status() {
        StatusCode::NOT_FOUND => {
            Err(FailureReason::NotFound(display_path.to_string()))
        }
        StatusCode::OK => {
            let content_type =
                header_str(&res, CONTENT_TYPE).unwrap_or("").to_string();
            // 忽略 `; charset=...` 等参数
            let essence = content_type.split(';').next().unwrap_or("").trim();
            if !essence.eq_ignore_ascii_case(ZIP_MIME_TYPE) {
                return Err(FailureReason::ContentTypeMismatch(content_type));
            }
            Ok(res.bytes().await?)
        }
        _ => Err(unexpected_status(res).await),
    }
}

fn header_str(
    res: &reqwest::Response,
    name: reqwest::header::HeaderName,
) -> Option<&str> {
    res.headers().get(name).and_then(|v| v.to_str().ok())
}
