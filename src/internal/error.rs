//! 统一错误类型：每个操作族一个变体，具体原因由 [`FailureReason`] 描述。
//!
//! 任何底层错误（reqwest / quick-xml / serde_json）都会被包装成对应操作的错误，
//! 调用方只需面对一套错误分类。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NextcloudError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("上传失败: {0}")]
    UploadFailed(FailureReason),

    #[error("创建分享链接失败: {0}")]
    ShareCreationFailed(FailureReason),

    #[error("创建文件夹失败: {0}")]
    FolderCreation(FailureReason),

    #[error("删除失败: {0}")]
    Deletion(FailureReason),

    #[error("读取文件失败: {0}")]
    FileRead(FailureReason),

    #[error("列出目录失败: {0}")]
    DirectoryListing(FailureReason),

    #[error("移动/重命名失败: {0}")]
    MoveRename(FailureReason),

    #[error("复制失败: {0}")]
    Copy(FailureReason),

    #[error("下载文件夹失败: {0}")]
    FolderDownload(FailureReason),
}

impl NextcloudError {
    /// 取出具体失败原因，配置错误没有原因对象
    pub fn reason(&self) -> Option<&FailureReason> {
        match self {
            NextcloudError::Config(_) => None,
            NextcloudError::UploadFailed(r)
            | NextcloudError::ShareCreationFailed(r)
            | NextcloudError::FolderCreation(r)
            | NextcloudError::Deletion(r)
            | NextcloudError::FileRead(r)
            | NextcloudError::DirectoryListing(r)
            | NextcloudError::MoveRename(r)
            | NextcloudError::Copy(r)
            | NextcloudError::FolderDownload(r) => Some(r),
        }
    }

    /// 远端返回的状态码（仅状态码异常时存在）
    pub fn status(&self) -> Option<u16> {
        match self.reason()? {
            FailureReason::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum FailureReason {
    /// 状态码不在该操作的成功表内，保留原始响应体便于排查
    #[error("状态码 {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("资源不存在: {0}")]
    NotFound(String),

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("XML 解析失败: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP 层成功，但 OCS 内层状态码表示失败
    #[error("OCS 接口错误: {message} (code: {code})")]
    Ocs { message: String, code: i64 },

    #[error("OCS 响应中找不到公开链接")]
    MissingShareUrl,

    #[error("期望 application/zip，实际为 {0}")]
    ContentTypeMismatch(String),

    #[error("请求构建失败: {0}")]
    InvalidRequest(String),
}

impl FailureReason {
    pub(crate) fn unexpected_status(status: u16, body: String) -> Self {
        FailureReason::UnexpectedStatus { status, body }
    }
}
