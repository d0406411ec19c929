//! 文件操作 trait：供上层适配层（如 HTTP 接口）依赖，而不直接绑定具体客户端。

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::NextcloudError;
use crate::remote_file::{DirectoryEntry, RemoteFileContent};

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// 保存文件并返回公开链接
    async fn save_file(
        &self,
        path: &str,
        content: Bytes,
    ) -> Result<String, NextcloudError>;

    /// 上传（覆盖）文件，不创建分享
    async fn upload_file(&self, path: &str, content: Bytes) -> Result<(), NextcloudError>;

    async fn read_file(&self, path: &str) -> Result<RemoteFileContent, NextcloudError>;

    async fn list_directory(
        &self,
        path: &str,
    ) -> Result<Vec<DirectoryEntry>, NextcloudError>;

    /// 并发列出多个目录，结果与传入顺序一一对应
    async fn list_directories(
        &self,
        paths: &[&str],
    ) -> Vec<Result<Vec<DirectoryEntry>, NextcloudError>>;

    async fn move_item(&self, source: &str, destination: &str) -> Result<(), NextcloudError>;

    async fn copy_item(&self, source: &str, destination: &str) -> Result<(), NextcloudError>;

    async fn create_folder(&self, path: &str) -> Result<(), NextcloudError>;

    async fn delete_file(&self, path: &str) -> Result<(), NextcloudError>;

    async fn delete_folder(&self, path: &str) -> Result<(), NextcloudError>;

    async fn download_folder_as_zip(&self, path: &str) -> Result<Bytes, NextcloudError>;

    /// 为已存在的文件或目录创建公开链接
    async fn share_path(&self, path: &str) -> Result<String, NextcloudError>;

    async fn share_folder(&self, path: &str) -> Result<String, NextcloudError>;
}
