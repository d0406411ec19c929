use bytes::Bytes;
use futures_util::future::join_all;
use tracing::info;

use crate::{
    auth::NextcloudAuth,
    config::NextcloudConfig,
    error::NextcloudError,
    path::{dav_url, ocs_shares_url, resolve_remote_path, self_href},
    remote_file::{DirectoryEntry, RemoteFileContent},
    webdav::{
        enums::Depth, functions::get_folders_raw_data,
        traits::ToDirectoryEntries,
    },
};
use crate::internal::ocs::functions::create_public_share::create_public_share;
use crate::internal::webdav::functions::{collection, relocate, transfer};

/// 本库主入口：持有认证信息，对外提供全部文件操作
///
/// 可以随意 clone 并在多个任务中并发使用，内部只共享只读配置和 http 连接池。
///
/// example:
/// ```
/// use nextcloud_fs::{NextcloudClient, config::NextcloudConfig};
///
/// let config = NextcloudConfig::from_dotenv()?;
/// let client = NextcloudClient::new(config)?;
///
/// let url = client.save_file("reports/today.txt", "hello").await?;
/// let items = client.list_directory("reports").await?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NextcloudClient {
    auth: NextcloudAuth,
}

impl NextcloudClient {
    pub fn new(config: NextcloudConfig) -> Result<Self, NextcloudError> {
        Ok(Self { auth: NextcloudAuth::new(config)? })
    }

    pub fn from_auth(auth: NextcloudAuth) -> Self {
        Self { auth }
    }

    pub fn auth(&self) -> &NextcloudAuth {
        &self.auth
    }

    pub fn config(&self) -> &NextcloudConfig {
        &self.auth.config
    }

    /// 相对路径 → 远端路径（已拼接根目录）
    pub fn remote_path(&self, path: &str) -> String {
        resolve_remote_path(path, self.config().usage_folder())
    }

    /// 相对路径 → WebDAV 完整地址
    pub fn webdav_url(&self, path: &str) -> String {
        dav_url(self.config(), &self.remote_path(path))
    }

    /// 上传文件并返回公开分享链接
    ///
    /// 上传与分享依次进行，上传失败时不会发起分享请求。
    /// 内容会被复制一份再发送，因此借用的 `&str` / `&[u8]` 也可直接传入。
    pub async fn save_file(
        &self,
        path: &str,
        content: impl AsRef<[u8]>,
    ) -> Result<String, NextcloudError> {
        let remote_path = self.remote_path(path);
        let content = Bytes::copy_from_slice(content.as_ref());
        self.upload_remote(&remote_path, content).await?;
        self.share_remote(&remote_path).await
    }

    /// 上传（覆盖）文件，不创建分享
    pub async fn upload_file(
        &self,
        path: &str,
        content: impl AsRef<[u8]>,
    ) -> Result<(), NextcloudError> {
        let content = Bytes::copy_from_slice(content.as_ref());
        self.upload_remote(&self.remote_path(path), content).await
    }

    /// 读取文件内容与 MIME
    pub async fn read_file(
        &self,
        path: &str,
    ) -> Result<RemoteFileContent, NextcloudError> {
        transfer::get_file(&self.auth.client, &self.webdav_url(path), path)
            .await
            .map_err(NextcloudError::FileRead)
    }

    /// 列出目录的直接子项，不包含目录自身，顺序与服务端返回一致
    pub async fn list_directory(
        &self,
        path: &str,
    ) -> Result<Vec<DirectoryEntry>, NextcloudError> {
        let remote_path = self.remote_path(path);
        let url = dav_url(self.config(), &remote_path);

        let multi_status =
            get_folders_raw_data(&self.auth.client, &url, &Depth::One)
                .await
                .map_err(NextcloudError::DirectoryListing)?;

        Ok(multi_status
            .to_directory_entries(&self_href(self.config(), &remote_path)))
    }

    /// 并发列出多个目录，结果顺序与传入顺序一致
    pub async fn list_directories(
        &self,
        paths: &[&str],
    ) -> Vec<Result<Vec<DirectoryEntry>, NextcloudError>> {
        let tasks = paths.iter().map(|path| self.list_directory(path));
        join_all(tasks).await
    }

    /// 移动或重命名文件/目录
    pub async fn move_item(
        &self,
        source_path: &str,
        destination_path: &str,
    ) -> Result<(), NextcloudError> {
        relocate::move_resource(
            &self.auth.client,
            &self.webdav_url(source_path),
            &self.webdav_url(destination_path),
        )
        .await
        .map_err(NextcloudError::MoveRename)?;

        info!(from = source_path, to = destination_path, "已移动");
        Ok(())
    }

    pub async fn copy_item(
        &self,
        source_path: &str,
        destination_path: &str,
    ) -> Result<(), NextcloudError> {
        relocate::copy_resource(
            &self.auth.client,
            &self.webdav_url(source_path),
            &self.webdav_url(destination_path),
        )
        .await
        .map_err(NextcloudError::Copy)?;

        info!(from = source_path, to = destination_path, "已复制");
        Ok(())
    }

    /// 创建目录，已存在时直接返回成功
    pub async fn create_folder(&self, path: &str) -> Result<(), NextcloudError> {
        collection::make_collection(&self.auth.client, &self.webdav_url(path))
            .await
            .map_err(NextcloudError::FolderCreation)?;

        info!(path, "已创建目录");
        Ok(())
    }

    /// 删除文件，不存在时直接返回成功
    pub async fn delete_file(&self, path: &str) -> Result<(), NextcloudError> {
        self.delete_path(path).await
    }

    /// 删除目录（含内容），不存在时直接返回成功
    pub async fn delete_folder(&self, path: &str) -> Result<(), NextcloudError> {
        self.delete_path(path).await
    }

    /// 将目录打包为 zip 下载
    pub async fn download_folder_as_zip(
        &self,
        path: &str,
    ) -> Result<Bytes, NextcloudError> {
        transfer::get_folder_zip(&self.auth.client, &self.webdav_url(path), path)
            .await
            .map_err(NextcloudError::FolderDownload)
    }

    /// 为已存在的文件或目录创建只读公开链接
    pub async fn share_path(&self, path: &str) -> Result<String, NextcloudError> {
        self.share_remote(&self.remote_path(path)).await
    }

    /// 分享目录，与分享文件使用相同的默认值（公开链接、只读）
    pub async fn share_folder(&self, path: &str) -> Result<String, NextcloudError> {
        self.share_path(path).await
    }

    async fn delete_path(&self, path: &str) -> Result<(), NextcloudError> {
        collection::delete_resource(&self.auth.client, &self.webdav_url(path))
            .await
            .map_err(NextcloudError::Deletion)?;

        info!(path, "已删除");
        Ok(())
    }

    async fn upload_remote(
        &self,
        remote_path: &str,
        content: Bytes,
    ) -> Result<(), NextcloudError> {
        transfer::put_file(
            &self.auth.client,
            &dav_url(self.config(), remote_path),
            content,
        )
        .await
        .map_err(NextcloudError::UploadFailed)?;

        info!(path = remote_path, "已上传");
        Ok(())
    }

    async fn share_remote(&self, remote_path: &str) -> Result<String, NextcloudError> {
        let url = create_public_share(
            &self.auth.client,
            &ocs_shares_url(self.config()),
            remote_path,
        )
        .await
        .map_err(NextcloudError::ShareCreationFailed)?;

        info!(path = remote_path, %url, "已创建公开链接");
        Ok(url)
    }
}
