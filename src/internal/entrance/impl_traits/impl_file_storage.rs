use async_trait::async_trait;
use bytes::Bytes;

use crate::error::NextcloudError;
use crate::internal::entrance::remote::NextcloudClient;
use crate::internal::entrance::traits::file_storage::FileStorage;
use crate::remote_file::{DirectoryEntry, RemoteFileContent};

#[async_trait]
impl FileStorage for NextcloudClient {
    async fn save_file(
        &self,
        path: &str,
        content: Bytes,
    ) -> Result<String, NextcloudError> {
        NextcloudClient::save_file(self, path, content).await
    }

    async fn upload_file(&self, path: &str, content: Bytes) -> Result<(), NextcloudError> {
        NextcloudClient::upload_file(self, path, content).await
    }

    async fn read_file(&self, path: &str) -> Result<RemoteFileContent, NextcloudError> {
        NextcloudClient::read_file(self, path).await
    }

    async fn list_directory(
        &self,
        path: &str,
    ) -> Result<Vec<DirectoryEntry>, NextcloudError> {
        NextcloudClient::list_directory(self, path).await
    }

    async fn list_directories(
        &self,
        paths: &[&str],
    ) -> Vec<Result<Vec<DirectoryEntry>, NextcloudError>> {
        NextcloudClient::list_directories(self, paths).await
    }

    async fn move_item(&self, source: &str, destination: &str) -> Result<(), NextcloudError> {
        NextcloudClient::move_item(self, source, destination).await
    }

    async fn copy_item(&self, source: &str, destination: &str) -> Result<(), NextcloudError> {
        NextcloudClient::copy_item(self, source, destination).await
    }

    async fn create_folder(&self, path: &str) -> Result<(), NextcloudError> {
        NextcloudClient::create_folder(self, path).await
    }

    async fn delete_file(&self, path: &str) -> Result<(), NextcloudError> {
        NextcloudClient::delete_file(self, path).await
    }

    async fn delete_folder(&self, path: &str) -> Result<(), NextcloudError> {
        NextcloudClient::delete_folder(self, path).await
    }

    async fn download_folder_as_zip(&self, path: &str) -> Result<Bytes, NextcloudError> {
        NextcloudClient::download_folder_as_zip(self, path).await
    }

    async fn share_path(&self, path: &str) -> Result<String, NextcloudError> {
        NextcloudClient::share_path(self, path).await
    }

    async fn share_folder(&self, path: &str) -> Result<String, NextcloudError> {
        NextcloudClient::share_folder(self, path).await
    }
}
