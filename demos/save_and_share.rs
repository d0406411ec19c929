//! 演示：建目录、保存并分享、列目录、移动、复制、读取、分享目录、清理。
//!
//! 运行前在当前目录的 `.env` 中填写 `NEXTCLOUD_URL`、`NEXTCLOUD_USERNAME`、`NEXTCLOUD_PASSWORD`，
//! 可选 `NEXTCLOUD_USAGE_FOLDER`。日志级别用 `RUST_LOG` 控制，如 `RUST_LOG=nextcloud_fs=debug`。
//!
//! ```text
//! cargo run --example save_and_share
//! ```

use nextcloud_fs::{config::NextcloudConfig, error::NextcloudError, NextcloudClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), NextcloudError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = NextcloudConfig::from_dotenv()?;
    println!("✓ 已加载配置，用户 '{}'", config.username());
    let client = NextcloudClient::new(config)?;

    let timestamp = chrono::Utc::now().timestamp();
    let base_folder = format!("fs-demo-{timestamp}");
    let file_path = format!("{base_folder}/my-test-file.txt");
    let renamed_path = format!("{base_folder}/my-renamed-file.txt");
    let copied_path = format!("{base_folder}/my-copied-file.txt");

    println!("\n> 1. 创建目录 '{base_folder}'");
    client.create_folder(&base_folder).await?;

    println!("\n> 2. 保存文件 '{file_path}'");
    let public_url = client
        .save_file(&file_path, format!("Hello from nextcloud_fs at {timestamp}"))
        .await?;
    println!("   公开链接: {public_url}");

    println!("\n> 3. 列出 '{base_folder}'");
    for item in client.list_directory(&base_folder).await? {
        println!(
            "   - {} ({:?}) size={:?} mime={:?} modified={:?}",
            item.name, item.kind, item.size, item.mime_type, item.last_modified
        );
    }

    println!("\n> 4. 覆盖文件内容");
    client
        .upload_file(&file_path, format!("This content was altered at {timestamp}"))
        .await?;

    println!("\n> 5. 重命名为 '{renamed_path}'");
    client.move_item(&file_path, &renamed_path).await?;

    println!("\n> 6. 复制为 '{copied_path}'");
    client.copy_item(&renamed_path, &copied_path).await?;

    println!("\n> 7. 读取 '{copied_path}'");
    let file = client.read_file(&copied_path).await?;
    println!("   MIME: {}", file.mime_type);
    println!("   内容: {}", file.text_lossy());

    println!("\n> 8. 分享目录 '{base_folder}'");
    println!("   公开链接: {}", client.share_folder(&base_folder).await?);

    println!("\n> 9. 清理");
    client.delete_file(&renamed_path).await?;
    client.delete_file(&copied_path).await?;
    client.delete_folder(&base_folder).await?;
    // 再删一次也应成功
    client.delete_folder(&base_folder).await?;

    println!("\n✓ 全部完成");
    Ok(())
}
