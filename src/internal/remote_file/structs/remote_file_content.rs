use bytes::Bytes;

/// 服务端未给出 Content-Type 时使用的 MIME
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// 读取文件的结果：完整内容 + 服务端给出的 MIME
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFileContent {
    pub bytes: Bytes,
    pub mime_type: String,
}

impl RemoteFileContent {
    /// 按 UTF-8 解码内容，非法字节以替换字符代替
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}
