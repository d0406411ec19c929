use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Folder,
}

/// 列目录得到的单个条目，每次列目录重新生成，不做缓存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,                  // 友好化的文件或目录名
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub size: Option<u64>,             // 仅文件有值
    pub last_modified: Option<String>, // 服务端原始时间字符串
    pub mime_type: Option<String>,     // 仅文件有值
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// 按 HTTP-date（RFC 2822 兼容）解析最后修改时间，解析失败返回 `None`
    pub fn last_modified_at(&self) -> Option<DateTime<FixedOffset>> {
        self.last_modified
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc2822(s.trim()).ok())
    }
}
