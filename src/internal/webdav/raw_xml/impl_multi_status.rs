use quick_xml::de::from_str;
use tracing::warn;

use crate::internal::error::FailureReason;
use crate::internal::path::functions::dav_url::normalize_href;
use crate::internal::remote_file::structs::directory_entry::{
    DirectoryEntry, EntryKind,
};
use crate::webdav::structs::{MultiStatus, Prop, PropStat, Response};

pub trait ToDirectoryEntries {
    /// 转换为目录条目，`self_href` 为被查询目录规整后的路径，对应条目会被跳过
    fn to_directory_entries(self, self_href: &str) -> Vec<DirectoryEntry>;
}

/// 解析 PROPFIND 响应体并转换为目录条目，保持文档顺序
pub fn parse_directory_listing(
    xml: &str,
    self_href: &str,
) -> Result<Vec<DirectoryEntry>, FailureReason> {
    let multi_status: MultiStatus = from_str(xml)?;
    Ok(multi_status.to_directory_entries(self_href))
}

fn take_ok_propstat(propstats: Vec<PropStat>) -> Option<PropStat> {
    // 优先取第一个 2xx 的 PropStat；一个都没有时退回第一个
    let mut iter = propstats.into_iter();
    let first = iter.next()?;
    if is_2xx(&first.status) {
        return Some(first);
    }
    iter.find(|ps| is_2xx(&ps.status)).or(Some(first))
}

fn is_2xx(status: &str) -> bool {
    status
        .split_whitespace()
        .find_map(|t| t.parse::<u16>().ok())
        .map(|code| (200..=299).contains(&code))
        .unwrap_or(false)
}

fn decode_name(display_name: Option<String>, href: &str) -> String {
    // 服务端给了 display_name 就直接用，否则取 href 最后一段
    display_name.unwrap_or_else(|| {
        normalize_href(href).rsplit('/').next().unwrap_or("").to_string()
    })
}

/// 空元素（如 `<d:getcontenttype/>`）按缺失处理
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl ToDirectoryEntries for MultiStatus {
    fn to_directory_entries(self, self_href: &str) -> Vec<DirectoryEntry> {
        let mut entries = Vec::with_capacity(self.responses.len());

        for Response { href, propstats } in self.responses {
            if normalize_href(&href) == self_href {
                continue;
            }

            let Prop {
                resource_type,
                content_length,
                last_modified,
                content_type,
                display_name,
            } = take_ok_propstat(propstats).map(|ps| ps.prop).unwrap_or_default();

            let name = decode_name(non_empty(display_name), &href);

            let kind = match resource_type.and_then(|rt| rt.is_collection) {
                Some(_) => EntryKind::Folder,
                None => EntryKind::File,
            };

            let (size, mime_type) = match kind {
                EntryKind::Folder => (None, None),
                EntryKind::File => {
                    let size = non_empty(content_length).and_then(|raw| {
                        raw.parse::<u64>()
                            .inspect_err(|_| {
                                warn!(%href, %raw, "getcontentlength 无法解析为整数，忽略");
                            })
                            .ok()
                    });
                    (size, non_empty(content_type))
                }
            };

            entries.push(DirectoryEntry {
                name,
                kind,
                size,
                last_modified: non_empty(last_modified),
                mime_type,
            });
        }

        entries
    }
}
