//! 各操作的成功状态码表。
//!
//! 表内的码一律视为成功（包括 405 已存在、404 已删除这类"良性"结果），
//! 表外的码才进入错误分支。

pub const UPLOAD_OK: &[u16] = &[201, 204];
pub const READ_OK: &[u16] = &[200];
pub const LIST_OK: &[u16] = &[200, 207];
pub const MOVE_OK: &[u16] = &[201, 204];
pub const COPY_OK: &[u16] = &[201, 204];
/// 405：目录已存在
pub const MKCOL_OK: &[u16] = &[201, 405];
/// 404：目标本就不存在
pub const DELETE_OK: &[u16] = &[204, 404];
pub const SHARE_OK: &[u16] = &[200];

/// OCS 内层 `meta.statuscode` 的成功值（v1 接口为 100，v2 接口为 200）
pub const OCS_META_OK: &[i64] = &[100, 200];

pub fn is_accepted(table: &[u16], status: u16) -> bool {
    table.contains(&status)
}
