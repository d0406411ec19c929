/// 将调用方传入的相对路径拼接到根目录下，得到远端路径
///
/// - 仅去掉一个开头的 `/`，不处理 `.` 与 `..`
/// - `usage_folder` 为 `None` 时直接返回去掉斜杠后的路径
pub fn resolve_remote_path(path: &str, usage_folder: Option<&str>) -> String {
    let sanitized = path.strip_prefix('/').unwrap_or(path);

    match usage_folder {
        Some(folder) => format!("{folder}/{sanitized}"),
        None => sanitized.to_string(),
    }
}
